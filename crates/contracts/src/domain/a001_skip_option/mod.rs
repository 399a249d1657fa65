pub mod aggregate;
pub mod catalog;

pub use aggregate::{SkipOption, SkipOptionId};
pub use catalog::CatalogQuery;
