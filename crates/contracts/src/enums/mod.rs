pub mod catalog_tab;
pub mod skip_category;
pub mod sort_order;

pub use catalog_tab::CatalogTab;
pub use skip_category::SkipCategory;
pub use sort_order::SortOrder;
