pub mod card;
pub mod confirm;
pub mod list;
