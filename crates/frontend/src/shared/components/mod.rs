pub mod search_input;
pub mod ui;
