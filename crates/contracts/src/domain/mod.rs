pub mod a001_skip_option;
pub mod common;
