pub mod albums;
pub mod catalog;
pub mod core;
pub mod utils;
