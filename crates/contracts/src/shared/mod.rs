pub mod config;
pub mod grid;
pub mod number_format;
pub mod validation;
