//! Domain services

mod validation;

pub use validation::{current_year, validate};
