pub mod catalog;
pub mod validation;
