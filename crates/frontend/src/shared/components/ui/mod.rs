pub mod badge;
pub mod input;

pub use badge::{Badge, StatusBadge};
pub use input::FormField;
