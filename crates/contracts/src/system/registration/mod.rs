//! Registration form engine
//!
//! - field.rs: field identifiers and error-map keys
//! - normalize.rs: input filters applied at capture
//! - rules.rs: per-field validation and age computation
//! - line_items.rs: income/expense entries and totals
//! - form.rs: session state (values, touched set, errors) and submit

pub mod field;
pub mod form;
pub mod line_items;
pub mod normalize;
pub mod rules;

pub use field::{FormKey, LineItemKind, RegistrationField};
pub use form::{FieldErrors, Registration, RegistrationForm};
pub use line_items::{LineItem, LineItemField};
pub use rules::{age_on, validate_field, ValidationError, MINIMUM_AGE};
