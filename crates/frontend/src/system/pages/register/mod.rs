//! Registration page
//!
//! MVVM split:
//! - view_model.rs: form state and commands over `RegistrationForm`
//! - view.rs: Leptos components (pure UI)

mod view;
mod view_model;

pub use view::RegisterPage;
pub use view_model::RegisterViewModel;
