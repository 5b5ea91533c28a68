pub mod admin_dashboard;
pub mod client_dashboard;
pub mod login;
pub mod register;
