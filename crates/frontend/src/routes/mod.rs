pub mod routes;

pub use routes::{use_app_navigate, AppRoute, AppRoutes};
