//! Domain types and client-side logic shared by the FinAdvise views.
//!
//! Pure Rust, no browser APIs: everything here is unit-testable on the host.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
