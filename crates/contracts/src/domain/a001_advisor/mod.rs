pub mod aggregate;

pub use aggregate::{filter_advisors, Advisor, AdvisorId};
