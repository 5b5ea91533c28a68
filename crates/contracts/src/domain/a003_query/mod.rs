pub mod aggregate;

pub use aggregate::{PendingQueries, PendingQuery, UserQuery};
