pub mod a001_advisor;
pub mod a002_booking;
pub mod a003_query;
