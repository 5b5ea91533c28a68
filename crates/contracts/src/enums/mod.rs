pub mod advisor_category;
pub mod booking_status;

pub use advisor_category::AdvisorCategory;
pub use booking_status::BookingStatus;
