pub mod aggregate;

pub use aggregate::{bar_height_percent, DailyBookings, RecentBooking, UserBooking};
