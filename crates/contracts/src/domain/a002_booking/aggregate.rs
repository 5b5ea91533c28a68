use crate::domain::a001_advisor::Advisor;
use crate::enums::BookingStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A consultation booked by the signed-in client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBooking {
    #[serde(flatten)]
    pub advisor: Advisor,
    pub time: String,
    pub status: BookingStatus,
    pub date: NaiveDate,
}

impl UserBooking {
    /// Book `advisor` for the given slot today. New bookings are always upcoming.
    pub fn book(advisor: &Advisor, slot: &str, today: NaiveDate) -> Self {
        Self {
            advisor: advisor.clone(),
            time: slot.to_string(),
            status: BookingStatus::Upcoming,
            date: today,
        }
    }

    /// Amount charged, equal to the advisor's fee
    pub fn amount(&self) -> u32 {
        self.advisor.fee
    }
}

/// Row of the admin "Recent Bookings" table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentBooking {
    pub user: String,
    pub advisor: String,
    pub time: String,
    pub status: BookingStatus,
    pub amount: u32,
}

/// One bar of the weekly bookings chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBookings {
    pub day: String,
    pub bookings: u32,
}

/// Bar height as a percentage of the busiest day, for CSS bar charts
pub fn bar_height_percent(series: &[DailyBookings], day: &DailyBookings) -> f64 {
    let max = series.iter().map(|d| d.bookings).max().unwrap_or(0);
    if max == 0 {
        return 0.0;
    }
    f64::from(day.bookings) / f64::from(max) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog;

    #[test]
    fn test_book_creates_upcoming_booking() {
        let advisor = &catalog::advisors()[0];
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let booking = UserBooking::book(advisor, "10:30 AM", today);
        assert_eq!(booking.status, BookingStatus::Upcoming);
        assert_eq!(booking.time, "10:30 AM");
        assert_eq!(booking.date, today);
        assert_eq!(booking.amount(), 1500);
        assert_eq!(booking.advisor.name, "Sarah Jenkins");
    }

    #[test]
    fn test_bar_height_percent() {
        let series = catalog::weekly_bookings();
        let friday = series.iter().find(|d| d.day == "Fri").unwrap();
        assert_eq!(bar_height_percent(&series, friday), 100.0);
        let monday = &series[0];
        let expected = 10.0 / 31.0 * 100.0;
        assert!((bar_height_percent(&series, monday) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_bar_height_empty_series() {
        let day = DailyBookings {
            day: "Mon".into(),
            bookings: 0,
        };
        assert_eq!(bar_height_percent(&[], &day), 0.0);
    }
}
