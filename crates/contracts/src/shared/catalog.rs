//! Static mock data backing every view
//!
//! Nothing here is persisted; each call returns a fresh copy.

use crate::domain::a001_advisor::{Advisor, AdvisorId};
use crate::domain::a002_booking::{DailyBookings, RecentBooking};
use crate::domain::a003_query::PendingQuery;
use crate::enums::{AdvisorCategory, BookingStatus};

#[allow(clippy::too_many_arguments)]
fn advisor(
    id: u32,
    name: &str,
    role: &str,
    tags: &[&str],
    rating: f32,
    fee: u32,
    experience_years: u32,
    review_count: u32,
    avatar_url: &str,
) -> Advisor {
    Advisor {
        id: AdvisorId::new(id),
        name: name.to_string(),
        role: role.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        rating,
        fee,
        experience_years,
        review_count,
        avatar_url: avatar_url.to_string(),
    }
}

pub fn advisors() -> Vec<Advisor> {
    vec![
        advisor(
            1,
            "Sarah Jenkins",
            "Certified Financial Planner",
            &["Tax Planning", "Retirement", "Wealth Management"],
            4.9,
            1500,
            12,
            850,
            "https://randomuser.me/api/portraits/women/44.jpg",
        ),
        advisor(
            2,
            "Michael Chen",
            "Investment Strategist",
            &["Stock Market", "Crypto", "ETFs"],
            4.8,
            1200,
            8,
            420,
            "https://randomuser.me/api/portraits/men/32.jpg",
        ),
        advisor(
            3,
            "Elena Rodriguez",
            "Wealth Management Expert",
            &["Estate Planning", "Private Banking", "Insurance"],
            5.0,
            2500,
            15,
            610,
            "https://randomuser.me/api/portraits/women/68.jpg",
        ),
        advisor(
            4,
            "Arjun Mehta",
            "Tax Consultant",
            &["Tax Experts", "ITR Filing", "GST"],
            4.7,
            900,
            6,
            310,
            "https://randomuser.me/api/portraits/men/75.jpg",
        ),
    ]
}

pub fn categories() -> Vec<AdvisorCategory> {
    AdvisorCategory::all()
}

pub fn weekly_bookings() -> Vec<DailyBookings> {
    [
        ("Mon", 10),
        ("Tue", 20),
        ("Wed", 15),
        ("Thu", 23),
        ("Fri", 31),
        ("Sat", 9),
        ("Sun", 8),
    ]
    .into_iter()
    .map(|(day, bookings)| DailyBookings {
        day: day.to_string(),
        bookings,
    })
    .collect()
}

pub fn recent_bookings() -> Vec<RecentBooking> {
    vec![
        RecentBooking {
            user: "Alex Morgan".into(),
            advisor: "Sarah Jenkins".into(),
            time: "10:30 AM".into(),
            status: BookingStatus::Upcoming,
            amount: 1500,
        },
        RecentBooking {
            user: "David Beck".into(),
            advisor: "Michael Chen".into(),
            time: "11:45 AM".into(),
            status: BookingStatus::Completed,
            amount: 1200,
        },
        RecentBooking {
            user: "Linda Ray".into(),
            advisor: "Elena Rodriguez".into(),
            time: "02:00 PM".into(),
            status: BookingStatus::Pending,
            amount: 2500,
        },
    ]
}

pub fn pending_queries() -> Vec<PendingQuery> {
    vec![
        PendingQuery {
            id: 1025,
            question: "How to optimize tax for LTCG?".into(),
        },
        PendingQuery {
            id: 1026,
            question: "How to optimize tax for LTCG?".into(),
        },
        PendingQuery {
            id: 1027,
            question: "Should I invest in NPS for retirement?".into(),
        },
    ]
}
