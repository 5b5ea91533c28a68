use serde::{Deserialize, Serialize};

/// Lifecycle state shown on bookings and client queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Pending,
}

impl BookingStatus {
    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "Upcoming",
            BookingStatus::Completed => "Completed",
            BookingStatus::Pending => "Pending",
        }
    }

    /// Badge colour as a CSS hex string
    pub fn color(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "#2563EB",
            BookingStatus::Completed => "#16A34A",
            BookingStatus::Pending => "#DC2626",
        }
    }

    /// Badge background: the badge colour at roughly 10% alpha
    pub fn background(&self) -> String {
        format!("{}18", self.color())
    }

    pub fn all() -> Vec<BookingStatus> {
        vec![
            BookingStatus::Upcoming,
            BookingStatus::Completed,
            BookingStatus::Pending,
        ]
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette() {
        assert_eq!(BookingStatus::Upcoming.color(), "#2563EB");
        assert_eq!(BookingStatus::Completed.color(), "#16A34A");
        assert_eq!(BookingStatus::Pending.color(), "#DC2626");
        assert_eq!(BookingStatus::Pending.background(), "#DC262618");
    }

    #[test]
    fn test_display_matches_label() {
        for status in BookingStatus::all() {
            assert_eq!(status.to_string(), status.display_name());
        }
    }
}
