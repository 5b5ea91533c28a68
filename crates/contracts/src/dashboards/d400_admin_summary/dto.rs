use serde::{Deserialize, Serialize};

/// Pending-query count the dashboard treats as the baseline for its change figure
const PENDING_QUERIES_BASELINE: usize = 3;

/// One tile of the admin stats grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub change: String,
    pub positive: bool,
    /// Icon name for the frontend icon set
    pub icon: String,
    /// Accent colour of the icon
    pub accent: String,
}

impl StatCard {
    fn new(
        label: &str,
        value: String,
        change: String,
        positive: bool,
        icon: &str,
        accent: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            value,
            change,
            positive,
            icon: icon.to_string(),
            accent: accent.to_string(),
        }
    }
}

/// Change figure of the pending-queries tile: how far below the baseline we are
pub fn pending_queries_change(pending: usize) -> String {
    if pending < PENDING_QUERIES_BASELINE {
        format!("-{}", PENDING_QUERIES_BASELINE - pending)
    } else {
        "0".to_string()
    }
}

/// Stats grid for the admin dashboard. Only the pending-queries tile is live.
pub fn admin_stat_cards(pending_queries: usize) -> Vec<StatCard> {
    vec![
        StatCard::new(
            "TOTAL BOOKINGS",
            "1,284".into(),
            "+12.5%".into(),
            true,
            "calendar",
            "#2563EB",
        ),
        StatCard::new("ACTIVE ADVISORS", "48".into(), "+2".into(), true, "users", "#7C3AED"),
        StatCard::new(
            "TOTAL REVENUE",
            "₹4.2L".into(),
            "+8.2%".into(),
            true,
            "trending-up",
            "#059669",
        ),
        StatCard::new(
            "PENDING QUERIES",
            pending_queries.to_string(),
            pending_queries_change(pending_queries),
            false,
            "message",
            "#F59E0B",
        ),
    ]
}
