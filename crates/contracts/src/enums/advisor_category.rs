use serde::{Deserialize, Serialize};

/// Category chips shown above the advisor list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdvisorCategory {
    #[default]
    AllAdvisors,
    TaxExperts,
    Investment,
    Wealth,
    Retirement,
}

impl AdvisorCategory {
    /// Label as rendered on the chip
    pub fn label(&self) -> &'static str {
        match self {
            AdvisorCategory::AllAdvisors => "All Advisors",
            AdvisorCategory::TaxExperts => "Tax Experts",
            AdvisorCategory::Investment => "Investment",
            AdvisorCategory::Wealth => "Wealth",
            AdvisorCategory::Retirement => "Retirement",
        }
    }

    /// Lowercased needle matched against tags and role.
    ///
    /// `None` for `AllAdvisors`, which matches everything.
    pub fn needle(&self) -> Option<String> {
        match self {
            AdvisorCategory::AllAdvisors => None,
            other => {
                let lower = other.label().to_lowercase();
                let residue = lower.strip_suffix(" experts").unwrap_or(&lower);
                Some(residue.to_string())
            }
        }
    }

    /// All categories in chip order
    pub fn all() -> Vec<AdvisorCategory> {
        vec![
            AdvisorCategory::AllAdvisors,
            AdvisorCategory::TaxExperts,
            AdvisorCategory::Investment,
            AdvisorCategory::Wealth,
            AdvisorCategory::Retirement,
        ]
    }
}

impl std::fmt::Display for AdvisorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
