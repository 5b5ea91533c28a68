use crate::enums::AdvisorCategory;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Advisor identifier from the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AdvisorId(pub u32);

impl AdvisorId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Financial advisor as listed in the catalog. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisor {
    pub id: AdvisorId,
    pub name: String,
    pub role: String,
    pub tags: Vec<String>,
    pub rating: f32,
    /// Consultation fee in whole rupees
    pub fee: u32,
    #[serde(rename = "exp")]
    pub experience_years: u32,
    #[serde(rename = "reviews")]
    pub review_count: u32,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

impl Advisor {
    /// Case-insensitive substring match on name, role or any tag.
    /// An empty search matches every advisor.
    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.role.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    /// Category match against tags and role (name is not considered)
    pub fn matches_category(&self, category: AdvisorCategory) -> bool {
        match category.needle() {
            None => true,
            Some(needle) => {
                self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                    || self.role.to_lowercase().contains(&needle)
            }
        }
    }
}

/// Advisors matching both the free-text search and the category, in input order
pub fn filter_advisors<'a>(
    advisors: &'a [Advisor],
    search: &str,
    category: AdvisorCategory,
) -> Vec<&'a Advisor> {
    advisors
        .iter()
        .filter(|a| a.matches_search(search) && a.matches_category(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog;

    fn names(list: &[&Advisor]) -> Vec<String> {
        list.iter().map(|a| a.name.clone()).collect()
    }

    #[test]
    fn test_all_advisors_with_empty_search_returns_everything() {
        let all = catalog::advisors();
        let filtered = filter_advisors(&all, "", AdvisorCategory::AllAdvisors);
        assert_eq!(filtered.len(), all.len());
        let ids: Vec<AdvisorId> = filtered.iter().map(|a| a.id).collect();
        let expected: Vec<AdvisorId> = all.iter().map(|a| a.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_search_tax_matches_only_tax_related() {
        let all = catalog::advisors();
        let filtered = filter_advisors(&all, "Tax", AdvisorCategory::AllAdvisors);
        assert_eq!(names(&filtered), vec!["Sarah Jenkins", "Arjun Mehta"]);
        for a in filtered {
            let hay = format!("{} {} {}", a.name, a.role, a.tags.join(" ")).to_lowercase();
            assert!(hay.contains("tax"));
        }
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let all = catalog::advisors();
        let filtered = filter_advisors(&all, "mICHael", AdvisorCategory::AllAdvisors);
        assert_eq!(names(&filtered), vec!["Michael Chen"]);
    }

    #[test]
    fn test_category_tax_experts() {
        let all = catalog::advisors();
        let filtered = filter_advisors(&all, "", AdvisorCategory::TaxExperts);
        assert_eq!(names(&filtered), vec!["Sarah Jenkins", "Arjun Mehta"]);
    }

    #[test]
    fn test_category_matches_role() {
        let all = catalog::advisors();
        let filtered = filter_advisors(&all, "", AdvisorCategory::Investment);
        assert_eq!(names(&filtered), vec!["Michael Chen"]);

        let filtered = filter_advisors(&all, "", AdvisorCategory::Wealth);
        assert_eq!(names(&filtered), vec!["Sarah Jenkins", "Elena Rodriguez"]);
    }

    #[test]
    fn test_category_ignores_name() {
        let mut advisor = catalog::advisors().remove(0);
        advisor.name = "Retirement Smith".into();
        advisor.role = "Planner".into();
        advisor.tags = vec!["Crypto".into()];
        assert!(!advisor.matches_category(AdvisorCategory::Retirement));
        assert!(advisor.matches_search("retirement"));
    }

    #[test]
    fn test_search_and_category_combine() {
        let all = catalog::advisors();
        let filtered = filter_advisors(&all, "gst", AdvisorCategory::Retirement);
        assert!(filtered.is_empty());
        let filtered = filter_advisors(&all, "gst", AdvisorCategory::TaxExperts);
        assert_eq!(names(&filtered), vec!["Arjun Mehta"]);
    }
}
