use crate::enums::BookingStatus;
use serde::{Deserialize, Serialize};

/// Question submitted by the client from the Queries tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    pub text: String,
    pub status: BookingStatus,
}

impl UserQuery {
    /// New pending query, or `None` when the text is blank
    pub fn submit(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            status: BookingStatus::Pending,
        })
    }
}

/// Query awaiting moderation on the admin side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingQuery {
    pub id: u32,
    pub question: String,
}

/// Admin moderation queue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingQueries {
    items: Vec<PendingQuery>,
}

impl PendingQueries {
    pub fn new(items: Vec<PendingQuery>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PendingQuery] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Approve or reject: either way the query leaves the queue.
    /// Returns whether a query with `id` was present.
    pub fn resolve(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|q| q.id != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog;

    #[test]
    fn test_submit_rejects_blank_text() {
        assert!(UserQuery::submit("").is_none());
        assert!(UserQuery::submit("   \n\t").is_none());
    }

    #[test]
    fn test_submit_keeps_text_as_typed() {
        let q = UserQuery::submit("  Should I buy ELSS? ").unwrap();
        assert_eq!(q.text, "  Should I buy ELSS? ");
        assert_eq!(q.status, BookingStatus::Pending);
    }

    #[test]
    fn test_resolve_removes_by_id() {
        let mut queue = PendingQueries::new(catalog::pending_queries());
        assert_eq!(queue.len(), 3);
        assert!(queue.resolve(1026));
        assert_eq!(queue.len(), 2);
        assert!(queue.items().iter().all(|q| q.id != 1026));
        assert!(!queue.resolve(1026));
        assert!(queue.resolve(1025));
        assert!(queue.resolve(1027));
        assert!(queue.is_empty());
    }
}
