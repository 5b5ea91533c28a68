pub mod dto;

pub use dto::{admin_stat_cards, pending_queries_change, StatCard};
