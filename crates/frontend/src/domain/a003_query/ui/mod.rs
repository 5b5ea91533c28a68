pub mod list;
pub mod moderation;
