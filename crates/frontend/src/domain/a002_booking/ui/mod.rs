pub mod list;
pub mod table;
