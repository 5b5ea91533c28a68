pub mod grid;
pub mod list;
