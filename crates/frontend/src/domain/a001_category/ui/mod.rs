pub mod header;
pub mod list;
