pub mod aggregate;

pub use aggregate::{Category, ALL_CATEGORY};
