//! Catalog API access: the HTTP transport seam and the fail-soft client
//! built on top of it.

pub mod client;
pub mod transport;

pub use client::CatalogClient;
pub use transport::{ApiError, GlooTransport, HttpTransport};
