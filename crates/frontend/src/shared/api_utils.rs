//! API utilities for frontend-catalog communication
//!
//! Helpers for turning the configured API base and an endpoint path into a
//! request URL.

/// Normalize an API base URL
///
/// Trims surrounding whitespace and any trailing `/` so that joining with a
/// path that starts with `/` never produces `//`.
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Build a full API URL from a base and a path
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("https://dummyjson.com", "/products/categories");
/// assert_eq!(url, "https://dummyjson.com/products/categories");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base(base), path)
}
