//! Catalog API paths, relative to the configured API base URL.

use crate::domain::a001_category::Category;
use serde::Serialize;

pub const CATEGORIES_PATH: &str = "/products/categories";
pub const PRODUCTS_PATH: &str = "/products";
pub const DEFAULT_PAGE: u32 = 1;

#[derive(Debug, Serialize)]
struct PageQuery {
    page: u32,
}

/// `/products/category/{slug}?page={page}`
///
/// The page number is forwarded as-is; the server decides what it means.
pub fn products_by_category_path(category: &Category, page: u32) -> String {
    let query = serde_qs::to_string(&PageQuery { page })
        .unwrap_or_else(|_| format!("page={}", page));
    format!(
        "/products/category/{}?{}",
        urlencoding::encode(&category.slug),
        query
    )
}
