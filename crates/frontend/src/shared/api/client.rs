//! Fail-soft catalog client.
//!
//! Callers never see an error: every failure (network, non-2xx, malformed
//! JSON) is logged here and replaced by an empty value.

use super::transport::{ApiError, HttpTransport};
use crate::shared::api_utils::api_url;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::ProductPage;
use contracts::shared::endpoints::{products_by_category_path, CATEGORIES_PATH, PRODUCTS_PATH};
use serde::de::DeserializeOwned;
use std::sync::Arc;

#[derive(Clone)]
pub struct CatalogClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl CatalogClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = api_url(&self.base_url, path);
        let body = self.transport.get_text(&url).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{}: {}", url, e)))
    }

    /// All categories in server order; empty on failure
    pub async fn list_categories(&self) -> Vec<Category> {
        match self.get_json::<Vec<Category>>(CATEGORIES_PATH).await {
            Ok(categories) => categories,
            Err(e) => {
                log::error!("Error fetching product categories: {}", e);
                Vec::new()
            }
        }
    }

    /// Unfiltered catalog; zero-valued page on failure
    pub async fn list_all_products(&self) -> ProductPage {
        match self.get_json::<ProductPage>(PRODUCTS_PATH).await {
            Ok(page) => page,
            Err(e) => {
                log::error!("Error fetching products: {}", e);
                ProductPage::default()
            }
        }
    }

    /// Products of one category. The "All" sentinel ignores `page` and
    /// returns exactly what [`Self::list_all_products`] returns.
    pub async fn list_products_by_category(&self, category: &Category, page: u32) -> ProductPage {
        if category.is_all() {
            return self.list_all_products().await;
        }

        let path = products_by_category_path(category, page);
        match self.get_json::<ProductPage>(&path).await {
            Ok(page) => page,
            Err(e) => {
                log::error!("Error fetching products for '{}': {}", category, e);
                ProductPage::default()
            }
        }
    }
}
