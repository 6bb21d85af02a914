//! Selection controller: which category drives the product grid.
//!
//! A click moves the active marker at once, then fetches the category's
//! page and renders header, pagination and products in that order. Each
//! activation takes a generation number; a response that arrives after a
//! newer activation started is dropped instead of rendered.

use super::catalog_view::CatalogView;
use crate::shared::api::CatalogClient;
use contracts::domain::a001_category::Category;
use contracts::shared::endpoints::DEFAULT_PAGE;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct SelectionController {
    client: CatalogClient,
    view: CatalogView,
    generation: Arc<AtomicU64>,
}

impl SelectionController {
    pub fn new(client: CatalogClient, view: CatalogView) -> Self {
        Self {
            client,
            view,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn view(&self) -> CatalogView {
        self.view
    }

    /// Click handler entry point
    pub fn select(&self, category: Category) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            this.activate(category).await;
        });
    }

    /// Start-up: load categories, then activate "All" as if it were clicked
    pub fn start(&self) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            this.setup_categories().await;
        });
    }

    pub async fn setup_categories(&self) {
        let categories = self.client.list_categories().await;
        log::info!("Loaded {} categories", categories.len());
        self.view.set_categories(categories);
        self.activate(Category::all()).await;
    }

    /// Returns `false` when the response was stale and nothing was rendered
    pub async fn activate(&self, category: Category) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("Activating '{}' (request #{})", category, generation);
        self.view.set_active(category.clone());

        let page = self
            .client
            .list_products_by_category(&category, DEFAULT_PAGE)
            .await;

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!(
                "Discarding stale response for '{}' (request #{})",
                category,
                generation
            );
            return false;
        }

        self.view.set_header(&category);
        self.view.render_pagination_info(page.total, page.limit);
        self.view.render_products(page.products);
        true
    }
}
