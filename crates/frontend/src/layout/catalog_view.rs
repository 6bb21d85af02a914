//! CatalogView — единое состояние отображения каталога.
//!
//! Every container on the page renders from these signals and nothing else;
//! the render operations below are full replacements, never diffs.

use crate::domain::a002_product::ui::pagination::PaginationSummary;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CatalogView {
    /// Categories from the API, in server order, without the "All" sentinel
    pub categories: RwSignal<Vec<Category>>,
    pub active: RwSignal<Option<Category>>,
    pub header: RwSignal<String>,
    pub pagination: RwSignal<Option<PaginationSummary>>,
    pub products: RwSignal<Vec<Product>>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(Vec::new()),
            active: RwSignal::new(None),
            header: RwSignal::new(String::new()),
            pagination: RwSignal::new(None),
            products: RwSignal::new(Vec::new()),
        }
    }

    /// Replace the category list.
    ///
    /// Drops anything equal to the "All" sentinel and repeated slugs so that
    /// no two list items can carry the active marker.
    pub fn set_categories(&self, categories: Vec<Category>) {
        let mut unique: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            match skip_reason(&unique, &category) {
                Some(SkipReason::Sentinel) => {
                    log::warn!("API returned the reserved '{}' category, skipping", category)
                }
                Some(SkipReason::Duplicate) => {
                    log::warn!("Skipping duplicate category '{}'", category)
                }
                None => unique.push(category),
            }
        }
        self.categories.set(unique);
    }

    /// List items in display order: the static "All" item, then the API's
    pub fn items(&self) -> Vec<Category> {
        let mut items = vec![Category::all()];
        self.categories.with(|categories| items.extend(categories.iter().cloned()));
        items
    }

    pub fn set_active(&self, category: Category) {
        self.active.set(Some(category));
    }

    pub fn is_active(&self, category: &Category) -> bool {
        self.active.with(|active| active.as_ref() == Some(category))
    }

    pub fn set_header(&self, category: &Category) {
        self.header.set(format!("Products - {}", category));
    }

    pub fn render_pagination_info(&self, total: u64, limit: u64) {
        self.pagination.set(Some(PaginationSummary { total, limit }));
    }

    pub fn render_products(&self, products: Vec<Product>) {
        self.products.set(products);
    }
}

/// Why an API category does not get its own list item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    /// Collides with the client-side "All" item
    Sentinel,
    Duplicate,
}

fn skip_reason(accepted: &[Category], category: &Category) -> Option<SkipReason> {
    if category.is_all() {
        Some(SkipReason::Sentinel)
    } else if accepted.contains(category) {
        Some(SkipReason::Duplicate)
    } else {
        None
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}
