use crate::layout::CatalogView;
use leptos::prelude::*;
use std::fmt;

/// Server pagination counters as shown above the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    pub total: u64,
    pub limit: u64,
}

impl fmt::Display for PaginationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Products: {} | Products per page: {}",
            self.total, self.limit
        )
    }
}

/// Empty until the first page arrives
#[component]
#[allow(non_snake_case)]
pub fn PaginationInfo(catalog: CatalogView) -> impl IntoView {
    view! {
        {move || catalog.pagination.get().map(|summary| view! { <p>{summary.to_string()}</p> })}
    }
}
