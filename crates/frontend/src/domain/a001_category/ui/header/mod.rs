use crate::layout::CatalogView;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryHeader(catalog: CatalogView) -> impl IntoView {
    view! { {move || catalog.header.get()} }
}
