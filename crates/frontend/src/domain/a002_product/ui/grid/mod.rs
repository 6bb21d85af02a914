use crate::domain::a002_product::ui::card::ProductCard;
use crate::layout::CatalogView;
use leptos::prelude::*;

/// Сетка товаров: одна карточка на товар, в порядке ответа API.
#[component]
#[allow(non_snake_case)]
pub fn ProductGrid(catalog: CatalogView) -> impl IntoView {
    view! {
        {move || catalog.products.get().into_iter().map(|product| {
            view! { <ProductCard product=product /> }
        }).collect_view()}
    }
}
