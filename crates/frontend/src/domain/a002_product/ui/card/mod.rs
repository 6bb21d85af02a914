pub mod view_model;

use self::view_model::ProductCardVm;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;

/// Карточка товара.
///
/// The "Add to Cart" button only carries the product id; it has no handler.
#[component]
#[allow(non_snake_case)]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ProductCardVm {
        id,
        title,
        thumbnail,
        price_label,
        rating_label,
    } = ProductCardVm::from(&product);
    let alt = title.clone();

    view! {
        <div class="product-card">
            <img src=thumbnail alt=alt />
            <h3>{title}</h3>
            <p>{price_label}</p>
            <p>{rating_label}</p>
            <button class="add-to-cart" data-product-id=id>
                "Add to Cart"
            </button>
        </div>
    }
}
