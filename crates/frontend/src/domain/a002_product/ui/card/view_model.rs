use contracts::domain::a002_product::Product;

/// Display strings for one product card
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardVm {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub price_label: String,
    pub rating_label: String,
}

impl From<&Product> for ProductCardVm {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            thumbnail: product.thumbnail.clone(),
            price_label: format!("Price: ${}", product.price),
            rating_label: format!("Rating: {}", product.rating),
        }
    }
}
