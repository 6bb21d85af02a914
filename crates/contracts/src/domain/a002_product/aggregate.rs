use serde::{Deserialize, Deserializer, Serialize};

pub type ProductId = u64;

/// Товар каталога. Read-only snapshot of whatever the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub price: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub rating: f64,
}

/// `null` counts as zero so one incomplete record cannot sink the whole page
fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One page of products plus the server's pagination counters.
///
/// `Default` is the zero-valued page: no products, zero total, zero limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl ProductPage {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ignores_unknown_fields() {
        let json = r#"{
            "products": [
                {"id": 1, "title": "Essence Mascara Lash Princess", "price": 9.99, "rating": 4.94,
                 "thumbnail": "https://cdn.dummyjson.com/1/thumbnail.png",
                 "description": "ignored", "tags": ["beauty"]}
            ],
            "total": 194,
            "skip": 0,
            "limit": 30
        }"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].id, 1);
        assert_eq!(page.products[0].price, 9.99);
        assert_eq!(page.total, 194);
        assert_eq!(page.limit, 30);
    }

    #[test]
    fn test_page_missing_counters_default_to_zero() {
        let page: ProductPage = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert_eq!(page, ProductPage::default());
        assert!(page.is_empty());
    }

    #[test]
    fn test_product_optional_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": 7, "title": "Bare", "price": 5}"#).unwrap();
        assert_eq!(product.thumbnail, "");
        assert_eq!(product.rating, 0.0);
    }

    #[test]
    fn test_incomplete_numbers_keep_the_page() {
        let json = r#"{
            "products": [
                {"id": 1, "title": "No price", "rating": 4.1},
                {"id": 2, "title": "Null rating", "price": 12.5, "rating": null},
                {"id": 3, "title": "Complete", "price": 3, "rating": 5}
            ],
            "total": 3, "skip": 0, "limit": 30
        }"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 3);
        assert_eq!(page.products[0].price, 0.0);
        assert_eq!(page.products[0].rating, 4.1);
        assert_eq!(page.products[1].price, 12.5);
        assert_eq!(page.products[1].rating, 0.0);
        assert_eq!(page.products[2].price, 3.0);
    }

    #[test]
    fn test_product_requires_title() {
        let result: Result<Product, _> = serde_json::from_str(r#"{"id": 7, "price": 5}"#);
        assert!(result.is_err());
    }
}
