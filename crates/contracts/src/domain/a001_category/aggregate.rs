use serde::{Deserialize, Serialize};
use std::fmt;

/// Синтетическая категория "без фильтра". API её никогда не возвращает.
pub const ALL_CATEGORY: &str = "All";

// ============================================================================
// Aggregate
// ============================================================================

/// Категория товаров.
///
/// Identity is the `slug` alone: two categories with the same slug are the
/// same category even if their display names differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "CategoryRepr")]
pub struct Category {
    pub slug: String,
    pub name: String,
}

impl Category {
    /// Category whose display name is its slug (the bare-string API shape)
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            name: slug.clone(),
            slug,
        }
    }

    pub fn with_name(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }

    /// The "All" sentinel
    pub fn all() -> Self {
        Self::new(ALL_CATEGORY)
    }

    pub fn is_all(&self) -> bool {
        self.slug == ALL_CATEGORY
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.slug == other.slug
    }
}

impl Eq for Category {}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug)
    }
}

// ============================================================================
// Wire shapes
// ============================================================================

/// `/products/categories` has served both a plain array of slugs and an
/// array of `{ slug, name, url }` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRepr {
    Slug(String),
    Described {
        slug: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<CategoryRepr> for Category {
    fn from(repr: CategoryRepr) -> Self {
        match repr {
            CategoryRepr::Slug(slug) => Category::new(slug),
            CategoryRepr::Described { slug, name } => match name {
                Some(name) => Category::with_name(slug, name),
                None => Category::new(slug),
            },
        }
    }
}
