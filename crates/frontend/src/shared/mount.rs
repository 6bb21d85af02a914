//! DOM mount points.
//!
//! The host page must provide the four catalog containers before start-up.
//! A missing one is a fatal start-up error, reported by id.

use crate::shared::config::DomConfig;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("No window object available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Required element #{id} not found in the page")]
    MissingElement { id: String },

    #[error("Element #{id} is not an HTML element")]
    NotHtmlElement { id: String },
}

/// Handles to every container the catalog renders into
pub struct CatalogMount<E = HtmlElement> {
    pub categories_list: E,
    pub product_grid: E,
    pub category_header: E,
    pub pagination_info: E,
}

impl<E> CatalogMount<E> {
    /// Resolve each configured id with `find`, stopping at the first failure
    pub fn locate_with<F>(dom: &DomConfig, mut find: F) -> Result<Self, MountError>
    where
        F: FnMut(&str) -> Result<E, MountError>,
    {
        Ok(Self {
            categories_list: find(&dom.categories_list)?,
            product_grid: find(&dom.product_grid)?,
            category_header: find(&dom.category_header)?,
            pagination_info: find(&dom.pagination_info)?,
        })
    }
}

impl CatalogMount {
    pub fn locate(document: &Document, dom: &DomConfig) -> Result<Self, MountError> {
        Self::locate_with(dom, |id| find_element(document, id))
    }

    /// Drop placeholder markup; the mounted components own the contents
    pub fn clear(&self) {
        for element in [
            &self.categories_list,
            &self.product_grid,
            &self.category_header,
            &self.pagination_info,
        ] {
            element.set_inner_html("");
        }
    }
}

fn find_element(document: &Document, id: &str) -> Result<HtmlElement, MountError> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement { id: id.to_string() })?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::build_config;

    fn page_with(ids: &[&str]) -> impl FnMut(&str) -> Result<String, MountError> {
        let present: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        move |id| {
            present
                .iter()
                .find(|candidate| candidate.as_str() == id)
                .cloned()
                .ok_or_else(|| MountError::MissingElement { id: id.to_string() })
        }
    }

    #[test]
    fn test_locate_all_containers() {
        let dom = build_config(None).unwrap().dom;
        let mount = CatalogMount::locate_with(
            &dom,
            page_with(&[
                "categories-list",
                "product-grid",
                "category-header",
                "pagination-info",
            ]),
        )
        .unwrap();
        assert_eq!(mount.categories_list, "categories-list");
        assert_eq!(mount.product_grid, "product-grid");
        assert_eq!(mount.category_header, "category-header");
        assert_eq!(mount.pagination_info, "pagination-info");
    }

    #[test]
    fn test_missing_container_fails_with_its_id() {
        let dom = build_config(None).unwrap().dom;
        let result = CatalogMount::locate_with(
            &dom,
            page_with(&["categories-list", "category-header", "pagination-info"]),
        );
        let err = result.err().unwrap();
        assert_eq!(
            err,
            MountError::MissingElement {
                id: "product-grid".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Required element #product-grid not found in the page"
        );
    }

    #[test]
    fn test_stops_at_first_missing_container() {
        let dom = build_config(None).unwrap().dom;
        let mut asked = Vec::new();
        let result = CatalogMount::<String>::locate_with(&dom, |id| {
            asked.push(id.to_string());
            Err(MountError::MissingElement { id: id.to_string() })
        });
        assert!(result.is_err());
        assert_eq!(asked, vec!["categories-list"]);
    }
}
