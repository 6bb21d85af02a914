use crate::domain::a001_category::ui::header::CategoryHeader;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::grid::ProductGrid;
use crate::domain::a002_product::ui::pagination::PaginationInfo;
use crate::layout::{CatalogView, SelectionController};
use crate::shared::api::{CatalogClient, GlooTransport};
use crate::shared::config::CatalogConfig;
use crate::shared::mount::{CatalogMount, MountError};
use contracts::domain::a001_category::Category;
use leptos::mount::mount_to;
use leptos::prelude::*;
use std::sync::Arc;

/// Mount the catalog into the host page's containers.
///
/// Nothing is mounted unless all four containers exist. The returned
/// controller still has to be started.
pub fn mount_catalog(config: &CatalogConfig) -> Result<SelectionController, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let mount = CatalogMount::locate(&document, &config.dom)?;
    mount.clear();

    // Created outside any owner: lives as long as the page.
    let catalog = CatalogView::new();
    let client = CatalogClient::new(Arc::new(GlooTransport), config.api.base_url.clone());
    let controller = SelectionController::new(client, catalog);

    let on_select = Callback::new({
        let controller = controller.clone();
        move |category: Category| controller.select(category)
    });

    let CatalogMount {
        categories_list,
        product_grid,
        category_header,
        pagination_info,
    } = mount;

    mount_to(categories_list, move || {
        view! { <CategoryList catalog=catalog on_select=on_select /> }
    })
    .forget();
    mount_to(category_header, move || view! { <CategoryHeader catalog=catalog /> }).forget();
    mount_to(pagination_info, move || view! { <PaginationInfo catalog=catalog /> }).forget();
    mount_to(product_grid, move || view! { <ProductGrid catalog=catalog /> }).forget();

    log::info!("Catalog mounted (API: {})", config.api.base_url);
    Ok(controller)
}
