pub mod catalog_view;
pub mod selection;

pub use catalog_view::CatalogView;
pub use selection::SelectionController;
