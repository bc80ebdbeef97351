//! Catalog of selectable groups and items.

mod model;
pub mod preset;
mod source;

pub use model::{CatalogGroup, CatalogItem};
pub use source::CatalogSource;
