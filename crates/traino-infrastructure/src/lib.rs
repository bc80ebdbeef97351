//! Traino infrastructure.
//!
//! Concrete implementations of the core storage contracts: the JSON-file
//! document store, the in-memory document store, and the TOML catalog
//! source.

pub mod json_document_store;
pub mod memory_document_store;
pub mod paths;
pub mod toml_catalog_source;

pub use crate::json_document_store::JsonDirDocumentStore;
pub use crate::memory_document_store::InMemoryDocumentStore;
pub use crate::paths::TrainoPaths;
pub use crate::toml_catalog_source::{StaticCatalogSource, TomlCatalogSource};
