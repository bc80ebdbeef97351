//! Traino core domain.
//!
//! Domain models and storage contracts for grouped multi-select state:
//! catalogs of selectable items, the per-group selection map with its
//! collapse-empty-groups invariant, and the partial-document store the
//! selection is reconciled against.

pub mod catalog;
pub mod document;
pub mod error;
pub mod selection;
pub mod subject;

// Re-export common types
pub use catalog::{CatalogGroup, CatalogItem, CatalogSource};
pub use document::{Document, DocumentPatch, DocumentStore};
pub use error::{Result, TrainoError};
pub use selection::GroupedSelection;
pub use subject::{OnboardingProfile, Subject};
