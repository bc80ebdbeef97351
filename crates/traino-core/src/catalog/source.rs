//! Catalog source trait.
//!
//! Defines the interface for loading the selectable catalog.

use super::model::CatalogGroup;
use crate::error::Result;

/// An abstract source of catalog groups.
///
/// This trait defines the contract for fetching the universe of selectable
/// groups and their items, decoupling the editing session from the specific
/// backing store (e.g., TOML file, database, remote API).
///
/// # Implementation Notes
///
/// Implementations should handle:
/// - Shape adaptation: catalogs stored as delimited strings are split into
///   items here, not by callers
/// - A single attempt per call; retrying is the caller's responsibility
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads all catalog groups.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<CatalogGroup>)`: All groups, in display order
    /// - `Err(TrainoError::SourceUnavailable)`: The backing store could not
    ///   be reached or read
    async fn list_groups(&self) -> Result<Vec<CatalogGroup>>;
}
