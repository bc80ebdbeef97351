//! Document store trait.
//!
//! Defines the interface for per-subject document persistence.

use super::{Document, DocumentPatch};
use crate::error::Result;

/// An abstract partial-document store keyed by subject id.
///
/// This trait defines the contract for reading and patching subject
/// documents, decoupling the application's core logic from the specific
/// storage mechanism (e.g., JSON files, in-memory map, remote API).
///
/// # Implementation Notes
///
/// Implementations should handle:
/// - Merge semantics: a patch touches only the fields it names
/// - Upsert: patching a missing document creates it
/// - Atomicity of one `apply` call; there is no cross-call transaction,
///   concurrent writers are last-writer-wins
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads a document by subject id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Document))`: Document found
    /// - `Ok(None)`: No document stored under this id
    /// - `Err(TrainoError::SourceUnavailable)`: The store could not be
    ///   reached or read
    async fn get(&self, id: &str) -> Result<Option<Document>>;

    /// Applies a partial update to a document, creating it if absent.
    ///
    /// Fields named by the patch are set or removed; all other fields are
    /// untouched. Deleting a field the document does not have is a no-op.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Patch applied
    /// - `Err(TrainoError::PersistFailure)`: The store rejected or could
    ///   not complete the write
    async fn apply(&self, id: &str, patch: DocumentPatch) -> Result<()>;
}
