//! Selection persistence reconciliation.
//!
//! Commits an in-memory [`GroupedSelection`] to one field of a subject's
//! document, or clears it, using single atomic partial updates.

use std::sync::Arc;
use traino_core::document::{fields, DocumentPatch, DocumentStore};
use traino_core::error::Result;
use traino_core::selection::GroupedSelection;

/// Reconciles one selection field against the document store.
///
/// The reconciler never holds selection state itself; it translates between
/// the in-memory map and the persisted field:
///
/// - a non-empty selection is written wholesale (no merging with the
///   previously stored value)
/// - an empty selection is persisted as the *absence* of the field: it is
///   deleted rather than stored as an empty structure
/// - every successful save or clear also stamps `lastUpdated`
#[derive(Clone)]
pub struct SelectionReconciler {
    store: Arc<dyn DocumentStore>,
    field: String,
}

impl SelectionReconciler {
    /// Creates a reconciler for the given document field.
    pub fn new(store: Arc<dyn DocumentStore>, field: impl Into<String>) -> Self {
        Self {
            store,
            field: field.into(),
        }
    }

    /// Reconciler for the assigned-exercises field.
    pub fn for_exercises(store: Arc<dyn DocumentStore>) -> Self {
        Self::new(store, fields::ASSIGNED_EXERCISES)
    }

    /// Reconciler for the onboarding goals field.
    pub fn for_goals(store: Arc<dyn DocumentStore>) -> Self {
        Self::new(store, fields::GOALS)
    }

    /// The document field this reconciler owns.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Loads the persisted selection for a subject.
    ///
    /// Returns an empty selection when the subject document does not exist
    /// or has no selection field. Values arriving from storage are
    /// normalized (duplicate indices dropped, empty groups collapsed).
    ///
    /// # Returns
    ///
    /// - `Ok(GroupedSelection)`: The stored selection, possibly empty
    /// - `Err(TrainoError::SourceUnavailable)`: The store could not be read
    pub async fn load(&self, subject_id: &str) -> Result<GroupedSelection> {
        let document = self.store.get(subject_id).await?;
        match document.and_then(|mut d| d.remove(&self.field)) {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(GroupedSelection::new()),
        }
    }

    /// Persists a selection for a subject in one atomic partial update.
    ///
    /// An empty selection deletes the field; a non-empty selection replaces
    /// it wholesale. Both stamp `lastUpdated`. Other document fields are
    /// untouched. On failure nothing is retried and no state changes.
    pub async fn save(&self, subject_id: &str, selection: &GroupedSelection) -> Result<()> {
        let patch = if selection.is_empty() {
            tracing::debug!(subject_id, field = %self.field, "selection empty, deleting field");
            DocumentPatch::new().delete(self.field.as_str())
        } else {
            DocumentPatch::new().set(self.field.as_str(), serde_json::to_value(selection)?)
        };
        let patch = patch.set(fields::LAST_UPDATED, now_rfc3339());

        self.store.apply(subject_id, patch).await?;
        tracing::info!(
            subject_id,
            field = %self.field,
            groups = selection.group_count(),
            "selection saved"
        );
        Ok(())
    }

    /// Unconditionally removes the persisted selection field and stamps
    /// `lastUpdated`, regardless of what any in-memory state says.
    pub async fn clear(&self, subject_id: &str) -> Result<()> {
        let patch = DocumentPatch::new()
            .delete(self.field.as_str())
            .set(fields::LAST_UPDATED, now_rfc3339());

        self.store.apply(subject_id, patch).await?;
        tracing::info!(subject_id, field = %self.field, "selection cleared");
        Ok(())
    }
}

pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
