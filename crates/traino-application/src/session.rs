//! Interactive selection editing session.
//!
//! A session is the unit of editing one subject's grouped selection: it
//! loads the catalog and any persisted selection, holds the in-memory
//! toggle state, and commits it back through the reconciler.

use crate::reconciler::SelectionReconciler;
use std::collections::BTreeSet;
use std::sync::Arc;
use traino_core::catalog::{CatalogGroup, CatalogSource};
use traino_core::document::DocumentStore;
use traino_core::error::Result;
use traino_core::selection::GroupedSelection;
use traino_core::subject::Subject;

/// One subject's editing session.
///
/// The session owns its selection state exclusively; nothing is shared
/// across sessions and no locking happens here. All I/O flows through the
/// injected [`DocumentStore`] and [`CatalogSource`]. Abandoning the session
/// without calling [`SelectionSession::save`] discards the in-memory state
/// with no persisted effect.
pub struct SelectionSession {
    subject: Subject,
    catalog: Vec<CatalogGroup>,
    selection: GroupedSelection,
    expanded: BTreeSet<String>,
    reconciler: SelectionReconciler,
}

impl SelectionSession {
    /// Opens a session for a subject, loading the catalog and the persisted
    /// selection concurrently (they touch disjoint stores and neither
    /// depends on the other).
    ///
    /// Load failures do not fail the session: an unreachable catalog
    /// degrades to an empty group list and an unreadable selection degrades
    /// to an empty selection, each logged as a warning. A later explicit
    /// save always overwrites, so starting from empty loses nothing the
    /// user has not re-entered.
    pub async fn open(
        store: Arc<dyn DocumentStore>,
        catalog_source: Arc<dyn CatalogSource>,
        subject: Subject,
        field: impl Into<String>,
    ) -> Self {
        let reconciler = SelectionReconciler::new(store, field);

        let (catalog, selection) = tokio::join!(
            catalog_source.list_groups(),
            reconciler.load(&subject.id)
        );

        let catalog = catalog.unwrap_or_else(|e| {
            tracing::warn!(subject_id = %subject.id, error = %e, "catalog load failed, showing no groups");
            Vec::new()
        });
        let selection = selection.unwrap_or_else(|e| {
            tracing::warn!(subject_id = %subject.id, error = %e, "selection load failed, starting empty");
            GroupedSelection::new()
        });

        Self {
            subject,
            catalog,
            selection,
            expanded: BTreeSet::new(),
            reconciler,
        }
    }

    /// Opens an exercise-assignment session.
    pub async fn for_exercises(
        store: Arc<dyn DocumentStore>,
        catalog_source: Arc<dyn CatalogSource>,
        subject: Subject,
    ) -> Self {
        Self::open(
            store,
            catalog_source,
            subject,
            traino_core::document::fields::ASSIGNED_EXERCISES,
        )
        .await
    }

    /// The subject being edited.
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// The catalog groups loaded for this session (empty when the catalog
    /// source was unavailable at open).
    pub fn groups(&self) -> &[CatalogGroup] {
        &self.catalog
    }

    /// The current in-memory selection.
    pub fn selection(&self) -> &GroupedSelection {
        &self.selection
    }

    /// Toggles one item. Pure state change; never fails, never does I/O.
    pub fn toggle(&mut self, group_id: &str, item_index: usize) {
        self.selection.toggle(group_id, item_index);
    }

    /// Returns whether an item is currently selected.
    pub fn is_selected(&self, group_id: &str, item_index: usize) -> bool {
        self.selection.is_selected(group_id, item_index)
    }

    /// Number of selected items in a group (the header badge).
    pub fn selected_count(&self, group_id: &str) -> usize {
        self.selection.selected_count(group_id)
    }

    /// Flips a group's expanded/collapsed display flag.
    ///
    /// Presentation bookkeeping only; never persisted.
    pub fn toggle_section(&mut self, group_id: &str) {
        if !self.expanded.remove(group_id) {
            self.expanded.insert(group_id.to_string());
        }
    }

    /// Returns whether a group's section is expanded.
    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expanded.contains(group_id)
    }

    /// Commits the in-memory selection.
    ///
    /// An empty selection removes the persisted field; a non-empty one
    /// replaces it wholesale. On failure the in-memory selection is left
    /// unchanged so the caller can retry; nothing is retried automatically.
    pub async fn save(&self) -> Result<()> {
        self.reconciler.save(&self.subject.id, &self.selection).await
    }

    /// Deletes everything: resets the in-memory selection, then removes the
    /// persisted field.
    ///
    /// The in-memory reset happens *before* the remote delete and is not
    /// rolled back if the delete fails, so after an error the session shows
    /// an empty selection even though the store may still hold the old one.
    /// The local clear is authoritative; the store catches up on the next
    /// successful save or clear.
    ///
    /// Destructive and non-undoable: callers must obtain explicit user
    /// confirmation before invoking this.
    pub async fn clear(&mut self) -> Result<()> {
        self.selection.reset();
        self.reconciler.clear(&self.subject.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traino_core::document::{fields, Document, DocumentPatch};
    use traino_core::error::TrainoError;
    use traino_infrastructure::{InMemoryDocumentStore, StaticCatalogSource};

    fn catalog() -> Arc<StaticCatalogSource> {
        Arc::new(StaticCatalogSource::new(vec![
            CatalogGroup::new("legs", "Legs", ["Squat", "Lunge"]),
            CatalogGroup::new("arms", "Arms", ["Curl"]),
        ]))
    }

    fn subject() -> Subject {
        Subject::new("s-1", "Dana")
    }

    /// Store that refuses every operation, for failure-path tests.
    struct UnreachableStore;

    #[async_trait::async_trait]
    impl DocumentStore for UnreachableStore {
        async fn get(&self, _id: &str) -> Result<Option<Document>> {
            Err(TrainoError::source_unavailable("documents", "offline"))
        }

        async fn apply(&self, id: &str, _patch: DocumentPatch) -> Result<()> {
            Err(TrainoError::persist_failure(id, "offline"))
        }
    }

    /// Catalog source that refuses every call.
    struct UnreachableCatalog;

    #[async_trait::async_trait]
    impl CatalogSource for UnreachableCatalog {
        async fn list_groups(&self) -> Result<Vec<CatalogGroup>> {
            Err(TrainoError::source_unavailable("catalog", "offline"))
        }
    }

    #[tokio::test]
    async fn test_open_hydrates_persisted_selection() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .apply(
                "s-1",
                DocumentPatch::new()
                    .set(fields::ASSIGNED_EXERCISES, serde_json::json!({"legs": [1]})),
            )
            .await
            .unwrap();

        let session = SelectionSession::for_exercises(store, catalog(), subject()).await;

        assert!(session.is_selected("legs", 1));
        assert_eq!(session.groups().len(), 2);
    }

    #[tokio::test]
    async fn test_open_degrades_when_sources_unreachable() {
        let session = SelectionSession::for_exercises(
            Arc::new(UnreachableStore),
            Arc::new(UnreachableCatalog),
            subject(),
        )
        .await;

        assert!(session.groups().is_empty());
        assert!(session.selection().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_save_walkthrough() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let mut session =
            SelectionSession::for_exercises(store.clone(), catalog(), subject()).await;

        session.toggle("legs", 0);
        session.toggle("legs", 1);
        session.toggle("legs", 0);
        assert_eq!(session.selected_count("legs"), 1);

        session.toggle("legs", 1);
        assert!(session.selection().is_empty());

        // Saving the now-empty selection deletes the persisted field.
        session.save().await.unwrap();
        let document = store.get("s-1").await.unwrap().unwrap();
        assert!(!document.contains_key(fields::ASSIGNED_EXERCISES));
    }

    #[tokio::test]
    async fn test_save_failure_keeps_state_for_retry() {
        let mut session = SelectionSession::for_exercises(
            Arc::new(UnreachableStore),
            catalog(),
            subject(),
        )
        .await;

        session.toggle("legs", 0);
        let err = session.save().await.unwrap_err();

        assert!(err.is_persist_failure());
        assert!(session.is_selected("legs", 0));
    }

    #[tokio::test]
    async fn test_clear_is_optimistic_without_rollback() {
        let mut session = SelectionSession::for_exercises(
            Arc::new(UnreachableStore),
            catalog(),
            subject(),
        )
        .await;

        session.toggle("legs", 0);
        let err = session.clear().await.unwrap_err();

        assert!(err.is_persist_failure());
        // The in-memory clear is not rolled back.
        assert!(session.selection().is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_persisted_field() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let mut session =
            SelectionSession::for_exercises(store.clone(), catalog(), subject()).await;

        session.toggle("arms", 0);
        session.save().await.unwrap();

        session.clear().await.unwrap();

        let document = store.get("s-1").await.unwrap().unwrap();
        assert!(!document.contains_key(fields::ASSIGNED_EXERCISES));
        assert!(document.contains_key(fields::LAST_UPDATED));
        assert!(session.selection().is_empty());
    }

    #[tokio::test]
    async fn test_dangling_toggle_is_accepted() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let mut session =
            SelectionSession::for_exercises(store.clone(), catalog(), subject()).await;

        // Index 9 does not exist in the catalog; the entry is carried
        // as-is rather than rejected.
        session.toggle("legs", 9);
        session.save().await.unwrap();

        let reloaded = SelectionSession::for_exercises(store, catalog(), subject()).await;
        assert!(reloaded.is_selected("legs", 9));
    }

    #[tokio::test]
    async fn test_section_expansion_bookkeeping() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let mut session = SelectionSession::for_exercises(store, catalog(), subject()).await;

        assert!(!session.is_expanded("legs"));
        session.toggle_section("legs");
        assert!(session.is_expanded("legs"));
        session.toggle_section("legs");
        assert!(!session.is_expanded("legs"));
    }
}
