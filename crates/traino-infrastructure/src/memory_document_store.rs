//! In-memory DocumentStore implementation.
//!
//! Backs tests and demo runs with the same contract as the file store, so
//! application code can be exercised without touching the filesystem.

use std::collections::HashMap;
use tokio::sync::RwLock;
use traino_core::document::{Document, DocumentPatch, DocumentStore};
use traino_core::error::Result;

/// Map-backed partial-document store.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, Document>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns whether the store holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, id: &str) -> Result<Option<Document>> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn apply(&self, id: &str, patch: DocumentPatch) -> Result<()> {
        let mut documents = self.documents.write().await;
        let document = documents.entry(id.to_string()).or_default();
        patch.apply_to(document);
        Ok(())
    }
}
