//! JSON-file-based DocumentStore implementation.
//!
//! One subject = one `<id>.json` file under the store's base directory.
//! Writes go through a temp file with an atomic rename, and the
//! read-modify-write of a patch holds an exclusive file lock so two
//! processes cannot interleave partial updates.

use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use tokio::task;
use traino_core::document::{Document, DocumentPatch, DocumentStore};
use traino_core::error::{Result, TrainoError};

/// File-backed partial-document store.
///
/// Directory structure:
/// ```text
/// base_dir/
/// └── subjects/
///     ├── <subject-id-1>.json
///     └── <subject-id-2>.json
/// ```
pub struct JsonDirDocumentStore {
    subjects_dir: PathBuf,
}

impl JsonDirDocumentStore {
    /// Creates a store rooted at `base_dir`.
    ///
    /// The `subjects/` directory is created lazily on first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            subjects_dir: base_dir.into().join("subjects"),
        }
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.subjects_dir.join(format!("{id}.json"))
    }

    fn load_document_sync(path: &Path) -> Result<Option<Document>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            TrainoError::source_unavailable(
                "documents",
                format!("failed to read '{}': {}", path.display(), e),
            )
        })?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let document: Document = serde_json::from_str(&content)?;
        Ok(Some(document))
    }

    fn apply_patch_sync(path: &Path, id: &str, patch: &DocumentPatch) -> Result<()> {
        let persist_err = |message: String| TrainoError::persist_failure(id, message);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| persist_err(format!("failed to create store directory: {e}")))?;
            }
        }

        // Exclusive lock for the whole read-modify-write.
        let _lock = FileLock::acquire(path)
            .map_err(|e| persist_err(format!("failed to lock document: {e}")))?;

        let mut document = Self::load_document_sync(path)
            .map_err(|e| persist_err(format!("failed to reload document: {e}")))?
            .unwrap_or_default();
        patch.apply_to(&mut document);

        let json_string = serde_json::to_string_pretty(&document)
            .map_err(|e| persist_err(format!("failed to serialize document: {e}")))?;

        // Write to a temp file in the same directory, then rename.
        let tmp_path = temp_path(path).map_err(|e| persist_err(e.to_string()))?;
        let write_result = (|| -> std::io::Result<()> {
            let mut tmp_file = File::create(&tmp_path)?;
            tmp_file.write_all(json_string.as_bytes())?;
            tmp_file.sync_all()?;
            drop(tmp_file);
            fs::rename(&tmp_path, path)
        })();

        write_result.map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            persist_err(format!("failed to write document: {e}"))
        })
    }
}

#[async_trait::async_trait]
impl DocumentStore for JsonDirDocumentStore {
    async fn get(&self, id: &str) -> Result<Option<Document>> {
        let path = self.document_path(id);

        task::spawn_blocking(move || Self::load_document_sync(&path))
            .await
            .map_err(|e| TrainoError::internal(format!("failed to spawn blocking task: {e}")))?
    }

    async fn apply(&self, id: &str, patch: DocumentPatch) -> Result<()> {
        let path = self.document_path(id);
        let id = id.to_string();
        tracing::debug!(subject_id = %id, "applying document patch");

        task::spawn_blocking(move || Self::apply_patch_sync(&path, &id, &patch))
            .await
            .map_err(|e| TrainoError::internal(format!("failed to spawn blocking task: {e}")))?
    }
}

fn temp_path(path: &Path) -> std::io::Result<PathBuf> {
    let parent = path.parent().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no parent directory")
    })?;
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name")
    })?;
    let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
    Ok(parent.join(tmp_name))
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> std::io::Result<Self> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&lock_path)?;
        file.lock_exclusive()?;

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_missing_document_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonDirDocumentStore::new(temp_dir.path());

        let document = store.get("nobody").await.unwrap();
        assert!(document.is_none());
    }

    #[tokio::test]
    async fn test_apply_creates_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonDirDocumentStore::new(temp_dir.path());

        let patch = DocumentPatch::new().set("name", "Dana");
        store.apply("s-1", patch).await.unwrap();

        let document = store.get("s-1").await.unwrap().unwrap();
        assert_eq!(document.get("name"), Some(&json!("Dana")));
    }

    #[tokio::test]
    async fn test_apply_merges_untouched_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonDirDocumentStore::new(temp_dir.path());

        store
            .apply("s-1", DocumentPatch::new().set("name", "Dana"))
            .await
            .unwrap();
        store
            .apply("s-1", DocumentPatch::new().set("birthday", "1990-05-01"))
            .await
            .unwrap();

        let document = store.get("s-1").await.unwrap().unwrap();
        assert_eq!(document.get("name"), Some(&json!("Dana")));
        assert_eq!(document.get("birthday"), Some(&json!("1990-05-01")));
    }

    #[tokio::test]
    async fn test_apply_deletes_field() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonDirDocumentStore::new(temp_dir.path());

        store
            .apply(
                "s-1",
                DocumentPatch::new()
                    .set("name", "Dana")
                    .set("goals", json!([0, 2])),
            )
            .await
            .unwrap();
        store
            .apply("s-1", DocumentPatch::new().delete("goals"))
            .await
            .unwrap();

        let document = store.get("s-1").await.unwrap().unwrap();
        assert!(!document.contains_key("goals"));
        assert_eq!(document.get("name"), Some(&json!("Dana")));
    }

    #[tokio::test]
    async fn test_delete_on_missing_field_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonDirDocumentStore::new(temp_dir.path());

        store
            .apply("s-1", DocumentPatch::new().set("name", "Dana").delete("goals"))
            .await
            .unwrap();

        let document = store.get("s-1").await.unwrap().unwrap();
        assert_eq!(document.len(), 1);
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonDirDocumentStore::new(temp_dir.path());

        store
            .apply("s-1", DocumentPatch::new().set("name", "Dana"))
            .await
            .unwrap();

        let tmp = temp_dir.path().join("subjects").join(".s-1.json.tmp");
        assert!(!tmp.exists());
        assert!(temp_dir.path().join("subjects").join("s-1.json").exists());
    }
}
