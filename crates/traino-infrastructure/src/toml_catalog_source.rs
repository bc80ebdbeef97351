//! TOML-based CatalogSource implementation.
//!
//! Loads the selectable catalog from a `catalog.toml` file. Groups either
//! enumerate their items or carry a single delimited string that is split
//! into items at load time, so callers always see the same uniform
//! group/item shape.
//!
//! ```toml
//! [[groups]]
//! id = "legs"
//! label = "Legs"
//! items = ["Squat", "Lunge"]
//!
//! [[groups]]
//! id = "goals"
//! label = "Training goals"
//! items_text = "Lose weight. Build muscle. Improve endurance"
//! ```

use serde::Deserialize;
use std::path::PathBuf;
use tokio::task;
use traino_core::catalog::preset::GOALS_DELIMITER;
use traino_core::catalog::{CatalogGroup, CatalogSource};
use traino_core::error::{Result, TrainoError};

/// File-backed catalog source.
pub struct TomlCatalogSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    groups: Vec<GroupEntry>,
}

/// One group as authored in the catalog file.
///
/// `items` and `items_text` are mutually exclusive shapes; when both are
/// present the enumerated items win.
#[derive(Debug, Deserialize)]
struct GroupEntry {
    id: String,
    label: String,
    #[serde(default)]
    items: Vec<String>,
    #[serde(default)]
    items_text: Option<String>,
    #[serde(default)]
    delimiter: Option<String>,
}

impl GroupEntry {
    fn into_group(self) -> CatalogGroup {
        if self.items.is_empty() {
            if let Some(text) = &self.items_text {
                let delimiter = self.delimiter.as_deref().unwrap_or(GOALS_DELIMITER);
                return CatalogGroup::from_delimited(self.id, self.label, text, delimiter);
            }
        }
        CatalogGroup::new(self.id, self.label, self.items)
    }
}

impl TomlCatalogSource {
    /// Creates a source reading from the given catalog file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_sync(path: &std::path::Path) -> Result<Vec<CatalogGroup>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TrainoError::source_unavailable(
                "catalog",
                format!("failed to read '{}': {}", path.display(), e),
            )
        })?;

        let file: CatalogFile = toml::from_str(&content)?;
        Ok(file.groups.into_iter().map(GroupEntry::into_group).collect())
    }
}

#[async_trait::async_trait]
impl CatalogSource for TomlCatalogSource {
    async fn list_groups(&self) -> Result<Vec<CatalogGroup>> {
        let path = self.path.clone();

        task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| TrainoError::internal(format!("failed to spawn blocking task: {e}")))?
    }
}

/// Fixed catalog source over groups provided at construction.
///
/// Used for the built-in preset catalog and in tests.
pub struct StaticCatalogSource {
    groups: Vec<CatalogGroup>,
}

impl StaticCatalogSource {
    /// Creates a source serving exactly the given groups.
    pub fn new(groups: Vec<CatalogGroup>) -> Self {
        Self { groups }
    }

    /// Creates a source serving the built-in exercise catalog.
    pub fn preset() -> Self {
        Self::new(traino_core::catalog::preset::default_exercise_catalog())
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn list_groups(&self) -> Result<Vec<CatalogGroup>> {
        Ok(self.groups.clone())
    }
}
