//! CLI command implementations.

pub mod catalog;
pub mod onboard;
pub mod selection;

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use traino_core::catalog::{preset, CatalogSource};
use traino_core::document::DocumentStore;
use traino_infrastructure::{
    JsonDirDocumentStore, StaticCatalogSource, TomlCatalogSource, TrainoPaths,
};

/// Shared handles the commands run against.
pub struct CliEnv {
    pub store: Arc<dyn DocumentStore>,
    pub catalog: Arc<dyn CatalogSource>,
}

impl CliEnv {
    /// Builds the document store and catalog source from CLI flags,
    /// falling back to the platform directories and, when no catalog file
    /// exists yet, to the built-in catalog.
    pub fn new(data_dir: Option<PathBuf>, catalog_path: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => TrainoPaths::data_dir()?,
        };
        let store: Arc<dyn DocumentStore> = Arc::new(JsonDirDocumentStore::new(data_dir));

        let catalog_path = match catalog_path {
            Some(path) => path,
            None => TrainoPaths::catalog_file()?,
        };
        let catalog: Arc<dyn CatalogSource> = if catalog_path.exists() {
            Arc::new(TomlCatalogSource::new(catalog_path))
        } else {
            tracing::debug!(
                path = %catalog_path.display(),
                "no catalog file, using built-in catalog"
            );
            let mut groups = preset::default_exercise_catalog();
            groups.push(preset::default_goal_catalog());
            Arc::new(StaticCatalogSource::new(groups))
        };

        Ok(Self { store, catalog })
    }
}
