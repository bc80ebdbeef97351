//! Unified path management for Traino data files.
//!
//! All Traino data lives under the platform config/data directories so the
//! CLI and any future shell agree on where the catalog and subject
//! documents are.

use std::path::PathBuf;
use traino_core::error::{Result, TrainoError};

/// Unified path management for Traino.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/traino/            # Config directory
/// └── catalog.toml             # Catalog file (TomlCatalogSource)
///
/// ~/.local/share/traino/       # Data directory
/// └── subjects/                # Subject documents (JsonDirDocumentStore)
///     └── <subject-id>.json
/// ```
pub struct TrainoPaths;

impl TrainoPaths {
    /// Returns the Traino configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/traino/`)
    /// - `Err(TrainoError::Config)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("traino"))
            .ok_or_else(|| TrainoError::config("cannot find config directory"))
    }

    /// Returns the Traino data directory.
    ///
    /// This is where subject documents are stored.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/traino/`)
    /// - `Err(TrainoError::Config)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("traino"))
            .ok_or_else(|| TrainoError::config("cannot find data directory"))
    }

    /// Returns the path to the catalog file.
    pub fn catalog_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("catalog.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_file_under_config_dir() {
        let catalog = TrainoPaths::catalog_file().unwrap();
        assert!(catalog.ends_with("traino/catalog.toml"));
    }
}
