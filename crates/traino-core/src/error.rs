//! Error types for the Traino application.

use thiserror::Error;

/// A shared error type for the entire Traino application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum TrainoError {
    /// A catalog or document source could not be reached during a load.
    ///
    /// Callers degrade to an empty catalog/selection instead of failing the
    /// editing session.
    #[error("Source unavailable: {source_kind}: {message}")]
    SourceUnavailable {
        source_kind: &'static str,
        message: String,
    },

    /// The document store rejected or could not complete a save/clear.
    ///
    /// Surfaced to the caller; never retried automatically.
    #[error("Persist failure for subject '{subject_id}': {message}")]
    PersistFailure {
        subject_id: String,
        message: String,
    },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TrainoError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a SourceUnavailable error
    pub fn source_unavailable(source_kind: &'static str, message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_kind,
            message: message.into(),
        }
    }

    /// Creates a PersistFailure error
    pub fn persist_failure(subject_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PersistFailure {
            subject_id: subject_id.into(),
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a SourceUnavailable error
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }

    /// Check if this is a PersistFailure error
    pub fn is_persist_failure(&self) -> bool {
        matches!(self, Self::PersistFailure { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TrainoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TrainoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TrainoError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for TrainoError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TrainoError>`.
pub type Result<T> = std::result::Result<T, TrainoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_predicate() {
        let err = TrainoError::source_unavailable("catalog", "connection refused");
        assert!(err.is_source_unavailable());
        assert!(!err.is_persist_failure());
    }

    #[test]
    fn test_persist_failure_carries_subject() {
        let err = TrainoError::persist_failure("subject-1", "write rejected");
        assert!(err.is_persist_failure());
        assert!(err.to_string().contains("subject-1"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TrainoError = io_err.into();
        assert!(err.is_io());
    }
}
