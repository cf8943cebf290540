//! Error types for the symbol picker
//!
//! Provides standardized error handling across the crate. The catalog loader
//! never surfaces these to its callers; it degrades to an empty catalog.

use thiserror::Error;

use crate::platform::ResourceKind;

/// Errors that can occur while loading resources or configuration
#[derive(Debug, Error)]
pub enum PickerError {
    /// A required resource table is missing or has the wrong shape
    #[error("Resource unavailable: {resource}: {reason}")]
    ResourceUnavailable {
        resource: ResourceKind,
        reason: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl PickerError {
    pub fn unavailable(resource: ResourceKind, reason: impl Into<String>) -> Self {
        PickerError::ResourceUnavailable {
            resource,
            reason: reason.into(),
        }
    }
}

/// Result type alias for picker operations
pub type PickerResult<T> = Result<T, PickerError>;
