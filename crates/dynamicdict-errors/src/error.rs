//! Error types for dynamic dictionary access

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for dictionary operations
pub type DictResult<T> = std::result::Result<T, DictError>;

/// Errors that can occur while accessing a dynamic dictionary
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DictError {
    /// Key absent with no default factory configured
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// The default factory failed to produce a value
    #[error("default factory failed: {message}")]
    FactoryFailed { message: String },
}

impl DictError {
    /// Create a key-not-found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create a factory failure error
    pub fn factory_failed(message: impl Into<String>) -> Self {
        Self::FactoryFailed {
            message: message.into(),
        }
    }
}
