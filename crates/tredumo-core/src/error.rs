//! Error types for Tredumo

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TredumoError {
    // Tenant errors
    #[error("Tenant not found: {key}")]
    TenantNotFound { key: String },

    #[error("Duplicate tenant key: {key}")]
    DuplicateTenant { key: String },

    // Invariant violations, raised eagerly at construction/load time
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    // Tuition lookup errors
    #[error("Unknown grade band: {band}")]
    UnknownGradeBand { band: String },

    #[error("Unknown fee category: {category}")]
    UnknownFeeCategory { category: String },

    // Tenant file / process configuration errors
    #[error("Invalid tenant file {path}: {reason}")]
    TenantFileInvalid { path: PathBuf, reason: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TredumoError {
    /// Shorthand for a `Validation` error.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TredumoError>;
