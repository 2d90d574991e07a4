//! Error types for cfgstore

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cfgstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cfgstore
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Schema Errors
    // -------------------------------------------------------------------------
    #[error("Unknown configuration key: '{0}'")]
    UnknownKey(String),

    #[error("Invalid schema for '{key}': {reason}")]
    InvalidSchema { key: String, reason: String },

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Invalid config document: {0}")]
    InvalidDocument(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse config document: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this error names a key outside the schema
    #[must_use]
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Error::UnknownKey(_))
    }

    /// Check if this is a validation error (bad value, bad document or bad schema entry)
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidValue { .. } | Error::InvalidDocument(_) | Error::InvalidSchema { .. }
        )
    }

    /// Check if this is a read error caused by a missing file
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::FileRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
