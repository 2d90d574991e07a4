//! Storage backend trait and implementations

use crate::error::{Error, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

/// Trait for storage backend implementations
///
/// The store only ever hands a backend a flat object of scalar values, so any
/// format that can round-trip that shape will do.
pub trait StorageBackend: Clone + Send + Sync {
    /// Serialize data to string
    fn serialize<T: Serialize>(&self, data: &T) -> Result<String>;

    /// Deserialize data from string
    fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T>;

    /// Read and deserialize from file
    ///
    /// A missing file surfaces as `Error::FileRead` with an
    /// `io::ErrorKind::NotFound` source (see [`Error::is_not_found`]).
    fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.deserialize(&content)
    }

    /// Serialize and write to file
    ///
    /// Writes to a sibling temp file then renames it over the target.
    fn write<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let content = self.serialize(data)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        // Append .tmp to keep the original filename intact
        let file_name = path.file_name().ok_or_else(|| {
            Error::Config(format!(
                "Invalid path '{}': must have a filename",
                path.display()
            ))
        })?;
        let mut temp_filename = file_name.to_os_string();
        temp_filename.push(".tmp");
        let temp_path = path.with_file_name(temp_filename);

        std::fs::write(&temp_path, &content).map_err(|e| Error::FileWrite {
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, path).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

// =============================================================================
// JSON Storage Implementation
// =============================================================================

/// JSON storage backend (default)
///
/// Non-ASCII text is written as-is, never `\u` escaped.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    /// Pretty print JSON output (two-space indent)
    pretty: bool,
}

impl JsonStorage {
    /// Create a new JSON storage backend with pretty printing enabled
    #[must_use]
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a compact JSON storage (no pretty printing)
    #[must_use]
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    #[must_use]
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for JsonStorage {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(data).map_err(Error::from)
        } else {
            serde_json::to_string(data).map_err(Error::from)
        }
    }

    fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        serde_json::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
