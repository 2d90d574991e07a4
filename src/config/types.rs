//! Store configuration

use std::path::PathBuf;

use crate::storage::{JsonStorage, StorageBackend};

/// Configuration for a [`ConfigStore`](crate::ConfigStore)
#[derive(Debug, Clone)]
pub struct StoreConfig<S: StorageBackend = JsonStorage> {
    /// File used by `reload()` and `persist()`; `None` disables them
    pub settings_path: Option<PathBuf>,

    /// Storage backend implementation
    pub storage: S,
}

impl Default for StoreConfig<JsonStorage> {
    fn default() -> Self {
        Self {
            settings_path: None,
            storage: JsonStorage::new(),
        }
    }
}

impl StoreConfig<JsonStorage> {
    /// Create a new builder for StoreConfig
    ///
    /// # Example
    /// ```rust
    /// use cfgstore::StoreConfig;
    ///
    /// let config = StoreConfig::builder()
    ///     .settings_path("/etc/my-app/config.json")
    ///     .compact_json()
    ///     .build();
    /// assert!(config.settings_path.is_some());
    /// ```
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }
}

impl<S: StorageBackend> StoreConfig<S> {
    /// Use a different storage backend, keeping the settings path
    pub fn with_storage<T: StorageBackend>(self, storage: T) -> StoreConfig<T> {
        StoreConfig {
            settings_path: self.settings_path,
            storage,
        }
    }
}

/// Builder for creating StoreConfig with a fluent API
#[derive(Debug, Clone)]
pub struct StoreConfigBuilder {
    settings_path: Option<PathBuf>,
    pretty_json: bool,
}

impl Default for StoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreConfigBuilder {
    pub fn new() -> Self {
        Self {
            settings_path: None,
            pretty_json: true,
        }
    }

    /// Set the settings file used by `reload()` and `persist()`
    ///
    /// Supports `~` expansion for home directory.
    pub fn settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(expand_home(path.into()));
        self
    }

    /// Use compact JSON (no pretty printing)
    pub fn compact_json(mut self) -> Self {
        self.pretty_json = false;
        self
    }

    pub fn build(self) -> StoreConfig<JsonStorage> {
        let storage = if self.pretty_json {
            JsonStorage::new()
        } else {
            JsonStorage::compact()
        };

        StoreConfig {
            settings_path: self.settings_path,
            storage,
        }
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    if !path.starts_with("~") {
        return path;
    }
    match dirs::home_dir() {
        Some(home) => home.join(path.strip_prefix("~").unwrap_or(&path)),
        None => path,
    }
}
