use crate::error::{Error, Result};
use crate::storage::StorageBackend;
use crate::store::core::{ConfigStore, SettingsMap};
use crate::value::json_kind;

use log::{debug, info};
use serde_json::Value;
use std::path::{Path, PathBuf};

impl<S: StorageBackend> ConfigStore<'_, S> {
    /// Replace the explicit values with the contents of a settings file.
    ///
    /// - A missing file is not an error: the store is left as it was.
    /// - The document must be an object; every key must be in the schema and
    ///   every value must pass the same checks as [`set`](Self::set).
    /// - All entries are checked before anything changes. On success the
    ///   explicit values are replaced, not merged: keys absent from the file
    ///   fall back to their schema defaults.
    ///
    /// # Errors
    ///
    /// * `Error::FileRead` - the file exists but cannot be read
    /// * `Error::Parse` - the file is not valid JSON
    /// * `Error::InvalidDocument` - the top level is not an object
    /// * `Error::UnknownKey` / `Error::InvalidValue` / `Error::InvalidSchema` -
    ///   an entry fails validation
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let document: Value = match self.config.storage.read(path) {
            Ok(document) => document,
            Err(e) if e.is_not_found() => {
                debug!("Settings file {} not found, keeping current values", path.display());
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let loaded = self.parse_document(document)?;
        let count = loaded.len();
        self.replace_values(loaded);

        info!("Loaded {count} settings from {}", path.display());
        Ok(())
    }

    /// Write every setting (defaults included) to a settings file.
    ///
    /// Keys are written in schema order. An existing file is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be serialized or the file cannot be
    /// written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.config.storage.write(path, &self.get_all())?;

        info!("Saved {} settings to {}", self.schema.len(), path.display());
        Ok(())
    }

    /// [`load`](Self::load) from the configured settings path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if no settings path is configured, otherwise
    /// the errors of `load`.
    pub fn reload(&mut self) -> Result<()> {
        let path = self.configured_path()?;
        self.load(path)
    }

    /// [`save`](Self::save) to the configured settings path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if no settings path is configured, otherwise
    /// the errors of `save`.
    pub fn persist(&self) -> Result<()> {
        let path = self.configured_path()?;
        self.save(path)
    }

    /// Validate a whole document into a fresh value map
    fn parse_document(&self, document: Value) -> Result<SettingsMap> {
        let kind = json_kind(&document);
        let Value::Object(entries) = document else {
            return Err(Error::InvalidDocument(format!(
                "expected object at top level, got {kind}"
            )));
        };

        let mut loaded = SettingsMap::with_capacity(entries.len());
        for (key, raw) in entries {
            let value = self.schema.entry(&key)?.accept(&key, raw)?;
            self.check(&key, &value)?;
            loaded.insert(key, value);
        }

        Ok(loaded)
    }

    fn configured_path(&self) -> Result<PathBuf> {
        self.config
            .settings_path
            .clone()
            .ok_or_else(|| Error::Config("No settings path configured".into()))
    }
}

// =============================================================================
// Tests
// =============================================================================
