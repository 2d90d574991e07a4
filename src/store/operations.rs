use crate::error::{Error, Result};
use crate::storage::StorageBackend;
use crate::store::core::{ConfigStore, SettingsMap};
use crate::value::ConfigValue;

use log::debug;

impl<S: StorageBackend> ConfigStore<'_, S> {
    /// Get the effective value of a setting.
    ///
    /// Returns the explicitly assigned value if there is one, otherwise the
    /// schema default (`ConfigValue::Null` when the entry declares none).
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownKey` if `key` is not in the schema.
    pub fn get(&self, key: &str) -> Result<ConfigValue> {
        let entry = self.schema.entry(key)?;
        Ok(self
            .values
            .get(key)
            .cloned()
            .unwrap_or_else(|| entry.default.clone()))
    }

    /// Get a setting, with `fallback` replacing the schema default.
    ///
    /// An explicitly assigned value still wins. Any fallback is honored,
    /// including `false`, `0`, `""` and `Null`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownKey` if `key` is not in the schema.
    pub fn get_or(&self, key: &str, fallback: impl Into<ConfigValue>) -> Result<ConfigValue> {
        self.schema.entry(key)?;
        Ok(self
            .values
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.into()))
    }

    /// Get a setting converted to `T`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownKey` for keys outside the schema, or
    /// `Error::Parse` if the value cannot be converted to `T`.
    pub fn get_as<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.get(key)?;
        serde_json::from_value(value.to_json())
            .map_err(|e| Error::Parse(format!("setting '{key}': {e}")))
    }

    /// Assign a setting.
    ///
    /// The value must satisfy the key's declared type exactly, and pass any
    /// validators registered through [`events_mut`](Self::events_mut). On
    /// failure nothing is stored.
    ///
    /// # Errors
    ///
    /// * `Error::UnknownKey` - `key` is not in the schema
    /// * `Error::InvalidValue` - the value fails the type rule or a validator
    /// * `Error::InvalidSchema` - the key's schema entry is malformed
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) -> Result<()> {
        let value = value.into();
        self.check(key, &value)?;

        let old_value = self.effective(&self.values, key);
        self.values.insert(key.to_string(), value.clone());
        debug!("Set {key} = {value}");

        self.events.notify(key, &old_value, &value);
        Ok(())
    }

    /// Every schema key with its effective value, in schema order.
    ///
    /// The result is a fresh map; changing it does not affect the store.
    pub fn get_all(&self) -> SettingsMap {
        self.schema
            .iter()
            .map(|(key, entry)| {
                let value = self.values.get(key).unwrap_or(&entry.default);
                (key.to_string(), value.clone())
            })
            .collect()
    }

    /// Reset a single setting to its schema default.
    ///
    /// The default is stored as an explicit value (it is not removed), even
    /// when the entry declares no default. Returns the default.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownKey` if `key` is not in the schema.
    pub fn reset(&mut self, key: &str) -> Result<ConfigValue> {
        let default_value = self.schema.default_for(key)?.clone();

        let old_value = self.effective(&self.values, key);
        self.values.insert(key.to_string(), default_value.clone());
        debug!("Setting {key} reset to default");

        self.events.notify(key, &old_value, &default_value);
        Ok(default_value)
    }

    /// Reset every setting to its schema default.
    pub fn reset_all(&mut self) {
        let defaults: SettingsMap = self
            .schema
            .iter()
            .map(|(key, entry)| (key.to_string(), entry.default.clone()))
            .collect();

        self.replace_values(defaults);
        debug!("All settings reset to defaults");
    }

    /// Schema, type and custom-validator checks shared by `set` and `load`
    pub(crate) fn check(&self, key: &str, value: &ConfigValue) -> Result<()> {
        self.schema.entry(key)?.validate(key, value)?;

        self.events
            .validate(key, value)
            .map_err(|reason| Error::InvalidValue {
                key: key.to_string(),
                reason,
            })
    }

    /// Swap in a new value map and notify listeners of effective changes
    pub(crate) fn replace_values(&mut self, values: SettingsMap) {
        let previous = std::mem::replace(&mut self.values, values);

        for key in self.schema.keys() {
            let old_value = self.effective(&previous, key);
            let new_value = self.effective(&self.values, key);
            self.events.notify(key, &old_value, &new_value);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
