use crate::config::{Schema, StoreConfig};
use crate::events::EventManager;
use crate::storage::{JsonStorage, StorageBackend};
use crate::value::ConfigValue;

use indexmap::IndexMap;
use log::debug;
use std::fmt;

/// Ordered mapping from setting name to value
pub type SettingsMap = IndexMap<String, ConfigValue>;

/// Schema-validated settings store.
///
/// The store borrows its [`Schema`] and owns the map of explicitly assigned
/// values. Keys without an explicit value resolve to the schema default.
///
/// - **Get/Set**: per-key access with strict type validation
/// - **Load/Save**: full-replace load from, and total save to, a JSON document
/// - **Reset**: materialize schema defaults
/// - **Change Events**: callbacks and extra validators per key
///
/// # Example
///
/// ```rust
/// use cfgstore::{schema, ConfigStore, ConfigValue, SettingEntry};
///
/// let schema = schema! {
///     "theme" => SettingEntry::choice("auto", ["light", "dark", "auto"]),
///     "max_items" => SettingEntry::int(50),
/// };
///
/// let mut store = ConfigStore::new(&schema);
/// assert_eq!(store.get("theme")?, ConfigValue::from("auto"));
///
/// store.set("theme", "dark")?;
/// assert_eq!(store.get("theme")?, ConfigValue::from("dark"));
/// assert!(store.set("theme", "purple").is_err());
/// # Ok::<(), cfgstore::Error>(())
/// ```
pub struct ConfigStore<'a, S: StorageBackend = JsonStorage> {
    /// Closed set of recognized settings (shared, never mutated)
    pub(crate) schema: &'a Schema,

    /// Explicitly assigned values; every key is in `schema`
    pub(crate) values: SettingsMap,

    /// Configuration (settings path, storage backend)
    pub(crate) config: StoreConfig<S>,

    /// Event manager for change callbacks and validators
    pub(crate) events: EventManager,
}

impl<'a> ConfigStore<'a, JsonStorage> {
    /// Create a store over `schema` with no explicit values.
    ///
    /// The schema is not checked here; see [`Schema::validate`].
    pub fn new(schema: &'a Schema) -> Self {
        Self::with_config(schema, StoreConfig::default())
    }
}

impl<'a, S: StorageBackend> ConfigStore<'a, S> {
    /// Create a store with an explicit configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cfgstore::{ConfigStore, Schema, SettingEntry, StoreConfig};
    ///
    /// let schema = Schema::new().with("retry_count", SettingEntry::int(3));
    /// let config = StoreConfig::builder()
    ///     .settings_path("/tmp/cfgstore-doc/config.json")
    ///     .build();
    /// let store = ConfigStore::with_config(&schema, config);
    /// assert!(store.config().settings_path.is_some());
    /// ```
    pub fn with_config(schema: &'a Schema, config: StoreConfig<S>) -> Self {
        debug!("Created config store over {} schema keys", schema.len());

        Self {
            schema,
            values: SettingsMap::new(),
            config,
            events: EventManager::new(),
        }
    }

    /// Get the schema
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Get the configuration
    pub fn config(&self) -> &StoreConfig<S> {
        &self.config
    }

    /// Explicitly assigned values only (no defaults)
    pub fn values(&self) -> &SettingsMap {
        &self.values
    }

    /// Get the event manager
    pub fn events(&self) -> &EventManager {
        &self.events
    }

    /// Get the event manager for registering change listeners and validators
    ///
    /// # Example
    ///
    /// ```
    /// # use cfgstore::*;
    /// let schema = Schema::new().with("max_items", SettingEntry::int(50));
    /// let mut store = ConfigStore::new(&schema);
    ///
    /// store.events_mut().watch("max_items", |key, old, new| {
    ///     println!("{key} changed: {old} -> {new}");
    /// });
    /// store.events_mut().add_validator("max_items", |v| match v.as_i64() {
    ///     Some(n) if n > 0 => Ok(()),
    ///     _ => Err("must be positive".into()),
    /// });
    ///
    /// assert!(store.set("max_items", 0).is_err());
    /// ```
    pub fn events_mut(&mut self) -> &mut EventManager {
        &mut self.events
    }

    /// Effective value of `key` in `values`, falling back to the schema default.
    ///
    /// `key` must be a schema key.
    pub(crate) fn effective(&self, values: &SettingsMap, key: &str) -> ConfigValue {
        values
            .get(key)
            .or_else(|| self.schema.get(key).map(|entry| &entry.default))
            .cloned()
            .unwrap_or_default()
    }
}

impl<S: StorageBackend + fmt::Debug> fmt::Debug for ConfigStore<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("schema_keys", &self.schema.len())
            .field("values", &self.values)
            .field("config", &self.config)
            .field("events", &self.events)
            .finish()
    }
}
