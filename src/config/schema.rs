//! Settings schema types
//!
//! # Overview
//!
//! A [`Schema`] is the closed set of recognized setting names. Each name maps to
//! a [`SettingEntry`] declaring the value type, the default, and (for `choice`)
//! the allowed values.
//!
//! ```rust
//! use cfgstore::{schema, SettingEntry};
//!
//! let schema = schema! {
//!     "theme" => SettingEntry::choice("auto", ["light", "dark", "auto"]),
//!     "max_items" => SettingEntry::int(50),
//!     "enable_notifications" => SettingEntry::boolean(true),
//!     "api_endpoint" => SettingEntry::string("https://api.example.com"),
//! };
//!
//! assert_eq!(schema.len(), 4);
//! assert_eq!(schema.keys().next(), Some("theme"));
//! ```
//!
//! # Lazy Validation
//!
//! Schemas are not checked when a store is created. An entry with an
//! unsupported type is only reported when a value for that key is validated.
//! Call [`Schema::validate`] to check every entry up front:
//!
//! ```rust
//! use cfgstore::Schema;
//!
//! let schema = Schema::from_json_str(r#"{"size": {"type": "float", "default": 1.5}}"#).unwrap();
//! assert!(schema.validate().is_err());
//! ```

use crate::error::{Error, Result};
use crate::storage::{JsonStorage, StorageBackend};
use crate::value::{ConfigValue, json_kind};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;

// =============================================================================
// Setting Types
// =============================================================================

/// Declared type of a setting
///
/// Any name other than the four supported ones is kept as `Unsupported` so that
/// a schema can be built from a document without failing up front. A `type`
/// that is not a string at all is kept the same way, as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum SettingType {
    Bool,
    String,
    Int,
    Choice,
    /// Unrecognized type name (empty when the entry declares no type)
    Unsupported(String),
}

impl SettingType {
    /// Type name as written in schema documents
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            SettingType::Bool => "bool",
            SettingType::String => "string",
            SettingType::Int => "int",
            SettingType::Choice => "choice",
            SettingType::Unsupported(name) => name,
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, SettingType::Unsupported(_))
    }
}

impl Default for SettingType {
    fn default() -> Self {
        SettingType::Unsupported(String::new())
    }
}

impl From<String> for SettingType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "bool" => SettingType::Bool,
            "string" => SettingType::String,
            "int" => SettingType::Int,
            "choice" => SettingType::Choice,
            _ => SettingType::Unsupported(name),
        }
    }
}

impl From<Value> for SettingType {
    fn from(raw: Value) -> Self {
        match raw {
            Value::String(name) => SettingType::from(name),
            Value::Null => SettingType::default(),
            other => SettingType::Unsupported(other.to_string()),
        }
    }
}

impl From<&str> for SettingType {
    fn from(name: &str) -> Self {
        SettingType::from(name.to_string())
    }
}

impl From<SettingType> for String {
    fn from(setting_type: SettingType) -> Self {
        setting_type.name().to_string()
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Setting Entry
// =============================================================================

/// Declaration of a single setting
///
/// # Example
///
/// ```
/// use cfgstore::{ConfigValue, SettingEntry, SettingType};
///
/// let retries = SettingEntry::int(3).description("Number of retry attempts");
/// assert_eq!(retries.setting_type, SettingType::Int);
/// assert_eq!(retries.default, ConfigValue::Int(3));
///
/// let level = SettingEntry::choice("INFO", ["DEBUG", "INFO", "WARNING", "ERROR"]);
/// assert_eq!(level.choices.as_ref().map(Vec::len), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingEntry {
    /// Declared value type
    #[serde(rename = "type", default)]
    pub setting_type: SettingType,

    /// Default value (`Null` when the entry has no default)
    #[serde(default)]
    pub default: ConfigValue,

    /// Allowed values for `choice` entries, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ConfigValue>>,

    /// Human-readable description (used by the docs generator)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SettingEntry {
    /// Create an entry of the given type with no default
    pub fn new(setting_type: impl Into<SettingType>) -> Self {
        Self {
            setting_type: setting_type.into(),
            default: ConfigValue::Null,
            choices: None,
            description: None,
        }
    }

    /// Create a boolean setting
    pub fn boolean(default: bool) -> Self {
        Self {
            default: ConfigValue::Bool(default),
            ..Self::new(SettingType::Bool)
        }
    }

    /// Create a text setting
    pub fn string(default: impl Into<String>) -> Self {
        Self {
            default: ConfigValue::String(default.into()),
            ..Self::new(SettingType::String)
        }
    }

    /// Create an integer setting
    pub fn int(default: i64) -> Self {
        Self {
            default: ConfigValue::Int(default),
            ..Self::new(SettingType::Int)
        }
    }

    /// Create a choice setting
    ///
    /// The allowed values keep the order they are given in.
    pub fn choice<V, I>(default: impl Into<ConfigValue>, choices: I) -> Self
    where
        V: Into<ConfigValue>,
        I: IntoIterator<Item = V>,
    {
        Self {
            default: default.into(),
            choices: Some(choices.into_iter().map(Into::into).collect()),
            ..Self::new(SettingType::Choice)
        }
    }

    /// Drop the default value
    #[must_use]
    pub fn no_default(mut self) -> Self {
        self.default = ConfigValue::Null;
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate a value against this entry's declared type
    ///
    /// No coercion is performed: `"3"` is not an int, `1` is not a bool and
    /// `true` is not an int.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidValue` - the value does not satisfy the type rule
    /// * `Error::InvalidSchema` - the entry itself is malformed
    pub fn validate(&self, key: &str, value: &ConfigValue) -> Result<()> {
        let accepted = match &self.setting_type {
            SettingType::Bool => matches!(value, ConfigValue::Bool(_)),
            SettingType::String => matches!(value, ConfigValue::String(_)),
            SettingType::Int => matches!(value, ConfigValue::Int(_)),
            SettingType::Choice => self
                .choices
                .as_ref()
                .is_some_and(|choices| choices.contains(value)),
            SettingType::Unsupported(_) => false,
        };

        if accepted {
            Ok(())
        } else {
            Err(self.mismatch(key, value.kind(), &value.to_string()))
        }
    }

    /// Convert a parsed document node and validate it
    pub(crate) fn accept(&self, key: &str, raw: Value) -> Result<ConfigValue> {
        match ConfigValue::try_from(raw) {
            Ok(value) => {
                self.validate(key, &value)?;
                Ok(value)
            }
            Err(raw) => Err(self.mismatch(key, json_kind(&raw), &raw.to_string())),
        }
    }

    /// Build the error for a value this entry rejects
    fn mismatch(&self, key: &str, kind: &str, shown: &str) -> Error {
        let expected = match &self.setting_type {
            SettingType::Bool => "boolean".to_string(),
            SettingType::String => "string".to_string(),
            SettingType::Int => "int".to_string(),
            SettingType::Choice => match &self.choices {
                Some(choices) => {
                    return Error::InvalidValue {
                        key: key.to_string(),
                        reason: format!("expected one of {}, got {shown}", format_choices(choices)),
                    };
                }
                None => {
                    return Error::InvalidSchema {
                        key: key.to_string(),
                        reason: "type 'choice' declares no choices".to_string(),
                    };
                }
            },
            SettingType::Unsupported(name) => {
                return Error::InvalidSchema {
                    key: key.to_string(),
                    reason: format!(
                        "unknown type '{name}'. Supported: bool, string, int, choice."
                    ),
                };
            }
        };

        Error::InvalidValue {
            key: key.to_string(),
            reason: format!("expected {expected}, got {kind}"),
        }
    }

    /// Check the entry itself
    ///
    /// Checks:
    /// - The type is supported
    /// - Choice entries declare their choices
    /// - A non-null default satisfies the type rule
    ///
    /// # Errors
    ///
    /// Returns the first problem found as `Error::InvalidSchema`.
    pub fn validate_schema(&self, key: &str) -> Result<()> {
        if !self.setting_type.is_supported() {
            return Err(self.mismatch(key, "", ""));
        }

        if self.setting_type == SettingType::Choice && self.choices.is_none() {
            return Err(self.mismatch(key, "", ""));
        }

        if !self.default.is_null() {
            self.validate(key, &self.default).map_err(|e| Error::InvalidSchema {
                key: key.to_string(),
                reason: format!("default value is invalid: {e}"),
            })?;
        }

        Ok(())
    }
}

fn format_choices(choices: &[ConfigValue]) -> String {
    let rendered: Vec<String> = choices.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

// =============================================================================
// Schema
// =============================================================================

/// Ordered mapping from setting name to [`SettingEntry`]
///
/// Insertion order is kept; it is the key order of
/// [`ConfigStore::get_all`](crate::ConfigStore::get_all) and of saved files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    entries: IndexMap<String, SettingEntry>,
}

impl Schema {
    /// Create an empty schema
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry (builder style)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, entry: SettingEntry) -> Self {
        self.insert(key, entry);
        self
    }

    /// Add or replace an entry, returning the replaced one
    pub fn insert(&mut self, key: impl Into<String>, entry: SettingEntry) -> Option<SettingEntry> {
        self.entries.insert(key.into(), entry)
    }

    pub fn get(&self, key: &str) -> Option<&SettingEntry> {
        self.entries.get(key)
    }

    /// Look up an entry, failing for keys outside the schema
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownKey` if `key` is not declared.
    pub fn entry(&self, key: &str) -> Result<&SettingEntry> {
        self.entries
            .get(key)
            .ok_or_else(|| Error::UnknownKey(key.to_string()))
    }

    /// Default value declared for `key`
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownKey` if `key` is not declared.
    pub fn default_for(&self, key: &str) -> Result<&ConfigValue> {
        self.entry(key).map(|entry| &entry.default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every entry up front
    ///
    /// Stores never call this themselves; it is for callers who want a
    /// malformed schema to fail at startup rather than on first use.
    ///
    /// # Errors
    ///
    /// Returns the first malformed entry as `Error::InvalidSchema`.
    pub fn validate(&self) -> Result<()> {
        for (key, entry) in &self.entries {
            entry.validate_schema(key)?;
        }
        Ok(())
    }

    /// Parse a schema from a JSON document
    ///
    /// ```json
    /// {"retry_count": {"type": "int", "default": 3}}
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if the document is not a valid schema.
    pub fn from_json_str(content: &str) -> Result<Self> {
        JsonStorage::new().deserialize(content)
    }

    /// Read a schema from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `Error::FileRead` if the file cannot be read, or `Error::Parse`
    /// if it is not a valid schema.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        JsonStorage::new().read(path.as_ref())
    }
}

impl<K: Into<String>> FromIterator<(K, SettingEntry)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, SettingEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, e)| (k.into(), e)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = (&'a String, &'a SettingEntry);
    type IntoIter = indexmap::map::Iter<'a, String, SettingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Macro for building a [`Schema`] more cleanly
///
/// # Example
/// ```rust
/// use cfgstore::{schema, SettingEntry};
///
/// let schema = schema! {
///     "environment" => SettingEntry::choice("dev", ["dev", "staging", "prod"]),
///     "retry_count" => SettingEntry::int(3),
///     "debug_mode" => SettingEntry::boolean(false),
/// };
/// assert!(schema.contains_key("retry_count"));
/// ```
#[macro_export]
macro_rules! schema {
    ($($key:expr => $entry:expr),* $(,)?) => {{
        let mut schema = $crate::Schema::new();
        $(
            schema.insert($key, $entry);
        )*
        schema
    }};
}

// =============================================================================
// Tests
// =============================================================================
