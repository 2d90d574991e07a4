//! # cfgstore - Schema-validated settings store
//!
//! A small library for holding application settings that are checked against
//! a declared schema, persisted as JSON, and defaulted from the schema when
//! unset.
//!
//! ## Features
//!
//! - **Closed Schema**: Only declared keys exist; anything else is an `UnknownKey` error
//! - **Strict Types**: `bool`, `string`, `int` and `choice` values, never coerced
//! - **Schema Defaults**: Unset keys resolve to the default declared in the schema
//! - **Full-Replace Load**: Loading a file validates every entry before replacing the values
//! - **Total Save**: Saved files contain every schema key, in schema order
//! - **Change Events**: Callbacks and extra validators per key
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cfgstore::{schema, ConfigStore, SettingEntry};
//!
//! # fn example() -> cfgstore::Result<()> {
//! let schema = schema! {
//!     "theme" => SettingEntry::choice("auto", ["light", "dark", "auto"]),
//!     "max_items" => SettingEntry::int(50),
//!     "enable_notifications" => SettingEntry::boolean(true),
//!     "api_endpoint" => SettingEntry::string("https://api.example.com"),
//! };
//!
//! let mut store = ConfigStore::new(&schema);
//! store.load("config.json")?; // a missing file keeps the defaults
//!
//! println!("theme = {}", store.get("theme")?);
//! store.set("theme", "dark")?;
//! assert!(store.set("theme", "purple").is_err());
//!
//! store.save("config.json")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Schemas From Documents
//!
//! Schemas can also be parsed from JSON. Entries are not checked until a value
//! for them is validated; call [`Schema::validate`] to fail fast instead.
//!
//! ```rust
//! use cfgstore::{ConfigStore, ConfigValue, Schema};
//!
//! let schema = Schema::from_json_str(r#"{
//!     "environment": {"type": "choice", "choices": ["dev", "staging", "prod"], "default": "dev"},
//!     "retry_count": {"type": "int", "default": 3}
//! }"#)?;
//! schema.validate()?;
//!
//! let store = ConfigStore::new(&schema);
//! assert_eq!(store.get("retry_count")?, ConfigValue::Int(3));
//! # Ok::<(), cfgstore::Error>(())
//! ```
//!
//! ## Default Value Behavior
//!
//! - `get` returns the explicit value, else the schema default (`Null` if none)
//! - `get_or` returns the explicit value, else the given fallback, whatever it is
//! - `reset` stores the schema default as an explicit value
//! - `load` drops explicit values missing from the file

// Core modules
mod docs;
mod error;
mod events;
pub mod storage;
mod store;
mod value;

// Grouped modules
pub mod config;

// Re-exports from core
pub use docs::{DocsConfig, generate_docs};
pub use error::{Error, Result};
pub use events::{ChangeCallback, EventManager, Validator};
pub use storage::{JsonStorage, StorageBackend};
pub use store::{ConfigStore, SettingsMap};
pub use value::{ConfigValue, json_kind};

// Re-exports from config
pub use config::{Schema, SettingEntry, SettingType, StoreConfig, StoreConfigBuilder};
