//! Schema and store configuration types
//!
//! This module contains:
//! - `Schema` / `SettingEntry` - The closed set of recognized settings
//! - `SettingType` - Declared value type of an entry
//! - `StoreConfig` - Settings path and storage backend for a store

mod schema;
mod types;

pub use schema::{Schema, SettingEntry, SettingType};

pub use types::{StoreConfig, StoreConfigBuilder};
