//! The settings store
//!
//! [`ConfigStore`] is the primary entry point: it validates and holds values
//! for the keys of a borrowed [`Schema`](crate::Schema) and reads/writes them
//! through a [`StorageBackend`](crate::StorageBackend).

mod core;
mod io;
mod operations;

pub use self::core::{ConfigStore, SettingsMap};
