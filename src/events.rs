//! Event system for settings changes
//!
//! Provides change callbacks and extra per-key validators. Listeners only hear
//! about changes to the effective value (explicit value or schema default).

use crate::value::ConfigValue;
use std::collections::HashMap;
use std::fmt;

/// Type alias for a change callback
pub type ChangeCallback = Box<dyn Fn(&str, &ConfigValue, &ConfigValue) + Send + Sync>;

/// Type alias for a validator function
pub type Validator = Box<dyn Fn(&ConfigValue) -> Result<(), String> + Send + Sync>;

/// Manages event listeners for settings changes
#[derive(Default)]
pub struct EventManager {
    /// Global listeners (called for all changes)
    global_listeners: Vec<ChangeCallback>,

    /// Per-key listeners (called only for specific setting changes)
    key_listeners: HashMap<String, Vec<ChangeCallback>>,

    /// Validators per key
    validators: HashMap<String, Vec<Validator>>,
}

impl EventManager {
    /// Create a new event manager
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a global change listener (called for all settings changes)
    ///
    /// # Arguments
    /// * `callback` - Function receiving (`key`, `old_value`, `new_value`)
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: Fn(&str, &ConfigValue, &ConfigValue) + Send + Sync + 'static,
    {
        self.global_listeners.push(Box::new(callback));
    }

    /// Register a listener for a specific setting key
    pub fn watch<F>(&mut self, key: &str, callback: F)
    where
        F: Fn(&str, &ConfigValue, &ConfigValue) + Send + Sync + 'static,
    {
        self.key_listeners
            .entry(key.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Register a validator for a specific setting key
    ///
    /// Validators run after the schema's type rule, on both `set` and `load`.
    /// If any validator returns an error, the value is rejected.
    pub fn add_validator<F>(&mut self, key: &str, validator: F)
    where
        F: Fn(&ConfigValue) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validators
            .entry(key.to_string())
            .or_default()
            .push(Box::new(validator));
    }

    /// Run the validators registered for `key`
    ///
    /// # Errors
    ///
    /// Returns the first validation error message if any validator fails.
    pub fn validate(&self, key: &str, value: &ConfigValue) -> Result<(), String> {
        if let Some(validators) = self.validators.get(key) {
            for validator in validators {
                validator(value)?;
            }
        }
        Ok(())
    }

    /// Notify all listeners about a change
    ///
    /// Does nothing when `old_value == new_value`.
    pub fn notify(&self, key: &str, old_value: &ConfigValue, new_value: &ConfigValue) {
        if old_value == new_value {
            return;
        }

        for callback in &self.global_listeners {
            callback(key, old_value, new_value);
        }

        if let Some(listeners) = self.key_listeners.get(key) {
            for callback in listeners {
                callback(key, old_value, new_value);
            }
        }
    }

    /// Remove all listeners for a specific key
    pub fn unwatch(&mut self, key: &str) {
        self.key_listeners.remove(key);
    }

    /// Clear all listeners (validators are kept)
    pub fn clear(&mut self) {
        self.global_listeners.clear();
        self.key_listeners.clear();
    }
}

impl fmt::Debug for EventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventManager")
            .field("global_listeners", &self.global_listeners.len())
            .field("key_listeners", &self.key_listeners.keys().collect::<Vec<_>>())
            .field("validators", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
