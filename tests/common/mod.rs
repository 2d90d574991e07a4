//! Common test utilities for cfgstore integration tests
//!
//! Provides shared schemas, a temp-dir fixture and file helpers.

#![allow(dead_code)]

use cfgstore::{Schema, SettingEntry, schema};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Test Schemas
// =============================================================================

/// UI-style settings covering every supported type
pub fn app_schema() -> Schema {
    schema! {
        "theme" => SettingEntry::choice("auto", ["light", "dark", "auto"])
            .description("Application color theme"),
        "max_items" => SettingEntry::int(50),
        "enable_notifications" => SettingEntry::boolean(true),
        "api_endpoint" => SettingEntry::string("https://api.example.com"),
    }
}

/// Service-style settings with two choice entries
pub fn service_schema() -> Schema {
    schema! {
        "environment" => SettingEntry::choice("dev", ["dev", "staging", "prod"]),
        "retry_count" => SettingEntry::int(3),
        "debug_mode" => SettingEntry::boolean(false),
        "service_name" => SettingEntry::string("doc-processor"),
        "log_level" => SettingEntry::choice("INFO", ["DEBUG", "INFO", "WARNING", "ERROR"]),
        "timeout_seconds" => SettingEntry::int(30),
    }
}

// =============================================================================
// Test Fixtures
// =============================================================================

/// Temporary directory holding a settings file path
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the settings file path (not created)
    pub fn settings_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.json")
    }

    /// Write raw content to the settings file
    pub fn write_settings(&self, content: &str) -> PathBuf {
        let path = self.settings_path();
        std::fs::write(&path, content).expect("Failed to write settings file");
        path
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read the raw settings JSON file content
pub fn read_settings_file(fixture: &TestFixture) -> Option<serde_json::Value> {
    let content = std::fs::read_to_string(fixture.settings_path()).ok()?;
    serde_json::from_str(&content).ok()
}
