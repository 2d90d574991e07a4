//! Edge Cases Integration Tests
//!
//! Tests for error conditions and boundary behaviors:
//! - Keys outside the schema
//! - Strict type checks (no coercion)
//! - Malformed and mis-shaped documents
//! - Lazily detected schema problems

mod common;

use cfgstore::{ConfigStore, ConfigValue, Error, Schema, SettingEntry};
use common::{TestFixture, app_schema, service_schema};

// =============================================================================
// Unknown Keys
// =============================================================================

#[test]
fn test_set_unknown_key_raises() {
    let schema = service_schema();
    let mut store = ConfigStore::new(&schema);

    let err = store.set("unknown_key", 1).unwrap_err();
    assert!(matches!(err, Error::UnknownKey(ref key) if key == "unknown_key"));
}

#[test]
fn test_get_and_reset_unknown_key_raise() {
    let schema = service_schema();
    let mut store = ConfigStore::new(&schema);

    assert!(store.get("not_in_schema").unwrap_err().is_unknown_key());
    assert!(store.reset("not_in_schema").unwrap_err().is_unknown_key());
}

#[test]
fn test_load_unknown_key_raises() {
    let fixture = TestFixture::new();
    let path = fixture.write_settings(r#"{"unknown_key": 123}"#);
    let schema = app_schema();

    let mut store = ConfigStore::new(&schema);
    let err = store.load(&path).unwrap_err();

    assert!(err.is_unknown_key());
    assert!(store.values().is_empty());
}

// =============================================================================
// Strict Types
// =============================================================================

#[test]
fn test_set_wrong_type_bool_raises() {
    let schema = service_schema();
    let mut store = ConfigStore::new(&schema);

    let err = store.set("debug_mode", "true").unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("expected boolean, got string"));
}

#[test]
fn test_set_wrong_type_int_raises() {
    let schema = service_schema();
    let mut store = ConfigStore::new(&schema);

    assert!(store.set("retry_count", 2.5).unwrap_err().is_validation());
    assert!(store.set("retry_count", true).unwrap_err().is_validation());
    assert!(store.set("retry_count", "3").unwrap_err().is_validation());
    assert_eq!(store.get("retry_count").unwrap(), ConfigValue::Int(3));
}

#[test]
fn test_set_wrong_type_string_raises() {
    let schema = service_schema();
    let mut store = ConfigStore::new(&schema);

    let err = store.set("service_name", 123).unwrap_err();
    assert!(err.to_string().contains("expected string, got int"));
}

#[test]
fn test_set_invalid_choice_raises() {
    let schema = app_schema();
    let mut store = ConfigStore::new(&schema);

    let err = store.set("theme", "purple").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        r#"Invalid value for 'theme': expected one of ["light", "dark", "auto"], got "purple""#
    );
    assert!(store.values().is_empty());
}

#[test]
fn test_choice_is_case_sensitive() {
    let schema = service_schema();
    let mut store = ConfigStore::new(&schema);

    assert!(store.set("environment", "production").is_err());
    assert!(store.set("log_level", "info").is_err());
    assert!(store.set("log_level", "WARNING").is_ok());
}

#[test]
fn test_null_rejected_for_typed_entries() {
    let schema = app_schema();
    let mut store = ConfigStore::new(&schema);

    let err = store.set("max_items", ConfigValue::Null).unwrap_err();
    assert!(err.to_string().contains("expected int, got null"));
}

// =============================================================================
// Documents
// =============================================================================

#[test]
fn test_load_invalid_type_in_file_raises() {
    let fixture = TestFixture::new();
    let path = fixture.write_settings(r#"{"retry_count": "3"}"#);
    let schema = service_schema();

    let mut store = ConfigStore::new(&schema);
    let err = store.load(&path).unwrap_err();

    assert!(matches!(err, Error::InvalidValue { ref key, .. } if key == "retry_count"));
}

#[test]
fn test_load_float_for_int_raises() {
    let fixture = TestFixture::new();
    let path = fixture.write_settings(r#"{"retry_count": 3.0}"#);
    let schema = service_schema();

    let mut store = ConfigStore::new(&schema);
    let err = store.load(&path).unwrap_err();
    assert!(err.to_string().contains("expected int, got float"));
}

#[test]
fn test_load_integer_beyond_i64_raises() {
    let fixture = TestFixture::new();
    let path = fixture.write_settings(r#"{"retry_count": 18446744073709551615}"#);
    let schema = service_schema();

    let mut store = ConfigStore::new(&schema);
    let err = store.load(&path).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("expected int, got integer out of range"));
    assert!(store.values().is_empty());
}

#[test]
fn test_load_nested_value_raises() {
    let fixture = TestFixture::new();
    let path = fixture.write_settings(r#"{"environment": {"name": "prod"}}"#);
    let schema = service_schema();

    let mut store = ConfigStore::new(&schema);
    let err = store.load(&path).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains(r#"got {"name":"prod"}"#));
}

#[test]
fn test_load_array_top_level_leaves_values_unchanged() {
    let fixture = TestFixture::new();
    let path = fixture.write_settings(r#"[{"theme": "dark"}]"#);
    let schema = app_schema();

    let mut store = ConfigStore::new(&schema);
    store.set("theme", "light").unwrap();

    let err = store.load(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidDocument(_)));
    assert_eq!(err.to_string(), "Invalid config document: expected object at top level, got array");
    assert_eq!(store.get("theme").unwrap(), ConfigValue::from("light"));
}

#[test]
fn test_load_corrupted_file_propagates() {
    let fixture = TestFixture::new();
    let path = fixture.write_settings("{ not valid json }");
    let schema = app_schema();

    let mut store = ConfigStore::new(&schema);
    let err = store.load(&path).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(!err.is_validation());
}

#[test]
fn test_load_directory_is_read_error() {
    let fixture = TestFixture::new();
    let schema = app_schema();

    let mut store = ConfigStore::new(&schema);
    let err = store.load(fixture.temp_dir.path()).unwrap_err();
    assert!(matches!(err, Error::FileRead { .. }));
    assert!(!err.is_not_found());
}

#[test]
fn test_non_ascii_values_survive_round_trip() {
    let fixture = TestFixture::new();
    let schema = app_schema();

    let mut store = ConfigStore::new(&schema);
    store.set("api_endpoint", "https://例え.jp/äpi").unwrap();
    store.save(fixture.settings_path()).unwrap();

    let raw = std::fs::read_to_string(fixture.settings_path()).unwrap();
    assert!(raw.contains("https://例え.jp/äpi"));

    let mut fresh = ConfigStore::new(&schema);
    fresh.load(fixture.settings_path()).unwrap();
    assert_eq!(fresh.get_all(), store.get_all());
}

// =============================================================================
// Schema Problems
// =============================================================================

#[test]
fn test_unsupported_type_only_fails_on_use() {
    let fixture = TestFixture::new();
    let schema = Schema::from_json_str(
        r#"{
            "ratio": {"type": "float", "default": 0.5},
            "retry_count": {"type": "int", "default": 3}
        }"#,
    )
    .unwrap();

    let mut store = ConfigStore::new(&schema);
    assert_eq!(store.get("ratio").unwrap(), ConfigValue::Float(0.5));
    store.set("retry_count", 4).unwrap();

    let path = fixture.write_settings(r#"{"ratio": 0.75}"#);
    let err = store.load(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidSchema { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid schema for 'ratio': unknown type 'float'. Supported: bool, string, int, choice."
    );
    assert_eq!(store.get("retry_count").unwrap(), ConfigValue::Int(4));
}

#[test]
fn test_entry_without_default_resolves_to_null() {
    let fixture = TestFixture::new();
    let schema = Schema::new()
        .with("token", SettingEntry::string("").no_default())
        .with("retry_count", SettingEntry::int(3));

    let mut store = ConfigStore::new(&schema);
    assert!(store.get("token").unwrap().is_null());

    store.save(fixture.settings_path()).unwrap();
    let saved = common::read_settings_file(&fixture).unwrap();
    assert!(saved["token"].is_null());

    // A saved null fails the string rule on reload
    let err = store.load(fixture.settings_path()).unwrap_err();
    assert!(err.to_string().contains("expected string, got null"));
}
