//! Documentation generator for settings schemas
//!
//! Generates markdown documentation from a [`Schema`].

use crate::config::{Schema, SettingEntry, SettingType};
use crate::value::ConfigValue;

/// Configuration for docs generation
#[derive(Debug, Clone, Default)]
pub struct DocsConfig {
    /// Title for the documentation
    pub title: Option<String>,
    /// Description/introduction text
    pub description: Option<String>,
}

impl DocsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Generate markdown documentation for every setting in `schema`
///
/// Settings are listed in schema order.
#[must_use]
pub fn generate_docs(schema: &Schema, config: DocsConfig) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    let title = config
        .title
        .unwrap_or_else(|| "Settings Reference".to_string());
    let _ = writeln!(output, "# {title}\n");

    if let Some(desc) = config.description {
        let _ = writeln!(output, "{desc}\n");
    }

    output.push_str("## Settings\n\n");
    for (key, entry) in schema.iter() {
        format_setting(&mut output, key, entry);
    }

    output
}

fn format_setting(out: &mut String, key: &str, entry: &SettingEntry) {
    use std::fmt::Write;

    let _ = writeln!(out, "### `{key}`\n");

    if let Some(ref desc) = entry.description {
        let _ = writeln!(out, "{desc}\n");
    }

    out.push_str("| Property | Value |\n");
    out.push_str("|----------|-------|\n");
    let _ = writeln!(out, "| **Type** | {} |", format_type(&entry.setting_type));
    let _ = writeln!(out, "| **Default** | {} |", format_default(&entry.default));
    out.push('\n');

    if let Some(ref choices) = entry.choices {
        out.push_str("**Choices:**\n\n");
        for choice in choices {
            let _ = writeln!(out, "- `{choice}`");
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
}

fn format_type(t: &SettingType) -> String {
    match t {
        SettingType::Bool => "Boolean".to_string(),
        SettingType::String => "String".to_string(),
        SettingType::Int => "Integer".to_string(),
        SettingType::Choice => "Choice".to_string(),
        SettingType::Unsupported(name) if name.is_empty() => "Unsupported (unset)".to_string(),
        SettingType::Unsupported(name) => format!("Unsupported (`{name}`)"),
    }
}

fn format_default(v: &ConfigValue) -> String {
    match v {
        ConfigValue::Null => "_none_".to_string(),
        other => format!("`{other}`"),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn docs_schema() -> Schema {
        Schema::new()
            .with(
                "theme",
                SettingEntry::choice("auto", ["light", "dark", "auto"])
                    .description("Choose your preferred color theme"),
            )
            .with("max_items", SettingEntry::int(50))
            .with("token", SettingEntry::string("").no_default())
    }

    #[test]
    fn test_generate_docs() {
        let docs = generate_docs(
            &docs_schema(),
            DocsConfig::new()
                .with_title("My App Settings")
                .with_description("Configuration options for My App"),
        );

        assert!(docs.starts_with("# My App Settings\n"));
        assert!(docs.contains("Configuration options for My App"));
        assert!(docs.contains("### `theme`"));
        assert!(docs.contains("Choose your preferred color theme"));
        assert!(docs.contains("| **Type** | Choice |"));
        assert!(docs.contains("| **Default** | `\"auto\"` |"));
        assert!(docs.contains("- `\"dark\"`"));
        assert!(docs.contains("| **Type** | Integer |"));
        assert!(docs.contains("| **Default** | _none_ |"));
    }

    #[test]
    fn test_docs_follow_schema_order() {
        let docs = generate_docs(&docs_schema(), DocsConfig::new());

        assert!(docs.starts_with("# Settings Reference"));
        let theme = docs.find("`theme`").unwrap();
        let max_items = docs.find("`max_items`").unwrap();
        let token = docs.find("`token`").unwrap();
        assert!(theme < max_items && max_items < token);
    }

    #[test]
    fn test_unsupported_type_is_documented() {
        let schema = Schema::new().with("ratio", SettingEntry::new("float"));
        let docs = generate_docs(&schema, DocsConfig::new());
        assert!(docs.contains("Unsupported (`float`)"));
    }
}
