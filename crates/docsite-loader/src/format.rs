//! Fragment file formats and their conversion into configuration trees

use crate::error::{Error, Result};
use docsite_core::path::find_unaddressable_key;
use docsite_core::{ConfigValue, Mapping};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported fragment formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentFormat {
    Toml,
    Yaml,
    Json,
}

impl FragmentFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get default file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Toml => &["toml"],
            Self::Yaml => &["yaml", "yml"],
            Self::Json => &["json"],
        }
    }

    /// Parse `content` into a tree whose root must be a mapping.
    ///
    /// Keys containing `.`, `[` or `]` (a YAML float key such as `1.5`
    /// included) are rejected as parse errors. `origin` names the content in
    /// error messages.
    pub fn parse(&self, origin: &str, content: &str) -> Result<Mapping> {
        let value = match self {
            Self::Toml => toml::from_str::<toml::Value>(content)
                .map(from_toml)
                .map_err(|e| Error::parse(origin, *self, e.to_string()))?,
            Self::Yaml => {
                let raw = serde_yaml::from_str::<serde_yaml::Value>(content)
                    .map_err(|e| Error::parse(origin, *self, e.to_string()))?;
                from_yaml(raw).map_err(|message| Error::parse(origin, *self, message))?
            }
            Self::Json => serde_json::from_str::<serde_json::Value>(content)
                .map(ConfigValue::from)
                .map_err(|e| Error::parse(origin, *self, e.to_string()))?,
        };

        let map = match value {
            ConfigValue::Mapping(map) => map,
            // An empty YAML document is a valid, empty fragment
            ConfigValue::Null => Mapping::new(),
            other => {
                return Err(Error::InvalidRoot {
                    origin: origin.to_string(),
                    found: other.kind(),
                });
            }
        };

        match find_unaddressable_key(&map) {
            Some(bad) => Err(Error::parse(origin, *self, bad.to_string())),
            None => Ok(map),
        }
    }
}

impl fmt::Display for FragmentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        };
        f.write_str(name)
    }
}

/// TOML has no null; datetimes are carried as their string form.
fn from_toml(value: toml::Value) -> ConfigValue {
    match value {
        toml::Value::String(s) => ConfigValue::String(s),
        toml::Value::Integer(i) => ConfigValue::Integer(i),
        toml::Value::Float(f) => ConfigValue::Float(f),
        toml::Value::Boolean(b) => ConfigValue::Bool(b),
        toml::Value::Datetime(dt) => ConfigValue::String(dt.to_string()),
        toml::Value::Array(items) => {
            ConfigValue::Sequence(items.into_iter().map(from_toml).collect())
        }
        toml::Value::Table(table) => ConfigValue::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (k, from_toml(v)))
                .collect(),
        ),
    }
}

/// YAML keys may be numbers (`50: "#FCE3F3"`); scalar keys become strings.
fn from_yaml(value: serde_yaml::Value) -> std::result::Result<ConfigValue, String> {
    use serde_yaml::Value;

    Ok(match value {
        Value::Null => ConfigValue::Null,
        Value::Bool(b) => ConfigValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => ConfigValue::Integer(i),
            None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => ConfigValue::String(s),
        Value::Sequence(items) => ConfigValue::Sequence(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<std::result::Result<_, _>>()?,
        ),
        Value::Mapping(map) => {
            let mut out = Mapping::new();
            for (key, value) in map {
                out.insert(yaml_key(key)?, from_yaml(value)?);
            }
            ConfigValue::Mapping(out)
        }
        Value::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

fn yaml_key(key: serde_yaml::Value) -> std::result::Result<String, String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("unsupported mapping key: {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(FragmentFormat::from_extension("TOML"), Some(FragmentFormat::Toml));
        assert_eq!(FragmentFormat::from_extension("yml"), Some(FragmentFormat::Yaml));
        assert_eq!(
            FragmentFormat::from_path(Path::new("docs/app.config.json")),
            Some(FragmentFormat::Json)
        );
        assert_eq!(FragmentFormat::from_extension("ts"), None);
    }

    #[test]
    fn yaml_numeric_keys_become_strings() {
        let tree = FragmentFormat::Yaml
            .parse("tokens", "color:\n  primary:\n    50: \"#FCE3F3\"\n")
            .unwrap();
        let primary = tree["color"].as_mapping().unwrap()["primary"]
            .as_mapping()
            .unwrap();

        assert_eq!(primary["50"].as_str(), Some("#FCE3F3"));
    }

    #[test]
    fn toml_datetime_becomes_string() {
        let tree = FragmentFormat::Toml
            .parse("site", "updated = 2024-01-02T03:04:05Z\n")
            .unwrap();
        assert_eq!(tree["updated"].as_str(), Some("2024-01-02T03:04:05Z"));
    }

    #[test]
    fn scalar_root_is_rejected() {
        let err = FragmentFormat::Json.parse("site", "\"GDPR\"").unwrap_err();
        assert!(matches!(err, Error::InvalidRoot { found: "string", .. }));
    }

    #[test]
    fn dotted_keys_are_rejected() {
        let err = FragmentFormat::Json
            .parse("site.json", r#"{"a": {"b": 1}, "a.b": 2}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Parse { ref message, .. } if message.contains("`a.b`")));

        let err = FragmentFormat::Yaml
            .parse("tokens.yaml", "color:\n  primary:\n    1.5: \"#FCE3F3\"\n")
            .unwrap_err();
        assert!(matches!(err, Error::Parse { ref message, .. } if message.contains("color.primary")));
    }

    #[test]
    fn parse_errors_name_format_and_origin() {
        let err = FragmentFormat::Toml.parse("site.toml", "title = ").unwrap_err();
        let display = err.to_string();
        assert!(display.contains("TOML"), "got: {display}");
        assert!(display.contains("site.toml"), "got: {display}");
    }
}
