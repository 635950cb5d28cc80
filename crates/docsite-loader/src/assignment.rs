//! `path=value` overrides
//!
//! Overrides given on the command line form one extra fragment. Values are
//! typed by their spelling:
//!
//! - `true` / `false` → boolean
//! - `42` → integer, `1.5` → float
//! - `[..]` / `{..}` → JSON sequence or mapping
//! - `"quoted"` → string, quotes removed
//! - anything else → string as written

use crate::error::{Error, Result};
use docsite_core::path::{PathSegment, parse_path};
use docsite_core::{ConfigValue, Mapping};

/// Name of the fragment built from overrides
pub const OVERRIDES_FRAGMENT: &str = "overrides";

/// Split `input` into its key segments and typed value.
pub fn parse_assignment(input: &str) -> Result<(Vec<String>, ConfigValue)> {
    let (raw_path, raw_value) = input
        .split_once('=')
        .ok_or_else(|| Error::assignment(input, "expected `path=value`"))?;

    let raw_path = raw_path.trim();
    if raw_path.is_empty() {
        return Err(Error::assignment(input, "path is empty"));
    }
    if raw_path.contains('[') {
        return Err(Error::assignment(
            input,
            "sequence elements cannot be assigned individually; set the whole sequence",
        ));
    }

    let keys = parse_path(raw_path)
        .ok_or_else(|| Error::assignment(input, "malformed path"))?
        .into_iter()
        .filter_map(|segment| match segment {
            PathSegment::Key(key) => Some(key),
            PathSegment::Index(_) => None,
        })
        .collect();

    Ok((keys, parse_scalar(raw_value.trim())))
}

fn parse_scalar(raw: &str) -> ConfigValue {
    match raw {
        "true" => return ConfigValue::Bool(true),
        "false" => return ConfigValue::Bool(false),
        _ => {}
    }
    if let Ok(i) = raw.parse::<i64>() {
        return ConfigValue::Integer(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return ConfigValue::Float(f);
        }
    }
    if raw.starts_with('[') || raw.starts_with('{') || raw.starts_with('"') {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(raw) {
            return ConfigValue::from(json);
        }
    }
    ConfigValue::String(raw.to_string())
}

/// Build one mapping from a list of assignments.
///
/// Later assignments to the same path replace earlier ones. Assigning both a
/// path and something underneath it (`header=true` and `header.logo=false`)
/// is rejected.
pub fn assignments_to_tree<I, S>(assignments: I) -> Result<Mapping>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tree = Mapping::new();
    for assignment in assignments {
        let input = assignment.as_ref();
        let (keys, value) = parse_assignment(input)?;
        insert(&mut tree, &keys, value, input)?;
    }
    Ok(tree)
}

fn insert(tree: &mut Mapping, keys: &[String], value: ConfigValue, input: &str) -> Result<()> {
    let Some((last, parents)) = keys.split_last() else {
        return Err(Error::assignment(input, "path is empty"));
    };

    let mut node = tree;
    for key in parents {
        let entry = node
            .entry(key.clone())
            .or_insert_with(|| ConfigValue::Mapping(Mapping::new()));
        node = match entry {
            ConfigValue::Mapping(map) => map,
            _ => return Err(Error::assignment(input, format!("`{key}` is already set to a value"))),
        };
    }

    if matches!(node.get(last), Some(ConfigValue::Mapping(_))) && !value.is_mapping() {
        return Err(Error::assignment(
            input,
            format!("`{last}` already has nested assignments"),
        ));
    }
    node.insert(last.clone(), value);
    Ok(())
}
