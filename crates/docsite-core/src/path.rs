//! Key path parsing and traversal
//!
//! Paths address nodes in a configuration tree.
//!
//! # Path Syntax
//!
//! - Dot-separated keys: `colorMode.preference`
//! - Sequence indexing: `footer.textLinks[0].href`
//!
//! Provenance keys are always written in this syntax, so a path reported in a
//! warning can be fed straight back into [`EffectiveConfig::get`].
//!
//! [`EffectiveConfig::get`]: crate::EffectiveConfig::get

use crate::value::{ConfigValue, Mapping};
use std::fmt;

/// A segment of a path - either a key or a sequence index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A key in a mapping (e.g., "colorMode" in "colorMode.preference")
    Key(String),
    /// An index in a sequence (e.g., 0 in `textLinks[0]`)
    Index(usize),
}

/// Parse a path string into segments.
///
/// Returns `None` for a malformed path: an empty key (`a..b`), a stray `]`,
/// an unterminated bracket, or a bracket holding anything but decimal digits.
/// The empty string parses to no segments.
///
/// # Examples
///
/// ```
/// use docsite_core::path::{parse_path, PathSegment};
///
/// let path = parse_path("footer.textLinks[0].href").unwrap();
/// assert_eq!(path, vec![
///     PathSegment::Key("footer".to_string()),
///     PathSegment::Key("textLinks".to_string()),
///     PathSegment::Index(0),
///     PathSegment::Key("href".to_string()),
/// ]);
/// assert_eq!(parse_path("title[abc]"), None);
/// ```
pub fn parse_path(path: &str) -> Option<Vec<PathSegment>> {
    let mut segments = Vec::new();
    if path.is_empty() {
        return Some(segments);
    }

    for part in path.split('.') {
        let (key, mut brackets) = part.split_at(part.find('[').unwrap_or(part.len()));
        if !is_addressable_key(key) {
            return None;
        }
        segments.push(PathSegment::Key(key.to_string()));

        while !brackets.is_empty() {
            let (index, rest) = brackets.strip_prefix('[')?.split_once(']')?;
            if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            segments.push(PathSegment::Index(index.parse().ok()?));
            brackets = rest;
        }
    }

    Some(segments)
}

/// Whether `key` can appear as one segment of a path.
///
/// Keys must be non-empty and free of `.`, `[` and `]`; otherwise two
/// different trees would share a path.
pub fn is_addressable_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['.', '[', ']'])
}

/// A mapping key that cannot be written as a path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaddressableKey {
    /// Path of the mapping holding the key (empty at the root)
    pub parent: String,
    pub key: String,
}

impl fmt::Display for UnaddressableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parent.is_empty() {
            write!(f, "key `{}` cannot be used in a path", self.key)
        } else {
            write!(f, "key `{}` under `{}` cannot be used in a path", self.key, self.parent)
        }
    }
}

/// First key in `tree`, in traversal order, that [`is_addressable_key`] rejects.
///
/// Mappings nested inside sequences are checked too.
pub fn find_unaddressable_key(tree: &Mapping) -> Option<UnaddressableKey> {
    find_in_mapping(tree, "")
}

fn find_in_mapping(map: &Mapping, parent: &str) -> Option<UnaddressableKey> {
    map.iter().find_map(|(key, value)| {
        if !is_addressable_key(key) {
            return Some(UnaddressableKey {
                parent: parent.to_string(),
                key: key.clone(),
            });
        }
        find_in_value(value, &join(parent, key))
    })
}

fn find_in_value(value: &ConfigValue, path: &str) -> Option<UnaddressableKey> {
    match value {
        ConfigValue::Mapping(map) => find_in_mapping(map, path),
        ConfigValue::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_in_value(item, &join_index(path, i))),
        _ => None,
    }
}

/// Append a key to a parent path.
pub fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Append a sequence index to a parent path.
pub fn join_index(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Whether `path` equals `ancestor` or lies underneath it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    match path.strip_prefix(ancestor) {
        Some("") => true,
        Some(rest) => rest.starts_with('.') || rest.starts_with('['),
        None => false,
    }
}

/// Look up a node under a root mapping.
///
/// Returns `None` for an empty path, a missing key, an out-of-range index, or
/// when a segment tries to descend into a scalar.
pub fn get_in<'a>(root: &'a Mapping, segments: &[PathSegment]) -> Option<&'a ConfigValue> {
    let (first, rest) = segments.split_first()?;
    let next = match first {
        PathSegment::Key(key) => root.get(key)?,
        PathSegment::Index(_) => return None,
    };
    get_at_path(next, rest)
}

/// Look up a node under any value.
pub fn get_at_path<'a>(value: &'a ConfigValue, segments: &[PathSegment]) -> Option<&'a ConfigValue> {
    let Some((first, rest)) = segments.split_first() else {
        return Some(value);
    };

    let next = match (first, value) {
        (PathSegment::Key(key), ConfigValue::Mapping(map)) => map.get(key)?,
        (PathSegment::Index(idx), ConfigValue::Sequence(items)) => items.get(*idx)?,
        _ => return None,
    };

    get_at_path(next, rest)
}
