//! Configuration fragments
//!
//! A fragment is one named, prioritized partial configuration tree. Fragments
//! are built once from static declarations and never mutated afterwards.

use crate::error::{Error, Result};
use crate::path::find_unaddressable_key;
use crate::value::{ConfigValue, Mapping};
use serde::{Deserialize, Serialize};

/// One layer of configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFragment {
    /// Identifier reported in provenance and warnings
    pub name: String,

    /// Rank of this layer; higher overrides lower
    pub priority: i64,

    /// Partial configuration tree
    #[serde(default)]
    pub tree: Mapping,
}

impl ConfigFragment {
    /// Wrap a tree without checking its keys; [`Resolver::load`] validates
    /// every fragment before merging.
    ///
    /// [`Resolver::load`]: crate::Resolver::load
    pub fn new(name: impl Into<String>, priority: i64, tree: Mapping) -> Self {
        Self {
            name: name.into(),
            priority,
            tree,
        }
    }

    /// Build a fragment from any tree value; the root must be a mapping.
    ///
    /// Fails with [`Error::InvalidFragment`] for a non-mapping root or a key
    /// that cannot be addressed by a path (see [`ConfigFragment::validate`]).
    pub fn from_value(name: impl Into<String>, priority: i64, tree: ConfigValue) -> Result<Self> {
        let name = name.into();
        let fragment = match tree {
            ConfigValue::Mapping(tree) => Self {
                name,
                priority,
                tree,
            },
            other => {
                return Err(Error::InvalidFragment {
                    reason: format!("root must be a mapping, found {}", other.kind()),
                    name,
                });
            }
        };
        fragment.validate()?;
        Ok(fragment)
    }

    /// Check that every key is a valid path segment.
    ///
    /// Keys must be non-empty and free of `.`, `[` and `]`, so each leaf has
    /// exactly one path.
    pub fn validate(&self) -> Result<()> {
        match find_unaddressable_key(&self.tree) {
            Some(bad) => Err(Error::InvalidFragment {
                name: self.name.clone(),
                reason: bad.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Build a fragment from a JSON object.
    ///
    /// # Example
    ///
    /// ```
    /// use docsite_core::ConfigFragment;
    /// use serde_json::json;
    ///
    /// let site = ConfigFragment::from_json("site", 1, json!({"title": "GDPR"})).unwrap();
    /// assert_eq!(site.tree["title"].as_str(), Some("GDPR"));
    /// ```
    pub fn from_json(
        name: impl Into<String>,
        priority: i64,
        tree: serde_json::Value,
    ) -> Result<Self> {
        Self::from_value(name, priority, ConfigValue::from(tree))
    }

    /// Number of concrete leaves (scalars and whole sequences) this fragment sets
    pub fn leaf_count(&self) -> usize {
        fn count(value: &ConfigValue) -> usize {
            match value {
                ConfigValue::Null => 0,
                ConfigValue::Mapping(map) => map.values().map(count).sum(),
                _ => 1,
            }
        }
        self.tree.values().map(count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_rejects_non_mapping_roots() {
        let err = ConfigFragment::from_json("broken", 0, json!(["title"])).unwrap_err();
        assert!(matches!(err, Error::InvalidFragment { ref name, .. } if name == "broken"));
    }

    #[test]
    fn from_json_rejects_keys_that_collide_with_paths() {
        let err = ConfigFragment::from_json("b", 1, json!({"a.b": 2})).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidFragment {
                name: "b".into(),
                reason: "key `a.b` cannot be used in a path".into(),
            }
        );

        let err =
            ConfigFragment::from_json("site", 0, json!({"aside": {"exclude[0]": "/a"}})).unwrap_err();
        assert!(matches!(err, Error::InvalidFragment { ref reason, .. } if reason.contains("under `aside`")));
    }

    #[test]
    fn leaf_count_treats_sequences_as_single_leaves() {
        let fragment = ConfigFragment::from_json(
            "site",
            0,
            json!({
                "title": "GDPR",
                "aside": {"level": 0, "exclude": ["/a", "/b"]},
                "colorMode": {"hid": null}
            }),
        )
        .unwrap();

        assert_eq!(fragment.leaf_count(), 3);
    }
}
