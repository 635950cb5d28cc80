//! The resolved, immutable configuration

use crate::error::{Error, Result};
use crate::palette::{self, ColorPalette};
use crate::path::{self, parse_path};
use crate::sections::{
    AsideOptions, BuildTarget, ColorModePreference, FooterOptions, GithubEdit, HeaderOptions,
    SiteIdentity,
};
use crate::value::{ConfigValue, Mapping};
use crate::warning::ConflictWarning;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// The single merged result of a resolution run
///
/// Built only by the resolver and never modified afterwards. Share it by
/// reference (or behind an `Arc`) for the rest of the process; a reload
/// produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveConfig {
    values: Mapping,
    provenance: BTreeMap<String, String>,
    warnings: Vec<ConflictWarning>,
}

impl EffectiveConfig {
    pub(crate) fn new(
        values: Mapping,
        provenance: BTreeMap<String, String>,
        warnings: Vec<ConflictWarning>,
    ) -> Self {
        Self {
            values,
            provenance,
            warnings,
        }
    }

    /// Fully merged tree
    pub fn values(&self) -> &Mapping {
        &self.values
    }

    /// Leaf path → name of the fragment that supplied the winning value
    pub fn provenance(&self) -> &BTreeMap<String, String> {
        &self.provenance
    }

    /// Conflicts recorded during the merge, in resolution order
    pub fn warnings(&self) -> &[ConflictWarning] {
        &self.warnings
    }

    /// Fragment that supplied the leaf at `path`
    pub fn source_of(&self, path: &str) -> Option<&str> {
        self.provenance.get(path).map(String::as_str)
    }

    /// Look up a value by dotted path.
    ///
    /// # Example
    ///
    /// ```
    /// use docsite_core::{ConfigFragment, Resolver};
    /// use serde_json::json;
    ///
    /// let fragment = ConfigFragment::from_json("site", 0, json!({
    ///     "footer": {"textLinks": [{"text": "akronym.io", "href": "https://akronym.io"}]}
    /// })).unwrap();
    /// let config = Resolver::without_required().load(&[fragment]).unwrap();
    ///
    /// let href = config.get("footer.textLinks[0].href").unwrap();
    /// assert_eq!(href.as_str(), Some("https://akronym.io"));
    /// assert!(config.get("footer.logo").is_err());
    /// ```
    pub fn get(&self, path: &str) -> Result<&ConfigValue> {
        parse_path(path)
            .and_then(|segments| path::get_in(&self.values, &segments))
            .ok_or_else(|| Error::not_found(path))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }

    pub fn get_str(&self, path: &str) -> Result<&str> {
        let value = self.get(path)?;
        value.as_str().ok_or_else(|| mismatch(path, "string", value))
    }

    pub fn get_bool(&self, path: &str) -> Result<bool> {
        let value = self.get(path)?;
        value.as_bool().ok_or_else(|| mismatch(path, "boolean", value))
    }

    pub fn get_i64(&self, path: &str) -> Result<i64> {
        let value = self.get(path)?;
        value.as_i64().ok_or_else(|| mismatch(path, "integer", value))
    }

    /// Merged tree as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        ConfigValue::Mapping(self.values.clone()).to_json()
    }

    /// Deserialize the mapping at `section` into a typed view.
    ///
    /// An absent section deserializes from an empty mapping, so views whose
    /// fields all have defaults still succeed.
    pub fn section<T: DeserializeOwned>(&self, section: &str) -> Result<T> {
        let json = match self.values.get(section) {
            Some(value) => value.to_json(),
            None => serde_json::Value::Object(serde_json::Map::new()),
        };
        serde_json::from_value(json).map_err(|e| Error::InvalidSection {
            section: section.to_string(),
            message: e.to_string(),
        })
    }

    pub fn site(&self) -> Result<SiteIdentity> {
        serde_json::from_value(self.to_json()).map_err(|e| Error::InvalidSection {
            section: "site".to_string(),
            message: e.to_string(),
        })
    }

    pub fn aside(&self) -> Result<AsideOptions> {
        self.section("aside")
    }

    pub fn header(&self) -> Result<HeaderOptions> {
        self.section("header")
    }

    pub fn footer(&self) -> Result<FooterOptions> {
        self.section("footer")
    }

    pub fn github(&self) -> Result<GithubEdit> {
        self.section("github")
    }

    pub fn color_mode(&self) -> Result<ColorModePreference> {
        self.section("colorMode")
    }

    pub fn build(&self) -> Result<BuildTarget> {
        self.section("build")
    }

    /// Palettes under `color`, keyed by palette name
    pub fn palettes(&self) -> Result<BTreeMap<String, ColorPalette>> {
        palette::palettes(&self.values)
    }
}

fn mismatch(path: &str, expected: &'static str, found: &ConfigValue) -> Error {
    Error::TypeMismatch {
        path: path.to_string(),
        expected,
        found: found.kind(),
    }
}
