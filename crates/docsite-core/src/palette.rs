//! Color token palettes
//!
//! Palettes live under the top-level `color` mapping, one mapping per palette
//! name, keyed by numeric scale level:
//!
//! ```toml
//! [color.primary]
//! 50 = "#FCE3F3"
//! 500 = "#D500A9"
//! ```
//!
//! Only presence and format are checked. Token values pass through unchanged.

use crate::error::{Error, Result};
use crate::value::{ConfigValue, Mapping};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Top-level key holding all palettes
pub const COLOR_SECTION: &str = "color";

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// Whether `value` is a canonical `#RRGGBB` hex color
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// One shade of a palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorToken {
    pub level: u16,
    pub hex: String,
}

impl ColorToken {
    /// Validate a raw palette entry.
    ///
    /// The level must be written in canonical decimal form (`500`, not
    /// `0500`, `+500` or ` 500`), so no two keys of one palette share a level.
    pub fn parse(palette: &str, level: &str, value: &ConfigValue) -> Result<Self> {
        let parsed_level = level
            .parse::<u16>()
            .ok()
            .filter(|parsed| parsed.to_string() == level)
            .ok_or_else(|| Error::InvalidScaleLevel {
                palette: palette.to_string(),
                level: level.to_string(),
            })?;

        match value.as_str() {
            Some(hex) if is_hex_color(hex) => Ok(Self {
                level: parsed_level,
                hex: hex.to_string(),
            }),
            other => Err(Error::InvalidColorToken {
                palette: palette.to_string(),
                level: level.to_string(),
                value: other.map(str::to_string).unwrap_or_else(|| value.to_string()),
            }),
        }
    }
}

/// A named scale of color tokens, ordered by numeric level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub name: String,
    tokens: BTreeMap<u16, ColorToken>,
}

impl ColorPalette {
    /// Build a palette from its mapping, validating every entry.
    pub fn from_mapping(name: &str, entries: &Mapping) -> Result<Self> {
        let mut tokens = BTreeMap::new();
        for (level, value) in entries {
            let token = ColorToken::parse(name, level, value)?;
            tokens.insert(token.level, token);
        }
        Ok(Self {
            name: name.to_string(),
            tokens,
        })
    }

    pub fn get(&self, level: u16) -> Option<&ColorToken> {
        self.tokens.get(&level)
    }

    /// Scale levels in ascending numeric order
    pub fn levels(&self) -> impl Iterator<Item = u16> + '_ {
        self.tokens.keys().copied()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &ColorToken> {
        self.tokens.values()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Collect every palette declared under `color`.
///
/// Non-mapping entries under `color` are not palettes and pass through
/// without checks.
pub fn palettes(values: &Mapping) -> Result<BTreeMap<String, ColorPalette>> {
    let mut found = BTreeMap::new();
    let Some(ConfigValue::Mapping(section)) = values.get(COLOR_SECTION) else {
        return Ok(found);
    };

    for (name, entry) in section {
        if let ConfigValue::Mapping(entries) = entry {
            found.insert(name.clone(), ColorPalette::from_mapping(name, entries)?);
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#D500A9", true)]
    #[case("#fce3f3", true)]
    #[case("D500A9", false)]
    #[case("#D500A", false)]
    #[case("#D500A9F", false)]
    #[case("#GGGGGG", false)]
    fn hex_pattern(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(is_hex_color(input), valid);
    }

    #[test]
    fn five_digit_token_names_level() {
        let err = ColorToken::parse("primary", "500", &ConfigValue::from("D500A")).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidColorToken {
                palette: "primary".into(),
                level: "500".into(),
                value: "D500A".into(),
            }
        );
    }

    #[test]
    fn non_string_token_is_rendered_in_error() {
        let err = ColorToken::parse("primary", "50", &ConfigValue::Integer(7)).unwrap_err();
        assert!(matches!(err, Error::InvalidColorToken { ref value, .. } if value == "7"));
    }

    #[test]
    fn levels_are_ordered_numerically() {
        let mut entries = Mapping::new();
        for (level, hex) in [("900", "#1D000F"), ("50", "#FCE3F3"), ("100", "#F6C7E7")] {
            entries.insert(level.into(), hex.into());
        }

        let palette = ColorPalette::from_mapping("primary", &entries).unwrap();
        assert_eq!(palette.levels().collect::<Vec<_>>(), vec![50, 100, 900]);
        assert_eq!(palette.get(100).unwrap().hex, "#F6C7E7");
    }

    #[rstest]
    #[case("0500")]
    #[case("+500")]
    #[case(" 500")]
    #[case("500 ")]
    #[case("70000")]
    fn non_canonical_level_is_rejected(#[case] level: &str) {
        let err = ColorToken::parse("primary", level, &ConfigValue::from("#D500A9")).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidScaleLevel {
                palette: "primary".into(),
                level: level.into(),
            }
        );
    }

    #[test]
    fn aliased_levels_cannot_shadow_each_other() {
        let mut entries = Mapping::new();
        entries.insert("500".into(), "#D500A9".into());
        entries.insert("0500".into(), "#000000".into());

        let err = ColorPalette::from_mapping("primary", &entries).unwrap_err();
        assert!(matches!(err, Error::InvalidScaleLevel { ref level, .. } if level == "0500"));
    }

    #[test]
    fn non_numeric_level_is_rejected() {
        let mut entries = Mapping::new();
        entries.insert("light".into(), "#FFFFFF".into());

        let err = ColorPalette::from_mapping("primary", &entries).unwrap_err();
        assert!(matches!(err, Error::InvalidScaleLevel { ref level, .. } if level == "light"));
    }
}
