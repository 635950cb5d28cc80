//! Configuration resolution with layered merge
//!
//! The `Resolver` merges an ordered set of fragments into one
//! [`EffectiveConfig`]. Fragments are applied in ascending priority order:
//!
//! - Mappings merge recursively, key by key
//! - Scalars and sequences are replaced wholesale by the higher layer
//! - `null` placeholders never replace a concrete value
//!
//! Resolution is all-or-nothing. Any fatal error aborts the run with no
//! partial result.

use crate::effective::EffectiveConfig;
use crate::error::{Error, Result};
use crate::fragment::ConfigFragment;
use crate::palette;
use crate::path::{self, parse_path};
use crate::value::{ConfigValue, Mapping};
use crate::warning::{ConflictWarning, WarningSink};
use std::collections::BTreeMap;

/// Paths that must hold a non-empty value after the merge
pub const DEFAULT_REQUIRED: &[&str] = &["title", "url", "colorMode.preference", "build.preset"];

/// Resolve fragments with the default required-field set.
pub fn load(fragments: &[ConfigFragment]) -> Result<EffectiveConfig> {
    Resolver::default().load(fragments)
}

/// Merges fragments and validates the result
///
/// Stateless: every call to [`Resolver::load`] is independent, and identical
/// input yields identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    required: Vec<String>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::with_required(DEFAULT_REQUIRED.iter().copied())
    }
}

impl Resolver {
    /// Create a resolver that checks [`DEFAULT_REQUIRED`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with a custom required-field set
    pub fn with_required<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a resolver that only checks placeholders and color tokens
    pub fn without_required() -> Self {
        Self {
            required: Vec::new(),
        }
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Merge `fragments` into one effective configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::NoFragments`] for an empty list
    /// - [`Error::InvalidFragment`] for a key containing `.`, `[` or `]`
    /// - [`Error::ConflictingPriority`] when two fragments share a priority
    /// - [`Error::UnresolvedPlaceholder`] when a `null` survives the merge
    /// - [`Error::MissingRequiredField`] for an absent or empty required path
    /// - [`Error::InvalidColorToken`] / [`Error::InvalidScaleLevel`] for bad palettes
    pub fn load(&self, fragments: &[ConfigFragment]) -> Result<EffectiveConfig> {
        let ordered = order_by_priority(fragments)?;
        for fragment in &ordered {
            fragment.validate()?;
        }

        let mut values = Mapping::new();
        let mut ledger = Ledger::default();
        for fragment in &ordered {
            tracing::debug!(
                fragment = %fragment.name,
                priority = fragment.priority,
                leaves = fragment.leaf_count(),
                "Merging configuration fragment"
            );
            merge_mapping(&mut values, &fragment.tree, "", &fragment.name, &mut ledger);
        }

        if let Some(path) = first_placeholder(&values, "") {
            return Err(Error::UnresolvedPlaceholder { path });
        }
        self.check_required(&values)?;
        palette::palettes(&values)?;

        tracing::debug!(
            leaves = ledger.provenance.len(),
            warnings = ledger.warnings.len(),
            "Configuration resolved"
        );
        Ok(EffectiveConfig::new(values, ledger.provenance, ledger.warnings))
    }

    /// Like [`Resolver::load`], then hand every warning to `sink`.
    ///
    /// Nothing is emitted when resolution fails.
    pub fn load_with_sink(
        &self,
        fragments: &[ConfigFragment],
        sink: &mut dyn WarningSink,
    ) -> Result<EffectiveConfig> {
        let config = self.load(fragments)?;
        for warning in config.warnings() {
            sink.emit(warning);
        }
        Ok(config)
    }

    fn check_required(&self, values: &Mapping) -> Result<()> {
        for required in &self.required {
            match parse_path(required).and_then(|segments| path::get_in(values, &segments)) {
                Some(value) if !value.is_blank() => {}
                _ => return Err(Error::missing(required.as_str())),
            }
        }
        Ok(())
    }
}

/// Sort fragments ascending by priority, rejecting ties.
fn order_by_priority(fragments: &[ConfigFragment]) -> Result<Vec<&ConfigFragment>> {
    if fragments.is_empty() {
        return Err(Error::NoFragments);
    }

    let mut ordered: Vec<&ConfigFragment> = fragments.iter().collect();
    ordered.sort_by_key(|f| f.priority);

    if let Some(pair) = ordered.windows(2).find(|w| w[0].priority == w[1].priority) {
        return Err(Error::ConflictingPriority {
            priority: pair[0].priority,
            first: pair[0].name.clone(),
            second: pair[1].name.clone(),
        });
    }
    Ok(ordered)
}

/// Provenance and warnings accumulated during one merge
#[derive(Debug, Default)]
struct Ledger {
    provenance: BTreeMap<String, String>,
    /// Last fragment to declare each empty mapping; not part of provenance
    hollow: BTreeMap<String, String>,
    warnings: Vec<ConflictWarning>,
}

impl Ledger {
    /// Record `origin` as the owner of every concrete leaf in `value`.
    fn claim(&mut self, path: &str, value: &ConfigValue, origin: &str) {
        match value {
            ConfigValue::Null => {}
            ConfigValue::Mapping(map) if map.is_empty() => {
                self.hollow.insert(path.to_string(), origin.to_string());
            }
            ConfigValue::Mapping(map) => {
                for (key, child) in map {
                    self.claim(&path::join(path, key), child, origin);
                }
            }
            _ => {
                self.provenance.insert(path.to_string(), origin.to_string());
            }
        }
    }

    /// Drop every entry at or under `path`, returning the first previous owner.
    ///
    /// A subtree without leaves (an empty mapping) is owned by the fragment
    /// that last declared it.
    fn release(&mut self, path: &str) -> Option<String> {
        let leaf_owner = drain_within(&mut self.provenance, path);
        let hollow_owner = drain_within(&mut self.hollow, path);
        leaf_owner.or(hollow_owner)
    }
}

/// Remove the entries at or under `path`, returning the first removed value.
fn drain_within(entries: &mut BTreeMap<String, String>, path: &str) -> Option<String> {
    let doomed: Vec<String> = entries
        .range(path.to_string()..)
        .take_while(|(key, _)| key.starts_with(path))
        .filter(|(key, _)| path::is_within(key, path))
        .map(|(key, _)| key.clone())
        .collect();

    let mut first = None;
    for key in doomed {
        let previous = entries.remove(&key);
        if first.is_none() {
            first = previous;
        }
    }
    first
}

fn merge_mapping(base: &mut Mapping, overlay: &Mapping, prefix: &str, origin: &str, ledger: &mut Ledger) {
    for (key, incoming) in overlay {
        let path = path::join(prefix, key);
        match base.get_mut(key) {
            Some(existing) => merge_value(existing, incoming, &path, origin, ledger),
            None => {
                ledger.claim(&path, incoming, origin);
                base.insert(key.clone(), incoming.clone());
            }
        }
    }
}

fn merge_value(
    existing: &mut ConfigValue,
    incoming: &ConfigValue,
    path: &str,
    origin: &str,
    ledger: &mut Ledger,
) {
    if incoming.is_null() {
        return;
    }
    if let (ConfigValue::Mapping(base), ConfigValue::Mapping(overlay)) = (&mut *existing, incoming) {
        merge_mapping(base, overlay, path, origin, ledger);
        if base.is_empty() {
            ledger.hollow.insert(path.to_string(), origin.to_string());
        } else {
            ledger.hollow.remove(path);
        }
        return;
    }
    if existing.is_null() {
        ledger.claim(path, incoming, origin);
        *existing = incoming.clone();
        return;
    }

    let changed = *existing != *incoming;
    let loser = ledger.release(path);
    ledger.claim(path, incoming, origin);
    *existing = incoming.clone();

    if let (true, Some(loser)) = (changed, loser) {
        tracing::debug!(%path, %loser, winner = %origin, "Value overridden");
        ledger.warnings.push(ConflictWarning {
            path: path.to_string(),
            loser,
            winner: origin.to_string(),
        });
    }
}

/// First `null` in traversal order, including inside sequences.
fn first_placeholder(values: &Mapping, prefix: &str) -> Option<String> {
    values
        .iter()
        .find_map(|(key, value)| placeholder_in(value, &path::join(prefix, key)))
}

fn placeholder_in(value: &ConfigValue, path: &str) -> Option<String> {
    match value {
        ConfigValue::Null => Some(path.to_string()),
        ConfigValue::Mapping(map) => first_placeholder(map, path),
        ConfigValue::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| placeholder_in(item, &path::join_index(path, i))),
        _ => None,
    }
}
