//! Ordered fragment acquisition
//!
//! `FragmentStack` collects fragments in declaration order and hands out
//! priorities by position, so a later-declared layer always wins over an
//! earlier one.

use crate::assignment::{OVERRIDES_FRAGMENT, assignments_to_tree};
use crate::error::{Error, Result};
use crate::format::FragmentFormat;
use docsite_core::{
    ConfigFragment, EffectiveConfig, Mapping, Resolver, TracingSink, theme_defaults,
};
use std::fs;
use std::path::Path;

/// Read one fragment file.
///
/// The fragment is named after the file name without its final extension
/// (`docs/app.config.toml` → `app.config`).
pub fn load_fragment_file(path: &Path, priority: i64) -> Result<ConfigFragment> {
    let format = FragmentFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    tracing::debug!(?path, %format, priority, "Loading configuration fragment");
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let tree = format.parse(&path.display().to_string(), &content)?;

    Ok(ConfigFragment::new(name, priority, tree))
}

/// Fragments in declaration order
#[derive(Debug, Clone, Default)]
pub struct FragmentStack {
    fragments: Vec<ConfigFragment>,
}

impl FragmentStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack whose lowest layer is the theme defaults
    pub fn with_theme_defaults() -> Self {
        Self {
            fragments: vec![theme_defaults(0)],
        }
    }

    fn next_priority(&self) -> i64 {
        self.fragments.len() as i64
    }

    /// Disambiguate repeated names (`site`, `site#2`, ...)
    fn unique_name(&self, name: String) -> String {
        let taken = |candidate: &str| self.fragments.iter().any(|f| f.name == candidate);
        if !taken(&name) {
            return name;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{name}#{n}");
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Add an in-memory tree as the next layer
    pub fn push_tree(&mut self, name: impl Into<String>, tree: Mapping) -> &mut Self {
        let name = self.unique_name(name.into());
        let priority = self.next_priority();
        self.fragments.push(ConfigFragment::new(name, priority, tree));
        self
    }

    /// Add a fragment file as the next layer
    pub fn push_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let mut fragment = load_fragment_file(path.as_ref(), self.next_priority())?;
        fragment.name = self.unique_name(fragment.name);
        self.fragments.push(fragment);
        Ok(self)
    }

    /// Add every file in order
    pub fn push_files<I, P>(&mut self, paths: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.push_file(path)?;
        }
        Ok(self)
    }

    /// Add `path=value` overrides as one layer; no-op when empty
    pub fn push_assignments<I, S>(&mut self, assignments: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tree = assignments_to_tree(assignments)?;
        if !tree.is_empty() {
            self.push_tree(OVERRIDES_FRAGMENT, tree);
        }
        Ok(self)
    }

    pub fn fragments(&self) -> &[ConfigFragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn into_fragments(self) -> Vec<ConfigFragment> {
        self.fragments
    }

    /// Resolve the stack, logging every conflict through `tracing`
    pub fn resolve(&self, resolver: &Resolver) -> Result<EffectiveConfig> {
        Ok(resolver.load_with_sink(&self.fragments, &mut TracingSink)?)
    }
}
