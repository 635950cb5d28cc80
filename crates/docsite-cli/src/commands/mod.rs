//! Command implementations for docsite-cli

pub mod get;
pub mod provenance;
pub mod resolve;

pub use get::run_get;
pub use provenance::run_provenance;
pub use resolve::run_resolve;

use docsite_core::{EffectiveConfig, Resolver};
use docsite_loader::FragmentStack;

use crate::cli::LayerArgs;
use crate::error::Result;

/// Build the fragment stack described by `layers` and resolve it.
pub(crate) fn resolve_layers(layers: &LayerArgs) -> Result<EffectiveConfig> {
    let mut stack = if layers.no_theme {
        FragmentStack::new()
    } else {
        FragmentStack::with_theme_defaults()
    };
    stack.push_files(&layers.files)?;
    stack.push_assignments(&layers.assignments)?;

    let resolver = if layers.required.is_empty() {
        Resolver::new()
    } else {
        Resolver::with_required(layers.required.iter().cloned())
    };

    tracing::debug!(fragments = stack.len(), "Resolving configuration");
    Ok(stack.resolve(&resolver)?)
}
