//! Show which fragment supplied each resolved leaf

use colored::Colorize;

use crate::cli::LayerArgs;
use crate::commands::resolve_layers;
use crate::error::Result;

pub fn run_provenance(layers: &LayerArgs, json: bool) -> Result<()> {
    let config = resolve_layers(layers)?;

    if json {
        let output = serde_json::json!({
            "provenance": config.provenance(),
            "warnings": config.warnings(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let width = config
        .provenance()
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0);
    for (path, fragment) in config.provenance() {
        println!("  {:<width$} <- {}", path, fragment.cyan());
    }

    if !config.warnings().is_empty() {
        println!();
        println!("{}", "Overridden values".bold());
        for warning in config.warnings() {
            println!(
                "  {} {} -> {}",
                warning.path,
                warning.loser.dimmed(),
                warning.winner.yellow()
            );
        }
    }
    Ok(())
}
