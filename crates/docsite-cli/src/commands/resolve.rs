//! Print the effective configuration

use crate::cli::LayerArgs;
use crate::commands::resolve_layers;
use crate::error::Result;

pub fn run_resolve(layers: &LayerArgs, json: bool) -> Result<()> {
    let config = resolve_layers(layers)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config.to_json())?);
    } else {
        print!("{}", toml::to_string_pretty(config.values())?);
    }
    Ok(())
}
