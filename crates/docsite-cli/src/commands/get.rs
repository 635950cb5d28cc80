//! Look up one resolved value

use crate::cli::LayerArgs;
use crate::commands::resolve_layers;
use crate::error::Result;

pub fn run_get(path: &str, layers: &LayerArgs) -> Result<()> {
    let config = resolve_layers(layers)?;
    let value = config.get(path)?;

    println!("{}", serde_json::to_string_pretty(&value.to_json())?);
    Ok(())
}
