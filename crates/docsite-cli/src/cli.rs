//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve layered documentation site configuration
#[derive(Parser, Debug)]
#[command(name = "docsite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Fragment layers shared by every command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LayerArgs {
    /// Fragment files, lowest priority first (TOML, YAML or JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Override a value, e.g. `--set colorMode.preference=dark`
    #[arg(long = "set", value_name = "PATH=VALUE")]
    pub assignments: Vec<String>,

    /// Do not insert the theme defaults below the first file
    #[arg(long)]
    pub no_theme: bool,

    /// Required paths, replacing the default set
    #[arg(long = "require", value_name = "PATH")]
    pub required: Vec<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the effective configuration
    ///
    /// Examples:
    ///   docsite resolve app.config.toml nuxt.config.yaml
    ///   docsite resolve site.toml --set build.preset=vercel --json
    Resolve {
        #[command(flatten)]
        layers: LayerArgs,

        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Print one resolved value as JSON
    Get {
        /// Dotted path, e.g. `footer.textLinks[0].href`
        path: String,

        #[command(flatten)]
        layers: LayerArgs,
    },

    /// List which fragment supplied every resolved leaf
    Provenance {
        #[command(flatten)]
        layers: LayerArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
