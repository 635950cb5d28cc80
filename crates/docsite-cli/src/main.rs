//! docsite CLI
//!
//! Resolves a stack of documentation site configuration fragments and prints
//! the result.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { layers, json } => commands::run_resolve(&layers, json),
        Commands::Get { path, layers } => commands::run_get(&path, &layers),
        Commands::Provenance { layers, json } => commands::run_provenance(&layers, json),
    }
}
