//! Levelcost CLI - Exponential Level-Cost Calculator
//!
//! Command-line interface for the levelcost calculator.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use levelcost::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger; --verbose lowers the default filter to debug
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Levelcost v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Levelcost v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Eval {
            text,
            file,
            base_cost,
            json,
            output,
        } => commands::eval(text, file, base_cost, json, output)?,
        Commands::Interactive { base_cost } => commands::interactive(base_cost)?,
    }
    Ok(())
}
