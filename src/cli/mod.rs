//! CLI Module
//!
//! Command-line interface for the levelcost calculator.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::session::DEFAULT_BASE_COST;

/// Levelcost - exponential upgrade-cost calculator
#[derive(Parser, Debug)]
#[command(name = "levelcost")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate formula text once and print the results
    #[command(name = "eval")]
    Eval {
        /// Formula text; reads stdin if neither this nor --file is given
        text: Option<String>,

        /// Read formula text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Base cost multiplied into every formula
        #[arg(short, long, default_value_t = DEFAULT_BASE_COST)]
        base_cost: f64,

        /// Print the result sheet as JSON instead of plain lines
        #[arg(long)]
        json: bool,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive calculator loop
    #[command(name = "interactive")]
    Interactive {
        /// Starting base cost
        #[arg(short, long, default_value_t = DEFAULT_BASE_COST)]
        base_cost: f64,
    },
}
