//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{LevelCostError, Result};
use crate::session::{ResultSheet, Session};

/// Evaluate formula text once and print or write the results.
pub fn eval(
    text: Option<String>,
    file: Option<PathBuf>,
    base_cost: f64,
    json: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let text = resolve_input(text, file.as_deref())?;

    let mut session = Session::new();
    session.set_base_cost(base_cost);
    session.submit(&text);
    info!(
        "computed {} result(s) at base cost {}",
        session.results().len(),
        base_cost
    );

    let rendered = if json {
        ResultSheet::new(base_cost, session.results().to_vec()).to_json()?
    } else {
        session.render()
    };

    match output {
        Some(path) => write_output(&path, &rendered),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

/// Interactive calculator loop.
///
/// Mirrors the two-input form lifecycle: `base <n>` edits the base cost
/// (taking effect on the next submission), `quit` exits, and any other
/// non-empty line is submitted as formula text.
pub fn interactive(base_cost: f64) -> Result<()> {
    let mut session = Session::new();
    session.set_base_cost(base_cost);

    println!("Levelcost v{}", env!("CARGO_PKG_VERSION"));
    println!("'base <n>' sets the base cost, 'quit' exits, anything else is formula text");
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        if let Some(raw) = trimmed.strip_prefix("base ") {
            match raw.trim().parse::<f64>() {
                Ok(value) => {
                    session.set_base_cost(value);
                    println!("base cost = {}", value);
                }
                Err(_) => println!("not a number: {}", raw.trim()),
            }
        } else if !trimmed.is_empty() {
            session.submit(&line);
            println!("{}", session.render());
        }

        prompt()?;
    }

    Ok(())
}

/// Take the formula text from the first available source: inline argument,
/// file, then stdin.
fn resolve_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        info!("reading formula text from: {}", path.display());
        return fs::read_to_string(path).map_err(|e| LevelCostError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        });
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
    info!("writing output to: {}", path.display());
    fs::write(path, rendered).map_err(|e| LevelCostError::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
