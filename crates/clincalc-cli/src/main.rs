//! Command-line front end for the clinical calculation engine.
//!
//! Loads a lab panel from a JSON file (fields omitted from the file fall
//! back to their physiologic defaults), runs one evaluation pass, and
//! prints either the rendered text report or the assessment as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clincalc_engine::{ClinicalCalcEngine, report};
use clincalc_types::LabPanel;
use tracing::info;

#[derive(Parser)]
#[command(name = "clincalc")]
#[command(about = "ABG, AKI and MELD-Na interpretation tool")]
#[command(version)]
struct Cli {
    /// JSON file holding the lab panel; omit to evaluate the default panel
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("clincalc=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let panel = load_panel(cli.input.as_deref())?;
    info!(format = ?cli.format, "Evaluating lab panel");

    let assessment = ClinicalCalcEngine::new().evaluate(&panel)?;

    match cli.format {
        Format::Text => print!("{}", report::render(&assessment)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&assessment)?),
    }

    Ok(())
}

fn load_panel(input: Option<&std::path::Path>) -> Result<LabPanel> {
    match input {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading lab panel from {}", path.display()))?;
            serde_json::from_str(&raw).context("parsing lab panel JSON")
        }
        None => Ok(LabPanel::default()),
    }
}
