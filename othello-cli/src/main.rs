//! Othello CLI - Command-line interface
//!
//! Commands:
//! - decide: Read a position file and write the chosen move
//! - analyze: Print every root candidate's score
//! - show: Render a position

mod analyze_cmd;
mod decide_cmd;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use othello_core::Snapshot;

#[derive(Parser)]
#[command(name = "othello")]
#[command(about = "Othello move decision engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a move for the position in INPUT and write it to OUTPUT
    Decide(decide_cmd::DecideArgs),
    /// Score every legal move of a position
    Analyze(analyze_cmd::AnalyzeArgs),
    /// Render a position
    Show {
        /// Position file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decide(args) => decide_cmd::run(args),
        Commands::Analyze(args) => analyze_cmd::run(args),
        Commands::Show { input } => {
            let snapshot = load_snapshot(&input)?;
            print!("{}", snapshot.to_state());
            Ok(())
        }
    }
}

/// Read and parse a position file
pub(crate) fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read position: {}", path.display()))?;
    Snapshot::parse(&text)
        .with_context(|| format!("Malformed position: {}", path.display()))
}
