//! Decide command - the judge-facing entry point
//!
//! Reads a position, streams provisional moves to the output file while
//! searching, and finishes with the chosen move.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use othello_core::{AlphaBetaAI, SearchConfig, WriterSink};

use crate::load_snapshot;

#[derive(Args)]
pub struct DecideArgs {
    /// Position file written by the judge
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File receiving `row col` lines
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Fixed search depth instead of the built-in policy
    #[arg(long)]
    pub depth: Option<u32>,

    /// Score root moves in parallel
    #[arg(long)]
    pub parallel: bool,
}

pub fn run(args: DecideArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.input)?;
    let state = snapshot.to_state();

    tracing::info!(
        "Deciding for {:?} with {} legal moves",
        state.current_player(),
        state.legal_moves().len()
    );

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create output: {}", args.output.display()))?;
    let mut sink = WriterSink::new(BufWriter::new(file));

    let ai = AlphaBetaAI::new(build_config(&args));
    let chosen = ai
        .choose_move(&state, &mut sink)
        .with_context(|| format!("Failed to write move to {}", args.output.display()))?;

    match chosen {
        Some(mv) => {
            tracing::info!("Final move ({},{})", mv.row, mv.col);
            Ok(())
        }
        None => bail!("No legal moves in {}", args.input.display()),
    }
}

fn build_config(args: &DecideArgs) -> SearchConfig {
    let config = SearchConfig::default().with_parallel_root(args.parallel);
    match args.depth {
        Some(depth) => config.with_depth(depth),
        None => config,
    }
}
