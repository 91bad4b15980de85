//! Analyze command - show how the search ranks each root move

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use othello_core::{square_weight, AlphaBetaAI, GameState, SearchConfig, SearchReport};

use crate::load_snapshot;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Position file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Fixed search depth instead of the built-in policy
    #[arg(long)]
    pub depth: Option<u32>,

    /// Score root moves in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let state = load_snapshot(&args.input)?.to_state();

    let mut config = SearchConfig::default().with_parallel_root(args.parallel);
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
    }

    tracing::info!("Analyzing {} moves", state.legal_moves().len());
    let report = AlphaBetaAI::new(config).analyze(&state);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&state, &report));
    }

    Ok(())
}

/// Text report: the board followed by one line per candidate
fn format_report(state: &GameState, report: &SearchReport) -> String {
    let mut out = state.to_string();
    out.push_str(&format!("Search depth: {}\n", report.depth));

    if !report.provisional.is_empty() {
        let early: Vec<String> = report
            .provisional
            .iter()
            .map(|p| format!("({},{})", p.row, p.col))
            .collect();
        out.push_str(&format!("Provisional: {}\n", early.join(" -> ")));
    }

    for (mv, score) in &report.candidates {
        let marker = if report.chosen == Some(*mv) { "*" } else { " " };
        out.push_str(&format!(
            "{} ({},{})  score {:>9.1}  table {:>4}\n",
            marker,
            mv.row,
            mv.col,
            score,
            square_weight(*mv)
        ));
    }

    match report.chosen {
        Some(mv) => out.push_str(&format!("Best: ({},{})\n", mv.row, mv.col)),
        None => out.push_str("Best: none\n"),
    }
    out
}
