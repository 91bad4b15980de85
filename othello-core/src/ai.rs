//! Alpha-beta AI

use crate::board::Position;
use crate::config::SearchConfig;
use crate::eval::{heuristic, square_weight};
use crate::game::GameState;
use crate::io::{Emission, MoveSink};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io;

// ============================================================================
// ALPHA-BETA AI
// ============================================================================

/// Alpha-Beta AI player
#[derive(Clone, Debug, Default)]
pub struct AlphaBetaAI {
    pub config: SearchConfig,
}

/// Root search summary
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchReport {
    pub chosen: Option<Position>,
    pub score: Option<f32>,
    pub depth: u32,
    /// Every root move with its score, in search order
    pub candidates: Vec<(Position, f32)>,
    /// Moves emitted before the search ran
    pub provisional: Vec<Position>,
}

impl AlphaBetaAI {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Pick a move for the current player.
    ///
    /// Improving high-value squares are emitted as provisional moves before
    /// the search starts, then the search result is emitted as final. Returns
    /// `None` without emitting anything when there is no legal move.
    pub fn choose_move<S: MoveSink>(
        &self,
        state: &GameState,
        sink: &mut S,
    ) -> io::Result<Option<Position>> {
        if state.legal_moves().is_empty() {
            return Ok(None);
        }

        for mv in provisional_moves(state) {
            sink.emit(mv, Emission::Provisional)?;
        }

        let depth = self.config.depth_for(state);
        let scores = self.score_root(state, depth);
        let best = pick_best(state.legal_moves(), &scores);

        if let Some((mv, score)) = best {
            tracing::debug!(
                "Chose ({},{}) score={:.1} depth={} candidates={}",
                mv.row,
                mv.col,
                score,
                depth,
                scores.len()
            );
            sink.emit(mv, Emission::Final)?;
        }

        Ok(best.map(|(mv, _)| mv))
    }

    /// Run the root search and report every candidate
    pub fn analyze(&self, state: &GameState) -> SearchReport {
        let depth = self.config.depth_for(state);
        let scores = self.score_root(state, depth);
        let best = pick_best(state.legal_moves(), &scores);

        SearchReport {
            chosen: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s),
            depth,
            candidates: state.legal_moves().iter().copied().zip(scores).collect(),
            provisional: provisional_moves(state),
        }
    }

    /// Score of each root move, in legal-move order
    fn score_root(&self, state: &GameState, depth: u32) -> Vec<f32> {
        // depth_for keeps this within MAX_DEPTH
        let depth = i32::try_from(depth).unwrap_or(i32::MAX);
        if self.config.parallel_root {
            state
                .legal_moves()
                .par_iter()
                .map(|&mv| root_score(state, mv, depth))
                .collect()
        } else {
            state
                .legal_moves()
                .iter()
                .map(|&mv| root_score(state, mv, depth))
                .collect()
        }
    }
}

// ============================================================================
// ROOT
// ============================================================================

/// Squares whose table weight beats every earlier one (and zero), in order
fn provisional_moves(state: &GameState) -> Vec<Position> {
    let mut best_weight = 0.0;
    let mut moves = Vec::new();
    for &mv in state.legal_moves() {
        let weight = square_weight(mv);
        if weight > best_weight {
            best_weight = weight;
            moves.push(mv);
        }
    }
    moves
}

fn root_score(state: &GameState, mv: Position, depth: i32) -> f32 {
    let child = state.after_move(mv);
    min_value(&child, depth - 1, f32::NEG_INFINITY, f32::INFINITY) + square_weight(mv)
}

/// First strictly greatest score wins
fn pick_best(moves: &[Position], scores: &[f32]) -> Option<(Position, f32)> {
    let mut best: Option<(Position, f32)> = None;
    for (&mv, &score) in moves.iter().zip(scores) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }
    best
}

// ============================================================================
// MINIMAX WITH ALPHA-BETA
// ============================================================================

/// Finished games and positions with nothing to play are scored statically
fn is_leaf(state: &GameState, depth: i32) -> bool {
    depth <= 0 || state.is_terminal() || state.legal_moves().is_empty()
}

/// Maximizing side of the search.
///
/// Each child score is biased by the table weight of the square played.
pub fn max_value(state: &GameState, depth: i32, mut alpha: f32, beta: f32) -> f32 {
    if is_leaf(state, depth) {
        return heuristic(state);
    }

    let mut best = f32::NEG_INFINITY;
    for &mv in state.legal_moves() {
        let child = state.after_move(mv);
        let score = min_value(&child, depth - 1, alpha, beta) + square_weight(mv);

        best = best.max(score);
        alpha = alpha.max(best);
        if beta <= alpha {
            return best;
        }
    }

    best
}

/// Minimizing counterpart of [`max_value`]
pub fn min_value(state: &GameState, depth: i32, alpha: f32, mut beta: f32) -> f32 {
    if is_leaf(state, depth) {
        return heuristic(state);
    }

    let mut worst = f32::INFINITY;
    for &mv in state.legal_moves() {
        let child = state.after_move(mv);
        let score = max_value(&child, depth - 1, alpha, beta) - square_weight(mv);

        worst = worst.min(score);
        beta = beta.min(worst);
        if beta <= alpha {
            return worst;
        }
    }

    worst
}

// ============================================================================
// TESTS
// ============================================================================
