//! Othello Core - Rules engine and AI
//!
//! This crate provides the decision engine for 8x8 Othello:
//! - Board geometry (row/column squares, compass directions)
//! - Game state machine (placement, flipping, passes, game end)
//! - Positional table and static evaluation
//! - Depth-limited alpha-beta search with any-time move emission
//! - Text input/output in the judge's position format

pub mod board;
pub mod game;
pub mod eval;
pub mod ai;
pub mod config;
pub mod error;
pub mod io;

// Re-exports for convenient access
pub use board::{Cell, Player, Position, DIRECTIONS, BOARD_SIZE, NUM_SQUARES};
pub use game::{GameState, GameResult, MoveOutcome, Grid};
pub use eval::{heuristic, square_weight, POSITION_TABLE};
pub use ai::{AlphaBetaAI, SearchReport, max_value, min_value};
pub use config::SearchConfig;
pub use error::ParseError;
pub use io::{Emission, MoveSink, RecordingSink, Snapshot, WriterSink};
