//! Position text format and move output
//!
//! Input layout (whitespace separated):
//! - mover id (1 = black, 2 = white)
//! - 64 cell values (0 empty, 1 black, 2 white), row by row
//! - number of legal moves, then that many `row col` pairs
//!
//! Output is one `row col` line per emitted move.

use crate::board::{Cell, Player, Position, BOARD_SIZE, NUM_SQUARES};
use crate::error::ParseError;
use crate::game::{GameState, Grid};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;

// ============================================================================
// INPUT
// ============================================================================

/// A position as handed over by the judge
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub mover: Player,
    pub grid: Grid,
    pub legal_moves: Vec<Position>,
}

impl Snapshot {
    /// Parse and validate position text
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut tokens = text.split_whitespace();

        let mover_id = next_number(&mut tokens, "player")?;
        let mover = u8::try_from(mover_id)
            .ok()
            .and_then(Player::from_id)
            .ok_or(ParseError::InvalidPlayer(mover_id))?;

        let mut grid = [[Cell::Empty; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let value = next_number(&mut tokens, "board")?;
                *cell = u8::try_from(value)
                    .ok()
                    .and_then(Cell::from_id)
                    .ok_or(ParseError::InvalidCell { row, col, value })?;
            }
        }

        let count = next_number(&mut tokens, "move count")?;
        if count < 0 {
            return Err(ParseError::InvalidMoveCount(count));
        }

        // A count that disagrees with the pairs fails on the reads below
        let mut legal_moves = Vec::with_capacity(count.min(NUM_SQUARES as i64) as usize);
        for _ in 0..count {
            let row = next_number(&mut tokens, "move")?;
            let col = next_number(&mut tokens, "move")?;
            let in_range = |v: i64| (0..BOARD_SIZE as i64).contains(&v);
            if !in_range(row) || !in_range(col) {
                return Err(ParseError::MoveOutOfRange { row, col });
            }
            legal_moves.push(Position::new(row as i8, col as i8));
        }

        if let Some(extra) = tokens.next() {
            return Err(ParseError::TrailingInput(extra.to_string()));
        }

        Ok(Self {
            mover,
            grid,
            legal_moves,
        })
    }

    /// Build the engine state, trusting the supplied moves
    pub fn to_state(&self) -> GameState {
        GameState::new(self.grid, self.mover, self.legal_moves.clone())
    }

    /// Capture a state's position
    pub fn from_state(state: &GameState) -> Self {
        Self {
            mover: state.current_player(),
            grid: *state.grid(),
            legal_moves: state.legal_moves().to_vec(),
        }
    }

    /// Write back in the input layout
    pub fn encode(&self) -> String {
        let mut out = format!("{}\n", self.mover.id());
        for row in &self.grid {
            let cells: Vec<String> = row.iter().map(|c| c.index().to_string()).collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out.push_str(&format!("{}\n", self.legal_moves.len()));
        for p in &self.legal_moves {
            out.push_str(&format!("{} {}\n", p.row, p.col));
        }
        out
    }
}

impl FromStr for Snapshot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn next_number<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<i64, ParseError> {
    let token = tokens.next().ok_or(ParseError::UnexpectedEnd(what))?;
    token.parse().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
        what,
    })
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Kind of move emission
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emission {
    /// Best-so-far guess, superseded by later emissions
    Provisional,
    /// The search result
    Final,
}

/// Receives moves as the root search produces them.
///
/// Implementations must make each move durable before returning; the host
/// may kill the process at any point.
pub trait MoveSink {
    fn emit(&mut self, mv: Position, kind: Emission) -> io::Result<()>;
}

/// Keeps every emission in memory
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub emissions: Vec<(Position, Emission)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MoveSink for RecordingSink {
    fn emit(&mut self, mv: Position, kind: Emission) -> io::Result<()> {
        self.emissions.push((mv, kind));
        Ok(())
    }
}

/// Writes `row col` lines, flushing after each one
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MoveSink for WriterSink<W> {
    fn emit(&mut self, mv: Position, _kind: Emission) -> io::Result<()> {
        writeln!(self.writer, "{} {}", mv.row, mv.col)?;
        self.writer.flush()
    }
}
