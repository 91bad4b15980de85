//! Errors raised while reading a position

use thiserror::Error;

/// Malformed position text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEnd(&'static str),

    #[error("invalid number {token:?} while reading {what}")]
    InvalidNumber { token: String, what: &'static str },

    #[error("invalid player id {0} (expected 1 or 2)")]
    InvalidPlayer(i64),

    #[error("invalid cell value {value} at ({row},{col})")]
    InvalidCell { row: usize, col: usize, value: i64 },

    #[error("move ({row},{col}) is off the board")]
    MoveOutOfRange { row: i64, col: i64 },

    #[error("negative move count {0}")]
    InvalidMoveCount(i64),

    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}
