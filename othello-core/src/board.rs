//! Square board geometry with row/column coordinates

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Board side length
pub const BOARD_SIZE: i8 = 8;

/// Number of squares on the board
pub const NUM_SQUARES: usize = 64;

/// A square on the board, `row` and `col` in 0..8
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this square is on the board
    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// All squares in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// Direction vectors (drow, dcol)
/// Index: 0=NW, 1=N, 2=NE, 3=W, 4=E, 5=SW, 6=S, 7=SE
pub const DIRECTIONS: [Position; 8] = [
    Position::new(-1, -1), // NW
    Position::new(-1, 0),  // N
    Position::new(-1, 1),  // NE
    Position::new(0, -1),  // W
    Position::new(0, 1),   // E
    Position::new(1, -1),  // SW
    Position::new(1, 0),   // S
    Position::new(1, 1),   // SE
];

/// Player color. Black moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black = 1,
    White = 2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Disc this player places
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Numeric id used by the position file format
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }

    /// Render symbol: `O` for black, `X` for white
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'O',
            Player::White => 'X',
        }
    }
}

/// Contents of a square
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Cell {
    /// Index into per-cell counters
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Black),
            2 => Some(Cell::White),
            _ => None,
        }
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_validity() {
        assert!(Position::new(0, 0).is_valid());
        assert!(Position::new(7, 7).is_valid());
        assert!(Position::new(3, 4).is_valid());
        assert!(!Position::new(8, 0).is_valid());
        assert!(!Position::new(0, -1).is_valid());
    }

    #[test]
    fn test_position_arithmetic() {
        let p = Position::new(3, 3);
        assert_eq!(p + Position::new(1, -1), Position::new(4, 2));
        assert_eq!(p - Position::new(1, -1), Position::new(2, 4));
        assert_eq!(p + DIRECTIONS[1], Position::new(2, 3));
    }

    #[test]
    fn test_directions_are_distinct_unit_steps() {
        for (i, d) in DIRECTIONS.iter().enumerate() {
            assert!(d.row.abs() <= 1 && d.col.abs() <= 1);
            assert_ne!(*d, Position::new(0, 0));
            assert!(!DIRECTIONS[i + 1..].contains(d));
        }
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), NUM_SQUARES);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(0, 1));
        assert_eq!(all[8], Position::new(1, 0));
        assert_eq!(all[63], Position::new(7, 7));
    }

    #[test]
    fn test_player_ids() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::from_id(2), Some(Player::White));
        assert_eq!(Player::from_id(0), None);
        assert_eq!(Player::White.cell().owner(), Some(Player::White));
        assert_eq!(Cell::from_id(3), None);
    }
}
