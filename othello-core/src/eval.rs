//! Position evaluation

use crate::board::{Position, BOARD_SIZE};
use crate::game::GameState;

/// Strategic value of occupying each square, indexed `[row][col]`.
///
/// Corners are worth the most; the squares diagonally next to a corner
/// hand it to the opponent and are the worst.
pub const POSITION_TABLE: [[i32; BOARD_SIZE as usize]; BOARD_SIZE as usize] = [
    [99, -8, 8, 6, 6, 8, -8, 99],
    [-8, -24, -4, -3, -3, -4, -24, -8],
    [8, -4, 7, 4, 4, 7, -4, 8],
    [6, -3, 4, 0, 0, 4, -3, 6],
    [6, -3, 4, 0, 0, 4, -3, 6],
    [8, -4, 7, 4, 4, 7, -4, 8],
    [-8, -24, -4, -3, -3, -4, -24, -8],
    [99, -8, 8, 6, 6, 8, -8, 99],
];

/// Discs on the board at or below which only material is scored
pub const OPENING_DISC_LIMIT: u8 = 10;

const MATERIAL_WEIGHT: f32 = 2.5;
const SCORE_SCALE: f32 = 5.0;

/// Table weight of a square
pub fn square_weight(pos: Position) -> f32 {
    POSITION_TABLE[pos.row as usize][pos.col as usize] as f32
}

/// Static evaluation from the current player's perspective.
///
/// Mobility comes from the cached legal-move list.
pub fn heuristic(state: &GameState) -> f32 {
    let current = state.current_player();
    let material = state.discs(current) as f32 - state.discs(current.opponent()) as f32;

    if state.discs_placed() <= OPENING_DISC_LIMIT {
        return material;
    }

    let mobility = state.legal_moves().len() as f32;
    SCORE_SCALE * (mobility + MATERIAL_WEIGHT * material)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Player};

    #[test]
    fn test_table_symmetric() {
        for r in 0..8 {
            for c in 0..8 {
                let v = POSITION_TABLE[r][c];
                assert_eq!(v, POSITION_TABLE[7 - r][c]);
                assert_eq!(v, POSITION_TABLE[r][7 - c]);
                assert_eq!(v, POSITION_TABLE[c][r]);
            }
        }
    }

    #[test]
    fn test_corners_best() {
        let corner = square_weight(Position::new(0, 0));
        for pos in Position::all() {
            assert!(square_weight(pos) <= corner);
        }
        assert_eq!(square_weight(Position::new(1, 1)), -24.0);
    }

    #[test]
    fn test_opening_is_material_only() {
        let game = GameState::initial();
        assert_eq!(heuristic(&game), 0.0);

        let next = game.after_move(Position::new(2, 3));
        // White to move: 1 white disc vs 4 black
        assert_eq!(next.current_player(), Player::White);
        assert_eq!(heuristic(&next), -3.0);
    }

    #[test]
    fn test_midgame_blends_mobility() {
        // 11 discs on the board puts us past the opening
        let mut grid = *GameState::initial().grid();
        for col in 0..7 {
            grid[7][col] = Cell::Black;
        }
        let game = GameState::from_grid(grid, Player::Black);
        assert_eq!(game.discs_placed(), 11);

        let material = game.discs(Player::Black) as f32 - game.discs(Player::White) as f32;
        let expected = 5.0 * (game.legal_moves().len() as f32 + 2.5 * material);
        assert_eq!(heuristic(&game), expected);
    }

    #[test]
    fn test_uses_cached_moves() {
        let grid = *GameState::initial().grid();
        let trusted = vec![Position::new(0, 0); 3];
        let mut filled = grid;
        for col in 0..7 {
            filled[7][col] = Cell::White;
        }
        let game = GameState::new(filled, Player::White, trusted);
        // 2 + 7 white vs 2 black, 3 cached moves
        assert_eq!(heuristic(&game), 5.0 * (3.0 + 2.5 * 7.0));
    }
}
