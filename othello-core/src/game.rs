//! Game state and move generation

use crate::board::{Cell, Player, Position, BOARD_SIZE, DIRECTIONS, NUM_SQUARES};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Raw 8x8 grid, indexed `[row][col]`
pub type Grid = [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameResult {
    fn win_for(player: Player) -> Self {
        match player {
            Player::Black => GameResult::BlackWins,
            Player::White => GameResult::WhiteWins,
        }
    }
}

/// Outcome of [`GameState::apply_move`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Disc placed and flips resolved
    Played,
    /// The square was not legal; the mover lost the game
    Forfeit,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state.
///
/// The cached legal-move list is valid only immediately after construction
/// or [`GameState::apply_move`]. The grid has no other public mutator, so the
/// cache is never checked for staleness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,

    /// Disc count per cell state, indexed by `Cell::index`
    counts: [u8; 3],

    current_player: Player,

    /// Legal squares for `current_player`, row-major
    legal_moves: Vec<Position>,

    result: GameResult,

    /// Game ended because a move was illegal
    forfeited: bool,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a state from an externally supplied position.
    ///
    /// `legal_moves` is trusted and stored as given.
    pub fn new(grid: Grid, current_player: Player, legal_moves: Vec<Position>) -> Self {
        let mut counts = [0u8; 3];
        for row in &grid {
            for cell in row {
                counts[cell.index()] += 1;
            }
        }

        Self {
            grid,
            counts,
            current_player,
            legal_moves,
            result: GameResult::Ongoing,
            forfeited: false,
        }
    }

    /// Create a state from a grid, computing legal moves and resolving
    /// passes and game end for the given mover.
    pub fn from_grid(grid: Grid, current_player: Player) -> Self {
        let mut state = Self::new(grid, current_player, Vec::new());
        state.legal_moves = state.compute_legal_moves();
        state.resolve_pass();
        state
    }

    /// Standard opening position, black to move
    pub fn initial() -> Self {
        let mut grid = [[Cell::Empty; 8]; 8];
        grid[3][3] = Cell::White;
        grid[4][4] = Cell::White;
        grid[3][4] = Cell::Black;
        grid[4][3] = Cell::Black;
        Self::from_grid(grid, Player::Black)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Game result
    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_terminal(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    /// True if the game ended on an illegal move
    pub fn is_forfeit(&self) -> bool {
        self.forfeited
    }

    /// Cached legal moves for the current player
    pub fn legal_moves(&self) -> &[Position] {
        &self.legal_moves
    }

    /// Cell at a square
    pub fn get(&self, pos: Position) -> Cell {
        self.grid[pos.row as usize][pos.col as usize]
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of squares holding `cell`
    pub fn count(&self, cell: Cell) -> u8 {
        self.counts[cell.index()]
    }

    /// Discs owned by a player
    pub fn discs(&self, player: Player) -> u8 {
        self.count(player.cell())
    }

    /// Discs on the board
    pub fn discs_placed(&self) -> u8 {
        NUM_SQUARES as u8 - self.count(Cell::Empty)
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// Check if the current player may place a disc at `pos`
    pub fn is_legal(&self, pos: Position) -> bool {
        if !pos.is_valid() || self.get(pos) != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.flip_run(pos, dir, self.current_player) > 0)
    }

    /// All legal squares for the current player, row-major
    pub fn compute_legal_moves(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_legal(pos)).collect()
    }

    /// Length of the opponent run starting next to `from` along `dir`
    /// that is closed by a `player` disc; 0 if the line does not capture.
    fn flip_run(&self, from: Position, dir: Position, player: Player) -> u8 {
        let mine = player.cell();
        let theirs = player.opponent().cell();

        let mut run = 0;
        let mut p = from + dir;
        while p.is_valid() && self.get(p) == theirs {
            run += 1;
            p = p + dir;
        }

        if run > 0 && p.is_valid() && self.get(p) == mine {
            run
        } else {
            0
        }
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Place a disc for the current player.
    ///
    /// An illegal square ends the game in favor of the opponent.
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        if !self.is_legal(pos) {
            self.result = GameResult::win_for(self.current_player.opponent());
            self.forfeited = true;
            return MoveOutcome::Forfeit;
        }

        let player = self.current_player;
        self.set(pos, player.cell());
        self.flip_discs(pos, player);

        self.current_player = player.opponent();
        self.legal_moves = self.compute_legal_moves();
        self.resolve_pass();

        MoveOutcome::Played
    }

    /// Clone and apply a move
    pub fn after_move(&self, pos: Position) -> Self {
        let mut next = self.clone();
        next.apply_move(pos);
        next
    }

    fn flip_discs(&mut self, center: Position, player: Player) {
        for &dir in &DIRECTIONS {
            let run = self.flip_run(center, dir, player);
            let mut p = center;
            for _ in 0..run {
                p = p + dir;
                self.set(p, player.cell());
            }
        }
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        let old = self.get(pos);
        self.counts[old.index()] -= 1;
        self.counts[cell.index()] += 1;
        self.grid[pos.row as usize][pos.col as usize] = cell;
    }

    /// Hand the turn back if the mover is stuck; end the game if both are
    fn resolve_pass(&mut self) {
        if !self.legal_moves.is_empty() {
            return;
        }

        self.current_player = self.current_player.opponent();
        self.legal_moves = self.compute_legal_moves();

        if self.legal_moves.is_empty() {
            self.result = self.result_by_count();
        }
    }

    fn result_by_count(&self) -> GameResult {
        let black = self.discs(Player::Black);
        let white = self.discs(Player::White);
        if black > white {
            GameResult::BlackWins
        } else if white > black {
            GameResult::WhiteWins
        } else {
            GameResult::Draw
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let empty = self.count(Cell::Empty) as i32;
        writeln!(f, "Timestep #{}", NUM_SQUARES as i32 - 4 - empty + 1)?;
        writeln!(
            f,
            "O: {}; X: {}",
            self.discs(Player::Black),
            self.discs(Player::White)
        )?;

        let winner = match self.result {
            GameResult::BlackWins => Some("O"),
            GameResult::WhiteWins => Some("X"),
            GameResult::Draw => Some("Draw"),
            GameResult::Ongoing => None,
        };
        match winner {
            Some(w) if self.forfeited => {
                writeln!(f, "Winner is {} (Opponent performed invalid move)", w)?
            }
            Some(w) => writeln!(f, "Winner is {}", w)?,
            None => writeln!(f, "{}'s turn", self.current_player.symbol())?,
        }

        writeln!(f, "+---------------+")?;
        for row in 0..BOARD_SIZE {
            let cells: Vec<&str> = (0..BOARD_SIZE)
                .map(|col| {
                    let pos = Position::new(row, col);
                    if self.is_legal(pos) {
                        "."
                    } else {
                        match self.get(pos) {
                            Cell::Black => "O",
                            Cell::White => "X",
                            Cell::Empty => " ",
                        }
                    }
                })
                .collect();
            writeln!(f, "|{}|", cells.join(" "))?;
        }
        writeln!(f, "+---------------+")?;

        let moves: Vec<String> = self
            .legal_moves
            .iter()
            .map(|p| format!("({},{})", p.row, p.col))
            .collect();
        writeln!(f, "{} valid moves: {{{}}}", moves.len(), moves.join(", "))?;
        writeln!(f, "=================")
    }
}

// ============================================================================
// TESTS
// ============================================================================
