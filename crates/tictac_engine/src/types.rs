//! Core domain types for tic-tac-toe.

use super::error::ParseBoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Side length of the grid.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the symbol used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// A `(row, col)` pair naming one cell.
///
/// A move may name a cell off the grid; [`crate::is_legal`] is the place
/// that decides whether it can be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a flat row-major index.
    ///
    /// Returns `None` for indices past the last cell.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELLS {
            Some(Self::new(index / SIZE, index % SIZE))
        } else {
            None
        }
    }

    /// Returns the flat row-major index, or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then(|| self.row * SIZE + self.col)
    }

    /// Returns true if the move names a cell on the grid.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELLS).map(|i| Self::new(i / SIZE, i % SIZE))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Anything that wants to explore
/// hypothetical moves takes its own copy and places/clears marks on it;
/// the caller's board is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Gets the cell addressed by `mv`, or `None` when off the board.
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|index| self.cells[index])
    }

    /// Checks if the cell addressed by `mv` exists and is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.cell(mv) == Some(Cell::Empty)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Returns true when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Iterates over empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(|mv| self.is_empty(*mv))
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Returns the player whose turn it is, assuming X moved first.
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Returns true if the mark counts can arise from alternating play.
    pub fn is_consistent(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }

    /// Writes a mark without any legality check.
    ///
    /// Used for scratch exploration; every `place` must be paired with a
    /// `clear` of the same cell before the scratch board is read again
    /// by the caller that owns it.
    pub(crate) fn place(&mut self, mv: Move, player: Player) {
        if let Some(index) = mv.index() {
            self.cells[index] = Cell::Occupied(player);
        }
    }

    /// Undoes a [`Board::place`].
    pub(crate) fn clear(&mut self, mv: Move) {
        if let Some(index) = mv.index() {
            self.cells[index] = Cell::Empty;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(SIZE).enumerate() {
            if row > 0 {
                f.write_str("/")?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine row-major symbols: `X`, `O`, and `.`, `-` or `_` for
    /// empty. Row separators (`/`, `|`) and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '-' | '_' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::UnknownSymbol(other)),
            };
            cells.push(cell);
        }

        let cells: [Cell; CELLS] = cells
            .try_into()
            .map_err(|rejected: Vec<Cell>| ParseBoardError::WrongLength(rejected.len()))?;
        let board = Self { cells };

        if !board.is_consistent() {
            return Err(ParseBoardError::Inconsistent {
                x: board.count(Player::X),
                o: board.count(Player::O),
            });
        }
        Ok(board)
    }
}

/// Outcome of a board, derived on demand from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Win(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameOutcome {
    /// Returns true for a win or a draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "Player {} wins", player),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Strength of the computer opponent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
    strum::EnumString, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DifficultyTier {
    /// Uniformly random empty cell.
    Easy,
    /// Take an immediate win or block an immediate loss, else random.
    #[default]
    Medium,
    /// Exhaustive game-tree search.
    Hard,
}
