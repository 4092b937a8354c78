//! Core domain types for the rules engine.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A board cell: empty or holding one mark.
pub type Cell = Option<Mark>;

/// Three cell indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// 3x3 board stored in row-major order.
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
///
/// Boards are plain values. The engine never changes a board it is handed;
/// accepted moves produce a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Builds a board from its nine cells in row-major order.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` if the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| **c == Some(mark)).count()
    }

    /// Copy of this board with `index` set to `mark`. Caller checks bounds.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[index] = Some(mark);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Cell; CELL_COUNT]> for Board {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        Self::from_cells(cells)
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

/// Status derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Moves remain and nobody has three in a row.
    Playing,
    /// One mark owns a full line.
    Won,
    /// Board is full with no winner.
    Draw,
}

/// Status together with the winner, if any.
///
/// The winner is present exactly when the status is [`GameStatus::Won`];
/// the constructors are the only way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    status: GameStatus,
    winner: Option<Mark>,
}

impl Outcome {
    /// Game still in progress.
    pub fn playing() -> Self {
        Self {
            status: GameStatus::Playing,
            winner: None,
        }
    }

    /// Game won by `mark`.
    pub fn won(mark: Mark) -> Self {
        Self {
            status: GameStatus::Won,
            winner: Some(mark),
        }
    }

    /// Game drawn.
    pub fn draw() -> Self {
        Self {
            status: GameStatus::Draw,
            winner: None,
        }
    }

    /// Returns the status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::Playing
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::playing()
    }
}
