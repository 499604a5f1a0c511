//! Board representation for connect-five

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Board size (9x9)
pub const BOARD_SIZE: usize = 9;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 81

/// Player symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Occupancy of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The mark occupying this cell, if any
    #[inline]
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Position on the board.
///
/// Always in bounds: the only constructors validate or derive from an
/// in-range index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Validate a coordinate pair.
    #[inline]
    pub fn try_new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inverse of [`Pos::to_index`]; `None` past the last cell.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Self> {
        (idx < TOTAL_CELLS).then(|| Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        })
    }

    /// Step by a signed offset, staying on the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let r = i32::from(self.row) + dr;
        let c = i32::from(self.col) + dc;
        if Self::is_valid(r, c) {
            Some(Self {
                row: r as u8,
                col: c as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Every cell in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).filter_map(Pos::from_index)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
