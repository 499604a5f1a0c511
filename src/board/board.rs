//! Board storage

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::BoardError;

/// 9x9 grid of cells.
///
/// Pure storage: writes are unconditional, legality belongs to
/// [`crate::engine::TurnEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// X stones bitboard
    x: Bitboard,
    /// O stones bitboard
    o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Get cell by raw coordinates
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Pos::try_new(row, col).map(|pos| self.at(pos))
    }

    /// Write a cell by raw coordinates. `Cell::Empty` erases.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let pos = Pos::try_new(row, col)?;
        match cell.mark() {
            Some(mark) => self.place(pos, mark),
            None => self.remove(pos),
        }
        Ok(())
    }

    /// Get cell at a validated position
    #[inline]
    pub fn at(&self, pos: Pos) -> Cell {
        if self.x.get(pos) {
            Cell::X
        } else if self.o.get(pos) {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Place a mark, replacing whatever was there
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        match mark {
            Mark::X => {
                self.o.clear(pos);
                self.x.set(pos);
            }
            Mark::O => {
                self.x.clear(pos);
                self.o.set(pos);
            }
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.x.clear(pos);
        self.o.clear(pos);
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.x = Bitboard::new();
        self.o = Bitboard::new();
    }

    /// Get bitboard for a mark
    #[inline]
    pub fn stones(&self, mark: Mark) -> &Bitboard {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(|&pos| self.is_empty(pos))
    }

    /// Copy of the grid, indexed `[row][col]`
    pub fn snapshot(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for pos in Pos::all() {
            grid[pos.row()][pos.col()] = self.at(pos);
        }
        grid
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.snapshot() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
