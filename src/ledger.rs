//! Move history for undo

use serde::{Deserialize, Serialize};

use crate::board::{Mark, Pos};

/// An applied placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub pos: Pos,
    pub mark: Mark,
    /// 1-based position of this move within its round
    pub seq: u32,
}

/// Chronological stack of the current round's moves.
///
/// Its length always equals the number of stones on the live board.
#[derive(Debug, Clone, Default)]
pub struct MoveLedger {
    moves: Vec<Move>,
}

impl MoveLedger {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(crate::board::TOTAL_CELLS),
        }
    }

    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Pop the most recent move
    pub fn undo_last(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Sequence number the next recorded move should carry
    pub fn next_seq(&self) -> u32 {
        self.moves.len() as u32 + 1
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
