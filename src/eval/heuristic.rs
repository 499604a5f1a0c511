//! Greedy one-ply hint heuristic
//!
//! Every empty cell is tried for the mover and the resulting board is scored
//! by forward run lengths. There is no look-ahead: the opponent's reply is
//! never simulated.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{Board, Cell, Mark, Pos};

/// Forward step for each axis. Each stone only looks one way along an axis,
/// unlike the win check which extends in both directions.
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Suggested cell and the board score it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub pos: Pos,
    pub score: i32,
}

/// Best empty cell for `mark`, or `None` on a full board.
///
/// Ties go to the first cell in row-major order.
pub fn suggest_move(board: &Board, mark: Mark) -> Option<Pos> {
    best_hint(board, mark).map(|hint| hint.pos)
}

/// Like [`suggest_move`], keeping the winning score.
#[instrument(skip(board), fields(stones = board.stone_count()))]
pub fn best_hint(board: &Board, mark: Mark) -> Option<Hint> {
    let mut scratch = *board;
    let mut best: Option<Hint> = None;

    for pos in board.empty_cells() {
        scratch.place(pos, mark);
        let score = score_board(&scratch, mark);
        scratch.remove(pos);

        if best.map_or(true, |b| score > b.score) {
            best = Some(Hint { pos, score });
        }
    }

    if let Some(hint) = best {
        debug!(pos = %hint.pos, score = hint.score, "hint");
    }
    best
}

/// Own forward run total minus the opponent's.
#[must_use]
pub fn score_board(board: &Board, mark: Mark) -> i32 {
    run_total(board, mark) - run_total(board, mark.opponent())
}

/// Sum over `mark`'s stones of the same-mark cells following each stone in
/// every forward direction.
fn run_total(board: &Board, mark: Mark) -> i32 {
    let target = Cell::from(mark);
    let mut total = 0;
    for pos in board.stones(mark).iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            let mut cur = pos;
            while let Some(next) = cur.offset(dr, dc) {
                if board.at(next) != target {
                    break;
                }
                total += 1;
                cur = next;
            }
        }
    }
    total
}
