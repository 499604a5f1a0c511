//! Win detection for connect-five
//!
//! A win is five or more contiguous same-mark cells along a row, column,
//! diagonal or anti-diagonal. Detection is local: it only looks at the lines
//! through the cell that was just played, so it must run right after that
//! placement.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{Board, Cell, Mark, Pos, BOARD_SIZE};

/// Run length that wins a round
pub const WIN_LENGTH: usize = 5;

/// Line orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
    /// Constant `row - col`
    Diagonal,
    /// Constant `row + col`
    AntiDiagonal,
}

/// Winning run of cells, ordered along its axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    axis: Axis,
    cells: Vec<Pos>,
}

impl WinningLine {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// Check whether `mark` at `pos` completes a line.
///
/// Axes are tried in the order row, column, diagonal, anti-diagonal and the
/// first hit wins.
pub fn check_win(board: &Board, pos: Pos, mark: Mark) -> Option<WinningLine> {
    let found = scan_row(board, pos.row(), mark)
        .or_else(|| scan_column(board, pos.col(), mark))
        .or_else(|| scan_through(board, pos, mark, Axis::Diagonal, (1, 1)))
        .or_else(|| scan_through(board, pos, mark, Axis::AntiDiagonal, (1, -1)));

    if let Some(line) = &found {
        trace!(%pos, %mark, axis = ?line.axis, len = line.len(), "winning line");
    }
    found
}

/// Walk a full row left to right; the first run to reach five is returned.
fn scan_row(board: &Board, row: usize, mark: Mark) -> Option<WinningLine> {
    first_five(
        (0..BOARD_SIZE).filter_map(|col| Pos::try_new(row, col).ok()),
        board,
        mark,
    )
    .map(|cells| WinningLine {
        axis: Axis::Row,
        cells,
    })
}

/// Walk a full column top to bottom.
fn scan_column(board: &Board, col: usize, mark: Mark) -> Option<WinningLine> {
    first_five(
        (0..BOARD_SIZE).filter_map(|row| Pos::try_new(row, col).ok()),
        board,
        mark,
    )
    .map(|cells| WinningLine {
        axis: Axis::Column,
        cells,
    })
}

fn first_five(
    line: impl Iterator<Item = Pos>,
    board: &Board,
    mark: Mark,
) -> Option<Vec<Pos>> {
    let target = Cell::from(mark);
    let mut run = Vec::with_capacity(WIN_LENGTH);
    for pos in line {
        if board.at(pos) == target {
            run.push(pos);
            if run.len() == WIN_LENGTH {
                return Some(run);
            }
        } else {
            run.clear();
        }
    }
    None
}

/// Extend from `pos` both ways along `(dr, dc)` and keep the whole run.
fn scan_through(
    board: &Board,
    pos: Pos,
    mark: Mark,
    axis: Axis,
    (dr, dc): (i32, i32),
) -> Option<WinningLine> {
    let target = Cell::from(mark);
    let mut cells = vec![pos];

    // Negative direction first, prepending so the line stays ordered
    let mut cur = pos;
    while let Some(prev) = cur.offset(-dr, -dc) {
        if board.at(prev) != target {
            break;
        }
        cells.insert(0, prev);
        cur = prev;
    }

    cur = pos;
    while let Some(next) = cur.offset(dr, dc) {
        if board.at(next) != target {
            break;
        }
        cells.push(next);
        cur = next;
    }

    (cells.len() >= WIN_LENGTH).then_some(WinningLine { axis, cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Pos {
        Pos::try_new(row, col).unwrap()
    }

    fn board_with(mark: Mark, cells: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(r, c) in cells {
            board.place(pos(r, c), mark);
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(Mark::X, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        let line = check_win(&board, pos(0, 4), Mark::X).unwrap();
        assert_eq!(line.axis(), Axis::Row);
        assert_eq!(
            line.cells(),
            &[pos(0, 0), pos(0, 1), pos(0, 2), pos(0, 3), pos(0, 4)]
        );
        assert!(check_win(&board, pos(0, 4), Mark::O).is_none());
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(Mark::O, &[(2, 7), (3, 7), (4, 7), (5, 7), (6, 7)]);
        let line = check_win(&board, pos(2, 7), Mark::O).unwrap();
        assert_eq!(line.axis(), Axis::Column);
        assert_eq!(line.len(), 5);
        assert!(line.contains(pos(6, 7)));
    }

    #[test]
    fn test_row_scan_returns_first_five_of_longer_run() {
        let board = board_with(
            Mark::X,
            &[(4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6), (4, 7)],
        );
        let line = check_win(&board, pos(4, 7), Mark::X).unwrap();
        assert_eq!(
            line.cells(),
            &[pos(4, 1), pos(4, 2), pos(4, 3), pos(4, 4), pos(4, 5)]
        );
    }

    #[test]
    fn test_row_scan_ignores_broken_run() {
        // X X X X _ X X X X
        let board = board_with(
            Mark::X,
            &[(1, 0), (1, 1), (1, 2), (1, 3), (1, 5), (1, 6), (1, 7), (1, 8)],
        );
        assert!(check_win(&board, pos(1, 8), Mark::X).is_none());
    }

    #[test]
    fn test_diagonal_keeps_full_run() {
        let cells: Vec<(usize, usize)> = (0..7).map(|i| (i + 1, i)).collect();
        let board = board_with(Mark::X, &cells);
        let line = check_win(&board, pos(4, 3), Mark::X).unwrap();
        assert_eq!(line.axis(), Axis::Diagonal);
        assert_eq!(line.len(), 7);
        assert_eq!(line.cells()[0], pos(1, 0));
        assert_eq!(line.cells()[6], pos(7, 6));
    }

    #[test]
    fn test_anti_diagonal_five() {
        let cells: Vec<(usize, usize)> = (0..5).map(|i| (4 + i, 8 - i)).collect();
        let board = board_with(Mark::O, &cells);
        let line = check_win(&board, pos(6, 6), Mark::O).unwrap();
        assert_eq!(line.axis(), Axis::AntiDiagonal);
        assert_eq!(
            line.cells(),
            &[pos(4, 8), pos(5, 7), pos(6, 6), pos(7, 5), pos(8, 4)]
        );
    }

    #[test]
    fn test_full_main_diagonal() {
        let cells: Vec<(usize, usize)> = (0..9).map(|i| (i, i)).collect();
        let board = board_with(Mark::X, &cells);
        let line = check_win(&board, pos(8, 8), Mark::X).unwrap();
        assert_eq!(line.len(), 9);
    }

    #[test]
    fn test_four_is_not_a_win() {
        let board = board_with(Mark::X, &[(3, 3), (4, 4), (5, 5), (6, 6)]);
        assert!(check_win(&board, pos(6, 6), Mark::X).is_none());
        let board = board_with(Mark::X, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert!(check_win(&board, pos(0, 3), Mark::X).is_none());
    }

    #[test]
    fn test_row_checked_before_column() {
        // (4,4) completes both a row and a column
        let mut cells: Vec<(usize, usize)> = (0..5).map(|c| (4, c)).collect();
        cells.extend((0..5).map(|r| (r, 4)));
        let board = board_with(Mark::O, &cells);
        let line = check_win(&board, pos(4, 4), Mark::O).unwrap();
        assert_eq!(line.axis(), Axis::Row);
    }

    #[test]
    fn test_detection_is_local_to_played_cell() {
        // A five elsewhere on the board is not seen from an unrelated cell
        let mut board = board_with(Mark::X, &[(8, 0), (8, 1), (8, 2), (8, 3), (8, 4)]);
        board.place(pos(0, 8), Mark::X);
        assert!(check_win(&board, pos(0, 8), Mark::X).is_none());
    }

    #[test]
    fn test_opponent_stones_break_diagonal() {
        let mut board = board_with(Mark::X, &[(0, 0), (1, 1), (3, 3), (4, 4), (5, 5)]);
        board.place(pos(2, 2), Mark::O);
        assert!(check_win(&board, pos(5, 5), Mark::X).is_none());
    }
}
