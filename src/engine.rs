//! Turn engine: the match state machine
//!
//! [`TurnEngine`] owns the board, the move ledger and the running tallies of
//! one match. A front end drives it with request/response calls:
//!
//! 1. **Place**: [`TurnEngine::apply_move`] validates, writes the mark, checks
//!    for a win or a full board, and reports a [`MoveOutcome`]
//! 2. **Timeout**: [`TurnEngine::expire_turn`] passes the turn without a stone
//! 3. **Undo**: [`TurnEngine::undo_move`] pops the last move, reopening the
//!    round and rolling back any tally that move produced
//! 4. **Reset**: [`TurnEngine::reset_round`] / [`TurnEngine::reset_match`]
//!
//! A round is either awaiting a move or over. Once over, placements and
//! timeouts are rejected until an undo or a reset.
//!
//! # Example
//!
//! ```
//! use gomoku::{Mark, MoveOutcome, TurnEngine};
//!
//! let mut engine = TurnEngine::new();
//! for col in 0..4 {
//!     engine.apply_move(0, col).unwrap(); // X
//!     engine.apply_move(1, col).unwrap(); // O
//! }
//! match engine.apply_move(0, 4).unwrap() {
//!     MoveOutcome::RoundWon { mark, line, x_wins, .. } => {
//!         assert_eq!(mark, Mark::X);
//!         assert_eq!(line.len(), 5);
//!         assert_eq!(x_wins, 1);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Board, Cell, Mark, Pos, BOARD_SIZE};
use crate::config::MatchConfig;
use crate::error::BoardError;
use crate::eval;
use crate::ledger::{Move, MoveLedger};
use crate::rules::{check_win, WinningLine};

/// Mark that opens every round
pub const FIRST_MARK: Mark = Mark::X;

/// Whether the current round accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingMove,
    RoundOver,
}

/// Why a request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Target cell already holds a mark
    Occupied,
    /// The round has ended; undo or reset first
    RoundOver,
}

/// Result of a placement or timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Round goes on with `next` to play
    Continued { next: Mark },
    /// `mark` won the round but not yet the match
    RoundWon {
        mark: Mark,
        line: WinningLine,
        x_wins: u32,
        o_wins: u32,
    },
    /// `mark` won the round and reached the win threshold
    MatchWon {
        mark: Mark,
        line: WinningLine,
        x_wins: u32,
        o_wins: u32,
    },
    /// Board filled without a line
    Draw { draws: u32 },
    /// Nothing changed
    Rejected(Rejection),
}

impl MoveOutcome {
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }

    /// True for outcomes that closed the round
    #[inline]
    pub fn ends_round(&self) -> bool {
        matches!(
            self,
            MoveOutcome::RoundWon { .. } | MoveOutcome::MatchWon { .. } | MoveOutcome::Draw { .. }
        )
    }
}

/// Running results across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tallies {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tallies {
    #[inline]
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    #[inline]
    fn wins_mut(&mut self, mark: Mark) -> &mut u32 {
        match mark {
            Mark::X => &mut self.x_wins,
            Mark::O => &mut self.o_wins,
        }
    }
}

/// How the current round closed. Always caused by the newest ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Won(Mark),
    Draw,
}

/// Board, ledger and tallies for one match.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    config: MatchConfig,
    board: Board,
    ledger: MoveLedger,
    current: Mark,
    round_end: Option<RoundEnd>,
    /// Highlight set of the last win, if the round ended on one
    winning_line: Option<WinningLine>,
    tallies: Tallies,
}

impl TurnEngine {
    /// Engine with the default configuration (first to 3 round wins).
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    pub fn with_config(config: MatchConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            ledger: MoveLedger::new(),
            current: FIRST_MARK,
            round_end: None,
            winning_line: None,
            tallies: Tallies::default(),
        }
    }

    /// Place the current mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if the coordinate is off the board. Rule
    /// violations are not errors; they come back as
    /// [`MoveOutcome::Rejected`].
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, BoardError> {
        let pos = Pos::try_new(row, col)?;
        Ok(self.play(pos))
    }

    /// [`TurnEngine::apply_move`] for an already validated position.
    pub fn play(&mut self, pos: Pos) -> MoveOutcome {
        if self.round_end.is_some() {
            debug!(%pos, "rejected: round over");
            return MoveOutcome::Rejected(Rejection::RoundOver);
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "rejected: occupied");
            return MoveOutcome::Rejected(Rejection::Occupied);
        }

        let mark = self.current;
        self.board.place(pos, mark);
        self.ledger.record(Move {
            pos,
            mark,
            seq: self.ledger.next_seq(),
        });
        debug!(%pos, %mark, seq = self.ledger.len(), "placed");

        if let Some(line) = check_win(&self.board, pos, mark) {
            return self.close_with_win(mark, line);
        }

        if self.board.is_full() {
            self.tallies.draws += 1;
            self.round_end = Some(RoundEnd::Draw);
            info!(draws = self.tallies.draws, "round drawn");
            return MoveOutcome::Draw {
                draws: self.tallies.draws,
            };
        }

        self.current = mark.opponent();
        MoveOutcome::Continued { next: self.current }
    }

    fn close_with_win(&mut self, mark: Mark, line: WinningLine) -> MoveOutcome {
        *self.tallies.wins_mut(mark) += 1;
        self.round_end = Some(RoundEnd::Won(mark));
        self.winning_line = Some(line.clone());

        let Tallies { x_wins, o_wins, .. } = self.tallies;
        if self.tallies.wins(mark) >= self.config.win_threshold {
            info!(%mark, x_wins, o_wins, "match won");
            MoveOutcome::MatchWon {
                mark,
                line,
                x_wins,
                o_wins,
            }
        } else {
            info!(%mark, x_wins, o_wins, "round won");
            MoveOutcome::RoundWon {
                mark,
                line,
                x_wins,
                o_wins,
            }
        }
    }

    /// The current player ran out of time: pass the turn without a stone.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn expire_turn(&mut self) -> MoveOutcome {
        if self.round_end.is_some() {
            return MoveOutcome::Rejected(Rejection::RoundOver);
        }
        self.current = self.current.opponent();
        debug!(next = %self.current, "turn expired");
        MoveOutcome::Continued { next: self.current }
    }

    /// Take back the most recent move. Returns `false` if there is none.
    ///
    /// The popped move's mark is to play again. If that move had ended the
    /// round, the round reopens and the win or draw it scored is removed
    /// from the tallies.
    #[instrument(skip(self))]
    pub fn undo_move(&mut self) -> bool {
        let Some(mv) = self.ledger.undo_last() else {
            debug!("nothing to undo");
            return false;
        };

        self.board.remove(mv.pos);
        self.current = mv.mark;

        match self.round_end.take() {
            Some(RoundEnd::Won(mark)) => {
                let wins = self.tallies.wins_mut(mark);
                *wins = wins.saturating_sub(1);
                self.winning_line = None;
                info!(%mark, "win rolled back");
            }
            Some(RoundEnd::Draw) => {
                self.tallies.draws = self.tallies.draws.saturating_sub(1);
                info!("draw rolled back");
            }
            None => {}
        }

        debug!(pos = %mv.pos, mark = %mv.mark, "undone");
        true
    }

    /// Clear the board for a new round; tallies carry over, even once the
    /// match is decided. Use [`TurnEngine::reset_match`] to start over.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board.clear();
        self.ledger.clear();
        self.current = FIRST_MARK;
        self.round_end = None;
        self.winning_line = None;
    }

    /// Clear the board and all tallies.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.tallies = Tallies::default();
        self.reset_round();
        info!("match reset");
    }

    /// Hint for the player to move; `None` once the round is over.
    pub fn suggest_move(&self) -> Option<Pos> {
        if self.round_end.is_some() {
            return None;
        }
        eval::suggest_move(&self.board, self.current)
    }

    #[inline]
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        self.board.snapshot()
    }

    #[inline]
    pub fn tallies(&self) -> Tallies {
        self.tallies
    }

    #[inline]
    pub fn is_round_active(&self) -> bool {
        self.round_end.is_none()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.round_end.is_none() {
            Phase::AwaitingMove
        } else {
            Phase::RoundOver
        }
    }

    /// Cells to highlight after a win
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Mark whose round wins reached the threshold, if any
    pub fn match_winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|&mark| self.tallies.wins(mark) >= self.config.win_threshold)
    }

    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}
