//! Connect-five match engine
//!
//! Game state and decision logic for a two-player, 9x9 five-in-a-row game:
//! - X always opens a round; marks alternate after every ordinary move
//! - Five or more contiguous marks along a row, column or diagonal win the round
//! - A full board with no line is a draw
//! - The first mark to win a configured number of rounds (default 3) takes the match
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection around the last placed cell
//! - [`ledger`]: Move history for undo
//! - [`engine`]: Turn/undo state machine and match tallies
//! - [`eval`]: One-ply greedy hint heuristic
//! - [`clock`]: Per-turn countdown for front ends
//! - [`config`]: TOML-loadable match settings
//!
//! Rendering, input handling and timers live in front ends; they call into
//! [`TurnEngine`] and translate each [`MoveOutcome`] into something visible.
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Mark, MoveOutcome, TurnEngine};
//!
//! let mut engine = TurnEngine::new();
//! assert_eq!(
//!     engine.apply_move(4, 4).unwrap(),
//!     MoveOutcome::Continued { next: Mark::O }
//! );
//!
//! if let Some(pos) = engine.suggest_move() {
//!     engine.play(pos);
//! }
//! assert!(engine.undo_move());
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod ledger;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos, BOARD_SIZE};
pub use clock::TurnClock;
pub use config::MatchConfig;
pub use engine::{MoveOutcome, Phase, Rejection, Tallies, TurnEngine};
pub use error::{BoardError, ConfigError};
pub use eval::{suggest_move, Hint};
pub use ledger::{Move, MoveLedger};
pub use rules::{check_win, Axis, WinningLine};
