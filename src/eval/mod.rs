//! Position evaluation for move hints

pub mod heuristic;

pub use heuristic::{best_hint, score_board, suggest_move, Hint};
