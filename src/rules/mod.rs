//! Game rules for connect-five
//!
//! The only rule with real content is the win check; occupancy and turn
//! order are enforced by [`crate::engine::TurnEngine`].

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, Axis, WinningLine, WIN_LENGTH};
