//! Error types.
//!
//! Only caller bugs and bad configuration are errors. Game-rule violations
//! (occupied cell, round already over, nothing to undo) are ordinary results,
//! see [`crate::engine::MoveOutcome::Rejected`].

use derive_more::{Display, Error, From};

/// Coordinate outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column is not in `0..BOARD_SIZE`.
    #[display("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
}

/// Failure to load a [`crate::config::MatchConfig`].
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    /// The file could not be read.
    #[display("failed to read config file: {_0}")]
    Io(std::io::Error),
    /// The file is not valid TOML for this schema.
    #[display("failed to parse config: {_0}")]
    Parse(toml::de::Error),
    /// Parsed, but a value is out of range.
    #[display("invalid config: {reason}")]
    Invalid { reason: String },
}
