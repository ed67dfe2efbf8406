//! Error types for move adjudication, board construction, and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Reason a placement was rejected. The board is left untouched in every case.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates are off the board or on a blocked cell
    #[error("illegal move: point is not on the board")]
    InvalidPosition,

    /// The target cell already holds a stone
    #[error("illegal move: point not empty")]
    CellOccupied,

    /// The placed group would have no liberties and nothing was captured
    #[error("illegal move: suicide")]
    SuicideMove,

    /// The move would recreate the board as it was before the last placement
    #[error("illegal move: retakes ko")]
    KoViolation,

    /// The player already placed their previous stone on this point
    #[error("illegal move: repeats own last move")]
    RepeatsOwnLastMove,
}

/// Problems with a playable-cell mask.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("board mask has no rows or no columns")]
    Empty,

    #[error("board mask row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board mask cell ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("board mask has no playable cell")]
    NoPlayableCell,
}

/// Failure to load a board configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read board config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed board config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid board mask: {0}")]
    Topology(#[from] TopologyError),
}
