//! Error types for the lineup crate

use thiserror::Error;

use crate::board::Player;

/// Main error type for the lineup crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: ({row}, {col}) is outside the {rows}x{cols} board")]
    MoveOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("illegal move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("illegal move: ({row}, {col}) is not adjacent to any cell owned by the {player}")]
    NotAdjacent {
        row: usize,
        col: usize,
        player: Player,
    },

    #[error("out of turn: it is not the {player}'s move")]
    OutOfTurn { player: Player },

    #[error("game already over")]
    GameOver,

    #[error("the {player} has no legal move under the adjacency rule")]
    NoLegalMove { player: Player },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("board row {row_index} has {got} cells, expected {expected}")]
    InvalidRowLength {
        row_index: usize,
        got: usize,
        expected: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCellCharacter { character: char, row: usize, col: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is a recoverable move rejection: the caller keeps
    /// the current position and may submit a different move.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            Error::MoveOutOfBounds { .. }
                | Error::CellOccupied { .. }
                | Error::NotAdjacent { .. }
                | Error::OutOfTurn { .. }
        )
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
