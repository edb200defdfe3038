//! Error types for the tictactoe crate

use thiserror::Error;

use crate::board::Mark;

/// Main error type for the tictactoe crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: ({row}, {col}) is outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },

    #[error("illegal move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("illegal move: it is not {mark}'s turn")]
    OutOfTurn { mark: Mark },

    #[error("no legal moves available: the game is already over")]
    NoLegalMoves,

    #[error("game already over")]
    GameOver,

    #[error("invalid coordinates '{input}' (expected a column A-C and a row 1-3, like A1 or 1A)")]
    ParseCoordinate { input: String },

    #[error("board string must have 9 cells, got {got}")]
    InvalidBoardLength { got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error(
        "invalid piece counts: X={x_count}, O={o_count} (X moves first, so X is equal or one ahead)"
    )]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid board: both players have winning lines")]
    ConflictingWinners,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
