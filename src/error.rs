//! Error types for the uttt crate

use thiserror::Error;

/// Main error type for the uttt crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("board string has the wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid token '{token}' (expected a single character)")]
    InvalidToken { token: String },

    #[error("no sub-board is playable")]
    NoPlayableBoard,

    #[error("sub-board {board} has no empty cell")]
    BoardFull { board: usize },

    #[error("malformed game: {message}")]
    MalformedGame { message: String },

    #[error("player '{name}' is not registered in this game")]
    UnknownPlayer { name: String },

    #[error("game '{id}' does not exist")]
    UnknownGame { id: String },

    #[error("game '{id}' already has two players")]
    GameFull { id: String },

    #[error("secret does not belong to the player on move")]
    NotYourTurn,

    #[error("illegal move: board {board} cell {cell} ({reason})")]
    IllegalMove {
        board: usize,
        cell: usize,
        reason: String,
    },

    #[error("game already over")]
    GameOver,

    #[error("game still in progress after {max_turns} turns")]
    TurnLimitReached { max_turns: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
