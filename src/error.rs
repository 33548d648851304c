//! Error types for the nim crate

use thiserror::Error;

/// Main error type for the nim crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("pile {pile} is out of range ({pile_count} piles in play)")]
    PileOutOfRange { pile: usize, pile_count: usize },

    #[error("cannot take {count} objects from pile {pile} holding {available}")]
    InvalidMove {
        pile: usize,
        count: usize,
        available: usize,
    },

    #[error("game mode '{mode}' does not provide {capability}")]
    NotImplemented {
        mode: &'static str,
        capability: &'static str,
    },

    #[error("winner requested before the match is over")]
    MatchNotOver,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid game mode '{input}'. Expected one of: {expected}")]
    ParseMode {
        input: String,
        expected: &'static str,
    },

    #[error("invalid player type '{input}'. Expected one of: {expected}")]
    ParseSource {
        input: String,
        expected: &'static str,
    },

    #[error("invalid search strategy '{input}'. Expected one of: {expected}")]
    ParseStrategy {
        input: String,
        expected: &'static str,
    },

    #[error("invalid pile list '{input}': {reason}")]
    ParsePiles { input: String, reason: String },

    #[error("input stream closed before a move was entered")]
    InputClosed,

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

impl Error {
    /// Wrap an IO error with a description of the failed operation.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    /// True for the move-validation errors a match loop may re-prompt on.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Error::InvalidMove { .. } | Error::PileOutOfRange { .. }
        )
    }
}
