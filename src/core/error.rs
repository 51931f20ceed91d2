//! Crate error type.

use thiserror::Error;

/// Errors raised by the rules engine and the search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The move violates the rules. The message uses 0-indexed
    /// board and cell numbers.
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    /// A search was requested on a position with no legal moves.
    #[error("No legal moves available")]
    NoLegalMoves,
}

impl Error {
    pub(crate) fn invalid_move(detail: impl Into<String>) -> Self {
        Error::InvalidMove(detail.into())
    }
}

/// Convenience Result type for rules and search operations.
pub type Result<T> = std::result::Result<T, Error>;
