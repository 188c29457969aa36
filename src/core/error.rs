//! Errors raised while interpreting face identifiers and move notation.

use thiserror::Error;

/// Errors that can occur when parsing face identifiers or moves.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown face identifier {symbol:?}, expected one of U, L, F, R, B, D")]
    UnknownFace { symbol: String },

    #[error("Invalid move notation {notation:?}, expected a face symbol optionally followed by ' or i")]
    InvalidMove { notation: String },
}
