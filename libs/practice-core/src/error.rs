//! Error types for practice-core.

use thiserror::Error;

/// Result type alias using DecodeError.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while decoding a flashcard deck.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an array of flashcards")]
    NotAnArray,
}
