//! API response types

use serde::{Deserialize, Serialize};

pub use practice_core::{Flashcard, Rank};

/// Response for GET /api/flashcards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardListResponse {
    /// Distinct ranks in order of first appearance.
    pub ranks: Vec<Rank>,
    pub flashcards: Vec<Flashcard>,
}
