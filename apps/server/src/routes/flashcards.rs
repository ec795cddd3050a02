//! Flashcard deck endpoints

use axum::{extract::State, Json};
use practice_core::distinct_ranks;

use crate::error::Result;
use crate::models::FlashcardListResponse;
use crate::AppState;

/// GET /api/flashcards
pub async fn list(State(state): State<AppState>) -> Result<Json<FlashcardListResponse>> {
    let flashcards = state.deck.load_cards().await?;
    let ranks = distinct_ranks(&flashcards).into_iter().cloned().collect();
    Ok(Json(FlashcardListResponse { ranks, flashcards }))
}
