//! Practice page endpoints

use axum::{body::Bytes, extract::State, response::Html};

use crate::error::Result;
use crate::services::page::render_page;
use crate::AppState;

/// GET /black-belt-practice
/// Full page with the rank filter and card grid
pub async fn page(State(state): State<AppState>) -> Result<Html<String>> {
    let json = state.deck.load_json().await?;
    let block = state.deck.render(&json);
    Ok(Html(render_page(&state.config.page, &block)))
}

/// POST /api/render
/// Renders the posted JSON deck into the flashcard block.
/// Invalid UTF-8 in the body renders the inline error too.
pub async fn render(State(state): State<AppState>, body: Bytes) -> Html<String> {
    Html(state.deck.render(&body))
}
