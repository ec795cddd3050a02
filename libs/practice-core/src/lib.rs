//! Core library for the black belt practice page.
//!
//! Provides:
//! - JSON decoder for flashcard decks
//! - HTML escaping helpers for text, attributes and URLs
//! - Renderer producing the rank filter buttons and card grid
//! - Shared types (Flashcard, Rank)

pub mod error;
pub mod escape;
pub mod parser;
pub mod render;
pub mod types;

pub use error::{DecodeError, Result};
pub use escape::{esc_attr, esc_html, esc_url};
pub use parser::{decode, decode_slice, distinct_ranks};
pub use render::{
    display_flashcards, render_cards, render_error, render_flashcards, FlashcardBlock,
    DECODE_ERROR_PREFIX,
};
pub use types::{Flashcard, Rank};
