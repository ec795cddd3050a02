//! JSON decoder for flashcard decks.
//!
//! # Format
//! ```json
//! [
//!   {
//!     "Title": "Front Kick",
//!     "Rank": 1,
//!     "Style": "Kihon",
//!     "Description": "Mae geri from fighting stance.",
//!     "image_url": "images/mae-geri.jpg"
//!   }
//! ]
//! ```

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{DecodeError, Result};
use crate::types::{Flashcard, Rank};

/// Decode a JSON deck into flashcards, in input order.
pub fn decode(json: &str) -> Result<Vec<Flashcard>> {
    decode_slice(json.as_bytes())
}

/// Decode a JSON deck from raw bytes. Invalid UTF-8 is a decode error.
pub fn decode_slice(json: &[u8]) -> Result<Vec<Flashcard>> {
    match serde_json::from_slice::<Value>(json)? {
        value @ Value::Array(_) => Ok(serde_json::from_value(value)?),
        _ => Err(DecodeError::NotAnArray),
    }
}

/// Distinct ranks in order of first appearance. Cards without a rank are skipped.
pub fn distinct_ranks(cards: &[Flashcard]) -> Vec<&Rank> {
    let mut seen = HashSet::new();
    cards
        .iter()
        .filter_map(|card| card.rank.as_ref())
        .filter(|&rank| seen.insert(rank.as_str()))
        .collect()
}
