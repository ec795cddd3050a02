//! Flashcard deck loading.
//!
//! The deck file is read on every request so edits show up without a
//! restart.

use std::io::ErrorKind;
use std::path::PathBuf;

use practice_core::{decode_slice, render_cards, render_error, Flashcard};

use crate::error::{ApiError, Result};

pub struct DeckStore {
    path: PathBuf,
    asset_base_uri: Option<String>,
}

impl DeckStore {
    pub fn new(path: PathBuf, asset_base_uri: Option<String>) -> Self {
        Self {
            path,
            asset_base_uri,
        }
    }

    /// Raw bytes of the deck file. Encoding problems are left to the decoder.
    pub async fn load_json(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ApiError::NotFound(self.path.display().to_string()),
                _ => ApiError::Internal(format!("reading {}: {}", self.path.display(), e)),
            })
    }

    /// Decoded deck with image URLs resolved.
    pub async fn load_cards(&self) -> Result<Vec<Flashcard>> {
        let json = self.load_json().await?;
        let mut cards = decode_slice(&json)?;
        resolve_assets(&mut cards, self.asset_base_uri.as_deref());
        Ok(cards)
    }

    /// Render a JSON deck into the flashcard block.
    ///
    /// Invalid input renders as the inline decode error.
    pub fn render(&self, json: &[u8]) -> String {
        match decode_slice(json) {
            Ok(mut cards) => {
                resolve_assets(&mut cards, self.asset_base_uri.as_deref());
                render_cards(&cards)
            }
            Err(err) => {
                tracing::warn!("Invalid flashcard JSON: {}", err);
                render_error(&err)
            }
        }
    }
}

/// Prefix relative image URLs with the asset base.
///
/// Absolute URLs (with a scheme or a leading `/`) are left alone.
pub fn resolve_assets(cards: &mut [Flashcard], base: Option<&str>) {
    let Some(base) = base else {
        return;
    };
    let base = base.trim_end_matches('/');

    for card in cards {
        if let Some(url) = card.image_url.as_mut() {
            if !url.contains("://") && !url.starts_with('/') {
                *url = format!("{}/{}", base, url);
            }
        }
    }
}
