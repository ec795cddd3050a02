//! Common test utilities and fixtures for integration tests.
//!
//! Each TestContext writes its deck into its own temporary directory,
//! removed together with the context.

pub mod fixtures;

use std::path::PathBuf;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use black_belt_practice_server::config::{Config, PageSettings};
use black_belt_practice_server::{router, AppState};

/// Test context owning a deck file and the router serving it.
pub struct TestContext {
    pub deck_path: PathBuf,
    app: Router,
    _dir: TempDir,
}

impl TestContext {
    /// Create a context serving `deck` with default page settings.
    pub fn new(deck: impl AsRef<[u8]>) -> Self {
        Self::with_config(deck, |_| {})
    }

    /// Create a context serving `deck`, adjusting the config first.
    pub fn with_config(deck: impl AsRef<[u8]>, configure: impl FnOnce(&mut Config)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let deck_path = dir.path().join("black-belt-practice.json");
        std::fs::write(&deck_path, deck).expect("Failed to write test deck");

        let mut config = Config {
            flashcards_path: deck_path.clone(),
            page: PageSettings::default(),
            ..Config::default()
        };
        configure(&mut config);

        let app = router(AppState::new(config));
        Self {
            deck_path,
            app,
            _dir: dir,
        }
    }

    /// Replace the deck file contents.
    pub fn write_deck(&self, deck: impl AsRef<[u8]>) {
        std::fs::write(&self.deck_path, deck).expect("Failed to rewrite test deck");
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
