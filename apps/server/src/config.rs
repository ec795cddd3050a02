//! Server configuration read from the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, ensure, Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FLASHCARDS_PATH: &str = "json/black-belt-practice.json";
pub const DEFAULT_PAGE_TITLE: &str = "Black Belt Practice";

/// Page layout options, mirroring the theme's checkbox settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub title: String,
    pub content: String,
    /// Full-width container instead of the boxed one.
    pub full_container: bool,
    /// Show the page title block above the content.
    pub page_header: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
            content: String::new(),
            full_container: false,
            page_header: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub flashcards_path: PathBuf,
    /// Prefix for relative image URLs in the deck.
    pub asset_base_uri: Option<String>,
    pub page: PageSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            flashcards_path: PathBuf::from(DEFAULT_FLASHCARDS_PATH),
            asset_base_uri: None,
            page: PageSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |name: &str| {
            lookup(name).and_then(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_owned())
                }
            })
        };

        let host = read("HOST").unwrap_or(defaults.host);

        let port = match read("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("failed to parse PORT `{raw}` as u16"))?,
            None => defaults.port,
        };
        ensure!(port > 0, "PORT must be greater than 0");

        let flashcards_path = read("FLASHCARDS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.flashcards_path);

        let page = PageSettings {
            title: read("PAGE_TITLE").unwrap_or(defaults.page.title),
            content: read("PAGE_CONTENT").unwrap_or(defaults.page.content),
            full_container: parse_checkbox("FULL_CONTAINER", read("FULL_CONTAINER"), false)?,
            page_header: parse_checkbox("PAGE_HEADER", read("PAGE_HEADER"), true)?,
        };

        Ok(Self {
            host,
            port,
            flashcards_path,
            asset_base_uri: read("ASSET_BASE_URI"),
            page,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_checkbox(name: &str, value: Option<String>, default: bool) -> Result<bool> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        other => Err(anyhow!("invalid {name} `{other}`; expected `on` or `off`")),
    }
}
