//! Core types for the practice page.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Classification of a technique, used for display and as a filter key.
///
/// Decks carry ranks as strings or numbers; both are kept in their display
/// form so `1` and `"1"` name the same rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Rank(String);

impl Rank {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Rank as given in the deck.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used in `data-filter` selectors and CSS classes.
    pub fn filter_key(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_text(deserializer).map(Self)
    }
}

/// One practice technique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(rename = "Title", default, deserialize_with = "lenient_text")]
    pub title: String,
    /// `None` when the record has no `Rank` key at all.
    #[serde(
        rename = "Rank",
        default,
        deserialize_with = "present_rank",
        skip_serializing_if = "Option::is_none"
    )]
    pub rank: Option<Rank>,
    #[serde(rename = "Style", default, deserialize_with = "lenient_text")]
    pub style: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "optional_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl Flashcard {
    /// Lower-cased style, as used in the card's class list.
    pub fn style_class(&self) -> String {
        self.style.to_ascii_lowercase()
    }

    /// Rank as given, empty when the record has none.
    pub fn rank_str(&self) -> &str {
        self.rank.as_ref().map(Rank::as_str).unwrap_or("")
    }

    /// Lower-cased rank, as used in the card's class list.
    pub fn rank_class(&self) -> String {
        self.rank_str().to_ascii_lowercase()
    }

    /// Image source, empty when the card has no image.
    pub fn image_src(&self) -> &str {
        self.image_url.as_deref().unwrap_or("")
    }
}

/// Accepts strings, numbers, booleans and null the way the page runtime
/// prints them: numbers in canonical form, `true` as `1`, `false`/null as "".
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(number_text(&n)),
        Value::Bool(true) => Ok("1".to_string()),
        Value::Bool(false) | Value::Null => Ok(String::new()),
        other => Err(de::Error::invalid_type(
            unexpected(&other),
            &"a string or number",
        )),
    }
}

/// A present `Rank` key, even `null`, is a rank; only a missing key is `None`.
fn present_rank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Rank>, D::Error> {
    Rank::deserialize(deserializer).map(Some)
}

fn optional_url<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let url = lenient_text(deserializer)?;
    Ok(if url.is_empty() { None } else { Some(url) })
}

fn number_text(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            // Whole floats print without a fractional part.
            if f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Array(_) => de::Unexpected::Seq,
        _ => de::Unexpected::Map,
    }
}
