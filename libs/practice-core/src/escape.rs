//! HTML escaping for text, attribute and URL contexts.
//!
//! Text and attribute escaping leave well-formed character references
//! (`&amp;`, `&#8211;`, `&#x2014;`) as they are, so already escaped input is
//! not encoded twice. Named references are recognised by shape, not checked
//! against the HTML entity table.

use std::sync::OnceLock;

use regex::Regex;

/// Schemes that never make it into a `src` attribute.
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "data:", "vbscript:"];

fn char_reference() -> &'static Regex {
    static CHAR_REFERENCE: OnceLock<Regex> = OnceLock::new();
    CHAR_REFERENCE.get_or_init(|| {
        Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").unwrap()
    })
}

/// Escape text for an HTML text node.
pub fn esc_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if c == '&' {
            if let Some(reference) = char_reference().find(rest) {
                out.push_str(reference.as_str());
                rest = &rest[reference.end()..];
                continue;
            }
        }
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Escape text for a quoted attribute value.
pub fn esc_attr(text: &str) -> String {
    esc_html(text)
}

/// Clean a URL for a quoted attribute value.
///
/// Returns an empty string for empty input and for blocked schemes.
pub fn esc_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    let lowered = url.to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        return String::new();
    }

    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            ' ' => out.push_str("%20"),
            '&' => out.push_str("&#038;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
