//! HTML renderer for the practice page flashcard block.
//!
//! The block is a row of rank filter buttons followed by a grid of cards:
//!
//! ```html
//! <div class="rank-buttons">
//!   <button class="action filter__item" data-filter=".1">...</button>
//! </div>
//! <div class="grid">
//!   <article class="grid__item kihon clearfix 1">...</article>
//! </div>
//! ```
//!
//! Output is emitted without whitespace between tags.

use std::fmt;
use std::io;

use crate::error::DecodeError;
use crate::escape::{esc_attr, esc_html, esc_url};
use crate::parser::{decode, distinct_ranks};
use crate::types::Flashcard;

/// Prefix of the inline message shown in place of the block on invalid input.
pub const DECODE_ERROR_PREFIX: &str = "Error decoding JSON: ";

/// Render a JSON deck. Invalid input renders as an inline error message.
pub fn render_flashcards(json: &str) -> String {
    match decode(json) {
        Ok(cards) => render_cards(&cards),
        Err(err) => render_error(&err),
    }
}

/// Inline message shown in place of the block when a deck fails to decode.
pub fn render_error(err: &DecodeError) -> String {
    format!("{}{}", DECODE_ERROR_PREFIX, esc_html(&err.to_string()))
}

/// Write the rendered deck to `out`.
pub fn display_flashcards<W: io::Write>(json: &str, out: &mut W) -> io::Result<()> {
    out.write_all(render_flashcards(json).as_bytes())
}

/// Render already decoded cards.
pub fn render_cards(cards: &[Flashcard]) -> String {
    FlashcardBlock(cards).to_string()
}

/// Rank buttons and card grid for a slice of cards.
pub struct FlashcardBlock<'a>(pub &'a [Flashcard]);

impl fmt::Display for FlashcardBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rank_buttons(f, self.0)?;
        write_grid(f, self.0)
    }
}

fn write_rank_buttons(f: &mut fmt::Formatter<'_>, cards: &[Flashcard]) -> fmt::Result {
    f.write_str(r#"<div class="rank-buttons">"#)?;
    for rank in distinct_ranks(cards) {
        write!(
            f,
            r#"<button class="action filter__item" data-filter=".{}">"#,
            esc_attr(&rank.filter_key())
        )?;
        write!(
            f,
            r#"<span class="action__text">{}</span>"#,
            esc_html(rank.as_str())
        )?;
        f.write_str("</button>")?;
    }
    f.write_str("</div>")
}

fn write_grid(f: &mut fmt::Formatter<'_>, cards: &[Flashcard]) -> fmt::Result {
    f.write_str(r#"<div class="grid">"#)?;
    for card in cards {
        write_card(f, card)?;
    }
    f.write_str("</div>")
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &Flashcard) -> fmt::Result {
    let title = esc_html(&card.title);

    write!(
        f,
        r#"<article class="grid__item {} clearfix {}">"#,
        esc_attr(&card.style_class()),
        esc_attr(&card.rank_class())
    )?;
    f.write_str(r#"<div class="block-inner">"#)?;
    // Always present; a card without an image keeps an empty src.
    write!(
        f,
        r#"<img src="{}" alt="{}" style="max-width: 100%; height: auto;">"#,
        esc_url(card.image_src()),
        esc_attr(&card.title)
    )?;
    f.write_str(r#"<div class="meta">"#)?;
    write!(f, r##"<a href="#" alt="{title}">"##)?;
    write!(f, r#"<h3 class="meta__title">{title}</h3>"#)?;
    f.write_str("</a>")?;
    write!(
        f,
        r#"<p class="meta__description">{}</p>"#,
        esc_html(&card.description)
    )?;
    f.write_str("</div></div></article>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"[
        {
            "Title": "Test Technique 1",
            "Rank": 1,
            "Style": "Kihon",
            "Description": "Description for technique 1.",
            "image_url": "http://example.com/image1.jpg"
        },
        {
            "Title": "Test Technique 2",
            "Rank": 2,
            "Style": "Kata",
            "Description": "Description for technique 2.",
            "image_url": "http://example.com/image2.png"
        },
        {
            "Title": "Test Technique 3 (No Image)",
            "Rank": 1,
            "Style": "Kumite",
            "Description": "Description for technique 3.",
            "image_url": ""
        }
    ]"#;

    #[test]
    fn sample_deck_buttons() {
        let html = render_flashcards(SAMPLE);
        assert_eq!(html.matches("filter__item").count(), 2);
        assert_eq!(html.matches(r#"data-filter=".1""#).count(), 1);
        assert_eq!(html.matches(r#"data-filter=".2""#).count(), 1);
        assert!(html.find(r#"data-filter=".1""#) < html.find(r#"data-filter=".2""#));
    }

    #[test]
    fn sample_deck_cards() {
        let html = render_flashcards(SAMPLE);

        assert!(html.contains(r#"class="grid__item kihon clearfix 1""#));
        assert!(html.contains(r#"<img src="http://example.com/image1.jpg" alt="Test Technique 1""#));
        assert!(html.contains(r#"<h3 class="meta__title">Test Technique 1</h3>"#));
        assert!(html.contains(r#"<p class="meta__description">Description for technique 1.</p>"#));

        assert!(html.contains(r#"class="grid__item kata clearfix 2""#));
        assert!(html.contains(r#"<img src="http://example.com/image2.png" alt="Test Technique 2""#));

        assert!(html.contains(r#"class="grid__item kumite clearfix 1""#));
        assert!(html.contains(
            r#"<img src="" alt="Test Technique 3 (No Image)" style="max-width: 100%; height: auto;">"#
        ));
    }

    #[test]
    fn cards_follow_input_order() {
        let html = render_flashcards(SAMPLE);
        let kihon = html.find("kihon").unwrap();
        let kata = html.find("kata").unwrap();
        let kumite = html.find("kumite").unwrap();
        assert!(kihon < kata && kata < kumite);
        assert_eq!(html.matches("<article").count(), 3);
    }

    #[test]
    fn single_card_exact_markup() {
        let html = render_flashcards(
            r#"[{"Title": "Mae Geri", "Rank": "Brown", "Style": "Kihon", "Description": "Front kick."}]"#,
        );
        assert_eq!(
            html,
            concat!(
                r#"<div class="rank-buttons">"#,
                r#"<button class="action filter__item" data-filter=".brown">"#,
                r#"<span class="action__text">Brown</span>"#,
                "</button>",
                "</div>",
                r#"<div class="grid">"#,
                r#"<article class="grid__item kihon clearfix brown">"#,
                r#"<div class="block-inner">"#,
                r#"<img src="" alt="Mae Geri" style="max-width: 100%; height: auto;">"#,
                r#"<div class="meta">"#,
                r##"<a href="#" alt="Mae Geri">"##,
                r#"<h3 class="meta__title">Mae Geri</h3>"#,
                "</a>",
                r#"<p class="meta__description">Front kick.</p>"#,
                "</div>",
                "</div>",
                "</article>",
                "</div>",
            )
        );
    }

    #[test]
    fn text_fields_are_escaped() {
        let html = render_flashcards(
            r#"[{"Title": "<i>Kick</i>", "Rank": "A&B", "Style": "K", "Description": "\"Fast\" & 'low'"}]"#,
        );
        assert!(html.contains(r#"<h3 class="meta__title">&lt;i&gt;Kick&lt;/i&gt;</h3>"#));
        assert!(html.contains(r#"<span class="action__text">A&amp;B</span>"#));
        assert!(html.contains(r#"data-filter=".a&amp;b""#));
        assert!(html.contains("&quot;Fast&quot; &amp; &#039;low&#039;"));
        assert!(!html.contains("<i>"));
    }

    #[test]
    fn card_without_rank_gets_no_button() {
        let html = render_flashcards(
            r#"[{"Title": "A", "Rank": 1, "Style": "Kihon"}, {"Title": "B", "Style": "Kata"}]"#,
        );
        assert_eq!(html.matches("filter__item").count(), 1);
        assert!(!html.contains(r#"data-filter=".""#));
        assert!(html.contains(r#"class="grid__item kata clearfix ""#));
    }

    #[test]
    fn empty_deck_renders_empty_containers() {
        assert_eq!(
            render_flashcards("[]"),
            r#"<div class="rank-buttons"></div><div class="grid"></div>"#
        );
    }

    #[test]
    fn invalid_json_renders_error_only() {
        let html = render_flashcards("[{not json");
        assert!(html.starts_with(DECODE_ERROR_PREFIX));
        assert!(!html.contains("rank-buttons"));
        assert!(!html.contains("grid__item"));
    }

    #[test]
    fn display_writes_identical_bytes() {
        let mut out = Vec::new();
        display_flashcards(SAMPLE, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render_flashcards(SAMPLE));
    }
}
