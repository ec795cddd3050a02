//! Test fixtures for flashcard decks.

use serde_json::json;

/// Three techniques over two ranks; the last one has no image.
pub const SAMPLE_DECK: &str = r#"[
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

/// Generate a deck with `num_cards` techniques cycling through `ranks`.
pub fn deck(num_cards: usize, ranks: &[&str]) -> String {
    let cards: Vec<_> = (0..num_cards)
        .map(|i| {
            json!({
                "Title": format!("Technique {}", i + 1),
                "Rank": ranks[i % ranks.len()],
                "Style": "Kihon",
                "Description": format!("Description {}.", i + 1),
                "image_url": format!("images/technique-{}.jpg", i + 1),
            })
        })
        .collect();
    serde_json::to_string(&cards).unwrap()
}
