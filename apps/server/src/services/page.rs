//! Page shell around the flashcard block.

use std::fmt;

use practice_core::esc_html;

use crate::config::PageSettings;

/// Wrap the rendered flashcard block in the practice page layout.
pub fn render_page(settings: &PageSettings, block: &str) -> String {
    PracticePage { settings, block }.to_string()
}

struct PracticePage<'a> {
    settings: &'a PageSettings,
    block: &'a str,
}

impl fmt::Display for PracticePage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = esc_html(&self.settings.title);
        let container = if self.settings.full_container {
            "container-fluid"
        } else {
            "container"
        };

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(f, "<title>{}</title>", title)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body class=\"page-template-black-belt-practice\">")?;
        writeln!(f, "<header class=\"site-header\"></header>")?;
        writeln!(f, "<div id=\"page-wrap\">")?;
        writeln!(f, "<div class=\"{} page-container\">", container)?;
        writeln!(f, "<div id=\"content\" class=\"site-content\">")?;
        if self.settings.page_header {
            writeln!(f, "<h1 class=\"page-title\">{}</h1>", title)?;
        }
        writeln!(f, "<div class=\"entry-content\">")?;
        if !self.settings.content.is_empty() {
            writeln!(f, "<p>{}</p>", esc_html(&self.settings.content))?;
        }
        writeln!(f, "{}", self.block)?;
        writeln!(f, "</div>\n</div>\n</div>\n</div>")?;
        writeln!(f, "<footer class=\"site-footer\"></footer>")?;
        writeln!(f, "</body>\n</html>")
    }
}
