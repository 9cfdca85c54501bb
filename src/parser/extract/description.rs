use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use super::find_heading;
use crate::parser::text::{element_text, is_tag, next_elements};

static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)description").unwrap());

/// Paragraph directly after the "Description" heading. Only the immediate
/// sibling element is considered.
pub fn extract(html: &Html) -> String {
    find_heading(html, &DESCRIPTION_RE)
        .and_then(|h| next_elements(h).next())
        .filter(|el| is_tag(*el, "p"))
        .map(element_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_after_heading() {
        let html = Html::parse_document(
            "<h1>Description</h1>\n<p>\n  Learn to bake.\n</p><p>Not this one.</p>",
        );
        assert_eq!(extract(&html), "Learn to bake.");
    }

    #[test]
    fn heading_match_ignores_case() {
        let html = Html::parse_document("<h1>Workshop DESCRIPTION</h1><p>Text</p>");
        assert_eq!(extract(&html), "Text");
    }

    #[test]
    fn non_paragraph_sibling_gives_empty() {
        let html = Html::parse_document(
            "<h1>Description</h1><ul><li>item</li></ul><p>Too far</p>",
        );
        assert_eq!(extract(&html), "");
    }

    #[test]
    fn missing_heading_gives_empty() {
        let html = Html::parse_document("<h2>Description</h2><p>Text</p>");
        assert_eq!(extract(&html), "");
    }
}
