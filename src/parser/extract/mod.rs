pub mod description;
pub mod instructions;
pub mod properties;
pub mod title;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::text::element_text;

static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());

/// Fields pulled out of one workshop page. Empty means "not found".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub title: String,
    pub duration: String,
    pub about: String,
    pub description: String,
    pub instructions: Vec<String>,
}

pub fn extract_all(html: &Html) -> Extraction {
    let (duration, about) = properties::extract(html);
    Extraction {
        title: title::extract(html),
        duration,
        about,
        description: description::extract(html),
        instructions: instructions::extract(html),
    }
}

/// First `h1` anywhere in the document whose text matches `re`.
fn find_heading<'a>(html: &'a Html, re: &Regex) -> Option<ElementRef<'a>> {
    html.select(&H1).find(|h| re.is_match(&element_text(*h)))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(fixture: &str) -> Html {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", fixture)).unwrap();
        Html::parse_document(&html)
    }

    #[test]
    fn full_page() {
        let e = extract_all(&parse("full_page"));
        assert_eq!(e.title, "Intro to Baking Basics");
        assert_eq!(e.duration, "45 minutes");
        assert_eq!(e.about, "Learn the fundamentals of baking bread.");
        assert_eq!(
            e.description,
            "A hands-on session covering flour, water, salt and yeast."
        );
        assert_eq!(
            e.instructions,
            vec![
                "Weigh the flour.",
                "Mix in water and salt.",
                "Knead for ten minutes. Stretch Fold",
                "Let it rest.",
            ]
        );
    }

    #[test]
    fn bare_page_yields_empty_extraction() {
        let e = extract_all(&parse("bare_page"));
        assert_eq!(e, Extraction::default());
    }

    #[test]
    fn fields_are_independent() {
        let e = extract_all(&parse("partial_page"));
        assert!(e.title.is_empty());
        assert_eq!(e.duration, "1 hour");
        assert!(e.about.is_empty());
        assert!(e.description.is_empty());
        assert_eq!(e.instructions, vec!["Only step"]);
    }
}
