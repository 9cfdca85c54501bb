use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use super::find_heading;
use crate::parser::text::{is_tag, joined_text, next_elements};

static INSTRUCTIONS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Instructions").unwrap());

/// Items of every `ol` following the "Instructions" heading, up to the next
/// `h1`/`h2` sibling.
pub fn extract(html: &Html) -> Vec<String> {
    let Some(heading) = find_heading(html, &INSTRUCTIONS_RE) else {
        return Vec::new();
    };

    let mut steps = Vec::new();
    for el in next_elements(heading) {
        if is_tag(el, "ol") {
            steps.extend(list_items(el));
        } else if is_tag(el, "h1") || is_tag(el, "h2") {
            break;
        }
    }
    steps
}

/// Text of the direct `li` children; empty items are dropped.
fn list_items<'a>(ol: ElementRef<'a>) -> impl Iterator<Item = String> + 'a {
    ol.children()
        .filter_map(ElementRef::wrap)
        .filter(|li| is_tag(*li, "li"))
        .map(joined_text)
        .filter(|t| !t.is_empty())
}
