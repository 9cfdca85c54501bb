use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// All descendant text, concatenated and trimmed.
pub fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Descendant text pieces trimmed, joined by single spaces, whitespace runs
/// collapsed. Nested list text ends up inline with its parent item.
pub fn joined_text(el: ElementRef) -> String {
    let joined = el
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&joined)
}

pub fn collapse_whitespace(s: &str) -> String {
    WS_RE.replace_all(s.trim(), " ").into_owned()
}

/// Following sibling elements, skipping text and comment nodes.
pub fn next_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.next_siblings().filter_map(ElementRef::wrap)
}

pub fn is_tag(el: ElementRef, name: &str) -> bool {
    el.value().name() == name
}

// ── Tests ──
