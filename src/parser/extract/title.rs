use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::text::element_text;

static PAGE_TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1.page-title").unwrap());

pub fn extract(html: &Html) -> String {
    html.select(&PAGE_TITLE)
        .next()
        .map(element_text)
        .unwrap_or_default()
}
