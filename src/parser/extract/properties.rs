use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::text::element_text;

static PROPERTY_ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr.property-row").unwrap());
static TH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").unwrap());
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// `(duration, about)` from the properties table. Headers are matched by
/// case-sensitive substring; a later matching row overwrites an earlier one.
pub fn extract(html: &Html) -> (String, String) {
    let mut duration = String::new();
    let mut about = String::new();

    for row in html.select(&PROPERTY_ROW) {
        let (Some(th), Some(td)) = (row.select(&TH).next(), row.select(&TD).next()) else {
            continue;
        };
        let header = element_text(th);
        let value = element_text(td);
        if header.contains("Duration") {
            duration = value;
        } else if header.contains("About") {
            about = value;
        }
    }

    (duration, about)
}
