pub mod extract;
pub mod text;

use std::path::Path;

use scraper::Html;
use tracing::debug;

use crate::error::ExtractError;
use extract::Extraction;

/// Read one exported page and pull its fields: file → tree → extraction.
/// The file is fully read and closed before parsing starts.
pub fn process_document(path: &Path) -> Result<Extraction, ExtractError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let extraction = process_html(&raw);
    debug!(
        file = %path.display(),
        title = %extraction.title,
        duration = %extraction.duration,
        about = !extraction.about.is_empty(),
        description = !extraction.description.is_empty(),
        instructions = extraction.instructions.len(),
        "Extracted"
    );
    Ok(extraction)
}

pub fn process_html(raw: &str) -> Extraction {
    let html = Html::parse_document(raw);
    extract::extract_all(&html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fixture_from_disk() {
        let e = process_document(Path::new("tests/fixtures/partial_page.html")).unwrap();
        assert_eq!(e.duration, "1 hour");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = process_document(Path::new("tests/fixtures/does_not_exist.html")).unwrap_err();
        assert!(matches!(err, ExtractError::Read { .. }));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.html");
        std::fs::write(&path, b"<h1 class=\"page-title\">Cr\xe8me</h1>").unwrap();
        assert!(process_document(&path).is_err());
    }
}
