use std::path::Path;

/// Record name implied by an export filename such as
/// `"Intro to Baking 3f9a2c.html"`: the stem minus its trailing hash.
/// A stem without a space is taken whole.
pub fn name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    name_from_stem(&stem).to_string()
}

pub fn name_from_stem(stem: &str) -> &str {
    match stem.rsplit_once(' ') {
        Some((head, _hash)) => head,
        None => stem,
    }
}

/// A non-empty page title always beats the filename-derived name.
pub fn resolve(path: &Path, title: &str) -> String {
    if title.is_empty() {
        name_from_path(path)
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_hash() {
        let p = Path::new("workshops/Intro to Baking 3f9a2c.html");
        assert_eq!(resolve(p, ""), "Intro to Baking");
    }

    #[test]
    fn title_overrides_filename() {
        let p = Path::new("workshops/Intro to Baking 3f9a2c.html");
        assert_eq!(resolve(p, "Intro to Baking Basics"), "Intro to Baking Basics");
    }

    #[test]
    fn single_word_stem_is_kept() {
        assert_eq!(resolve(Path::new("Retrospective.html"), ""), "Retrospective");
    }

    #[test]
    fn only_last_space_splits() {
        assert_eq!(name_from_stem("A B C"), "A B");
        assert_eq!(name_from_stem("Trailing "), "Trailing");
        assert_eq!(name_from_stem(" lead"), "");
    }

    #[test]
    fn only_final_extension_is_removed() {
        assert_eq!(name_from_path(Path::new("v1.2 notes abc.html")), "v1.2 notes");
    }
}
