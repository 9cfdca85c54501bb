use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::key;
use crate::merge::{self, MergeOutcome};
use crate::parser;
use crate::settings::Settings;
use crate::store;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub processed: usize,
    pub updated: usize,
    pub unmatched: usize,
    pub failed: usize,
}

impl RunStats {
    pub fn print(&self) {
        println!(
            "{} files: {} updated, {} not found, {} failed.",
            self.processed, self.updated, self.unmatched, self.failed,
        );
    }
}

/// Load the store, fold every workshop page into it, write it back.
pub fn run(settings: &Settings) -> Result<RunStats> {
    let mut store = store::load(&settings.store_path)?;
    let files = list_html(&settings.workshops_dir)?;
    let mut stats = RunStats::default();

    for path in &files {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        println!("Processing: {}", file_name);
        stats.processed += 1;

        let extraction = match parser::process_document(path) {
            Ok(e) => e,
            Err(e) => {
                warn!("Error parsing {}: {}", path.display(), e);
                stats.failed += 1;
                continue;
            }
        };

        let name = key::resolve(path, &extraction.title);
        match merge::apply(&mut store, &name, &extraction) {
            MergeOutcome::Updated => stats.updated += 1,
            MergeOutcome::Unmatched => stats.unmatched += 1,
        }
    }

    store::save(&store)?;
    println!("\nUpdated {}", store.path().display());
    Ok(stats)
}

/// `*.html` entries of `dir`, in directory listing order.
fn list_html(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read workshops directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "html") {
            files.push(path);
        }
    }
    Ok(files)
}

// ── Tests ──
