use serde_json::Value;
use tracing::warn;

use crate::parser::extract::Extraction;
use crate::store::{Record, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Updated,
    Unmatched,
}

/// Copy the non-empty fields of `extraction` onto the record named `name`.
/// Empty fields never erase what the store already holds.
pub fn apply(store: &mut Store, name: &str, extraction: &Extraction) -> MergeOutcome {
    let Some(record) = store.get_mut(name) else {
        warn!("'{}' not found in JSON", name);
        return MergeOutcome::Unmatched;
    };

    println!("  Updating: {}", name);
    set_text(record, "duration", &extraction.duration);
    set_text(record, "about", &extraction.about);
    set_text(record, "description", &extraction.description);
    if !extraction.instructions.is_empty() {
        record.insert(
            "instructions".to_string(),
            Value::from(extraction.instructions.clone()),
        );
    }
    MergeOutcome::Updated
}

fn set_text(record: &mut Record, key: &str, value: &str) {
    if !value.is_empty() {
        record.insert(key.to_string(), Value::String(value.to_string()));
    }
}
