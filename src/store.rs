use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::StoreError;

pub type Record = Map<String, Value>;

/// Ordered record collection plus a name index of positions into it.
///
/// Only field values are ever mutated; the vector's length and order are
/// fixed from load to save.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

pub fn load(path: &Path) -> Result<Store, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let store = from_json(path, &raw)?;
    info!(
        records = store.records.len(),
        names = store.index.len(),
        "Loaded store {}",
        path.display()
    );
    Ok(store)
}

fn from_json(path: &Path, raw: &str) -> Result<Store, StoreError> {
    let value: Value = serde_json::from_str(raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let not_an_array = || StoreError::NotAnArray {
        path: path.to_path_buf(),
    };

    let records = match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                _ => Err(not_an_array()),
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(not_an_array()),
    };

    let mut index = HashMap::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let name = record
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::MissingName {
                path: path.to_path_buf(),
                index: i,
            })?;
        // Last one wins in the index; the collection keeps every entry.
        if let Some(prev) = index.insert(name.to_string(), i) {
            warn!(record = %name, first = prev, later = i, "Duplicate record name");
        }
    }

    Ok(Store {
        path: path.to_path_buf(),
        records,
        index,
    })
}

impl Store {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let i = *self.index.get(name)?;
        self.records.get_mut(i)
    }

    /// Pretty JSON (2-space indent), non-ASCII left as-is.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

/// Overwrite the store file in place. Not atomic.
pub fn save(store: &Store) -> Result<(), StoreError> {
    let json = store.to_json()?;
    fs::write(&store.path, json).map_err(|source| StoreError::Write {
        path: store.path.clone(),
        source,
    })?;
    info!(records = store.records().len(), "Saved store {}", store.path.display());
    Ok(())
}

// ── Tests ──
