use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

const DEFAULT_WORKSHOPS_DIR: &str = "workshops";
const DEFAULT_STORE_PATH: &str = "data/workshops.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory holding the exported `*.html` workshop pages.
    pub workshops_dir: PathBuf,
    /// JSON store that is read at start and overwritten at the end.
    pub store_path: PathBuf,
}

impl Settings {
    /// Working-directory defaults, overridable via `WORKSHOPS_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(Environment::with_prefix("WORKSHOPS"))
    }

    fn from_builder(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("workshops_dir", DEFAULT_WORKSHOPS_DIR)?
            .set_default("store_path", DEFAULT_STORE_PATH)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

// ── Tests ──
