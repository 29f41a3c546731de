use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tango_core::WordId;

use self::duplicates::DuplicateConfig;
use self::insert::InsertConfig;

pub mod duplicates;
pub mod insert;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub insert: InsertConfig,
    pub duplicates: DuplicateConfig,

    /// Word list the commands read and rewrite
    pub data_path: PathBuf,
    /// First id of a dense list
    pub base_id: WordId,
    /// Tracing filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl Config {
    pub fn new() -> Self {
        let data_path = env::var("TANGO_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("app/src/main/assets/japanese_words_data.json"));

        let base_id = env::var("TANGO_BASE_ID")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Config {
            insert: InsertConfig::new(),
            duplicates: DuplicateConfig::default(),

            data_path,
            base_id,
            log_filter: "info".to_string(),
        }
    }

    /// Load a JSON config file. Missing fields fall back to [`Config::new`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
