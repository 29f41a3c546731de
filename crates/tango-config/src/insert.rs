use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tango_core::WordId;

fn default_boundary() -> WordId {
    161
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsertConfig {
    /// Id the new batch starts at
    pub boundary: WordId,
    /// Batch file to insert, the embedded batch when unset
    pub batch_path: Option<PathBuf>,
}

impl InsertConfig {
    pub fn new() -> Self {
        let boundary = env::var("TANGO_BOUNDARY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_boundary);

        let batch_path = env::var("TANGO_BATCH_PATH").ok().map(PathBuf::from);

        Self {
            boundary,
            batch_path,
        }
    }
}

impl Default for InsertConfig {
    fn default() -> Self {
        Self::new()
    }
}
