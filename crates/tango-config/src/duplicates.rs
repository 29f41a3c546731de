use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DuplicateConfig {
    /// NFKC-normalize text before comparing, exact comparison otherwise
    pub normalize: bool,
}
