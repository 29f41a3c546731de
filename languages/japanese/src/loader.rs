use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use tango_core::{WordId, WordRecord};

/// Basic verbs (ある … 作る) added to the N5 list
const BASIC_VERBS: &str = include_str!("../data/basic_verbs.json");

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Failed to read batch {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid batch: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A word waiting to be inserted. Its id, if any, is a placeholder.
#[derive(Debug, Deserialize)]
struct BatchEntry {
    #[serde(default)]
    id: Option<WordId>,
    word: String,
    reading: String,
    meaning: String,
    example_jp: String,
    example_kr: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<BatchEntry> for WordRecord {
    fn from(entry: BatchEntry) -> Self {
        WordRecord {
            id: entry.id.unwrap_or_default(),
            word: entry.word,
            reading: entry.reading,
            meaning: entry.meaning,
            example_jp: entry.example_jp,
            example_kr: entry.example_kr,
            extra: entry.extra,
        }
    }
}

pub struct BatchLoader;

impl BatchLoader {
    /// Load the embedded default batch
    pub fn load_embedded() -> Result<Vec<WordRecord>, BatchError> {
        tracing::info!("Loading embedded batch...");
        let batch = Self::from_json(BASIC_VERBS)?;
        tracing::info!("Loaded {} batch entries", batch.len());
        Ok(batch)
    }

    /// Load a batch from a JSON array file
    pub fn load_from_file(path: &Path) -> Result<Vec<WordRecord>, BatchError> {
        tracing::info!("Loading batch from file: {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| BatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let batch = Self::from_json(&json)?;
        tracing::info!("Loaded {} batch entries from file", batch.len());
        Ok(batch)
    }

    pub fn from_json(json: &str) -> Result<Vec<WordRecord>, BatchError> {
        let entries: Vec<BatchEntry> = serde_json::from_str(json)?;
        Ok(entries.into_iter().map(WordRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_batch() {
        let batch = BatchLoader::load_embedded().unwrap();

        assert_eq!(batch.len(), 20);
        assert_eq!(batch[0].word, "ある");
        assert_eq!(batch[3].reading, "くる");
        assert_eq!(batch[19].word, "作る");
        assert!(batch.iter().all(|w| w.id == 0));
        assert!(batch.iter().all(|w| !w.example_jp.is_empty() && !w.example_kr.is_empty()));
    }

    #[test]
    fn test_placeholder_ids_are_accepted() {
        let json = r#"[{
            "id": 0,
            "word": "猫",
            "reading": "ねこ",
            "meaning": "고양이",
            "example_jp": "あそこに猫がいます。",
            "example_kr": "저기에 고양이가 있습니다."
        }]"#;

        let batch = BatchLoader::from_json(json).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].meaning, "고양이");
    }

    #[test]
    fn test_entry_without_id_is_accepted() {
        let json = r#"[{
            "word": "犬",
            "reading": "いぬ",
            "meaning": "개",
            "example_jp": "犬が好きです。",
            "example_kr": "개를 좋아합니다.",
            "level": "N5"
        }]"#;

        let batch = BatchLoader::from_json(json).unwrap();
        assert_eq!(batch[0].id, 0);
        assert_eq!(batch[0].word, "犬");
        assert_eq!(batch[0].extra.get("level"), Some(&Value::from("N5")));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        std::fs::write(&path, BASIC_VERBS).unwrap();

        assert_eq!(BatchLoader::load_from_file(&path).unwrap().len(), 20);

        let err = BatchLoader::load_from_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, BatchError::Read { .. }));
    }

    #[test]
    fn test_not_an_array() {
        let err = BatchLoader::from_json(r#"{ "word": "猫" }"#).unwrap_err();
        assert!(matches!(err, BatchError::Parse(_)));
    }
}
