use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type WordId = u32;

/// One vocabulary entry of the word list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Position in the list
    pub id: WordId,
    pub word: String,
    pub reading: String,
    pub meaning: String,
    pub example_jp: String,
    pub example_kr: String,

    /// Keys we don't know about, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordRecord {
    pub fn new(
        word: impl Into<String>,
        reading: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            word: word.into(),
            reading: reading.into(),
            meaning: meaning.into(),
            example_jp: String::new(),
            example_kr: String::new(),
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: WordId) -> Self {
        self.id = id;
        self
    }

    pub fn with_examples(mut self, jp: impl Into<String>, kr: impl Into<String>) -> Self {
        self.example_jp = jp.into();
        self.example_kr = kr.into();
        self
    }
}

/// First and last id of a list sorted by id
pub fn id_bounds(records: &[WordRecord]) -> Option<(WordId, WordId)> {
    match (records.first(), records.last()) {
        (Some(first), Some(last)) => Some((first.id, last.id)),
        _ => None,
    }
}
