use std::ops::RangeInclusive;

use crate::error::CoreError;
use crate::preprocess::Preprocessor;
use crate::types::{WordId, WordRecord};

/// A protected record and the records outside the range that duplicate it
#[derive(Debug, Clone)]
pub struct DuplicateMatch<'a> {
    pub record: &'a WordRecord,
    pub duplicates: Vec<&'a WordRecord>,
}

/// Comparison key of one record
struct Key {
    word: String,
    reading: String,
    meaning: String,
}

impl Key {
    fn of(record: &WordRecord, preprocessor: &dyn Preprocessor) -> Self {
        Self {
            word: preprocessor.process(&record.word),
            reading: preprocessor.process(&record.reading),
            meaning: preprocessor.process(&record.meaning),
        }
    }

    fn duplicates(&self, other: &Key) -> bool {
        self.word == other.word || (self.reading == other.reading && self.meaning == other.meaning)
    }
}

/// Find records outside `range` that duplicate a record inside it.
///
/// Two records are duplicates when their words match, or when both reading
/// and meaning match. Only protected records with at least one duplicate
/// are returned.
pub fn find_duplicates<'a>(
    records: &'a [WordRecord],
    range: RangeInclusive<WordId>,
    preprocessor: &dyn Preprocessor,
) -> Result<Vec<DuplicateMatch<'a>>, CoreError> {
    if range.is_empty() {
        return Err(CoreError::EmptyRange {
            from: *range.start(),
            to: *range.end(),
        });
    }

    let (protected, others): (Vec<_>, Vec<_>) = records
        .iter()
        .map(|record| (record, Key::of(record, preprocessor)))
        .partition(|(record, _)| range.contains(&record.id));

    tracing::debug!(
        "Checking {} protected records against {} others",
        protected.len(),
        others.len()
    );

    let matches = protected
        .iter()
        .filter_map(|(record, key)| {
            let duplicates: Vec<&WordRecord> = others
                .iter()
                .filter(|(_, other)| key.duplicates(other))
                .map(|(other, _)| *other)
                .collect();

            (!duplicates.is_empty()).then(|| DuplicateMatch {
                record: *record,
                duplicates,
            })
        })
        .collect();

    Ok(matches)
}

/// Records whose id falls in `range`, in list order
pub fn records_in_range(
    records: &[WordRecord],
    range: RangeInclusive<WordId>,
) -> impl Iterator<Item = &WordRecord> {
    records.iter().filter(move |r| range.contains(&r.id))
}
