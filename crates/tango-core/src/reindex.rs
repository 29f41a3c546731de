use std::ops::RangeInclusive;

use crate::error::CoreError;
use crate::types::{WordId, WordRecord};

/// Result of splicing a batch into the list
#[derive(Debug, Clone)]
pub struct InsertOutcome {
    /// Final list, sorted by id
    pub records: Vec<WordRecord>,
    /// Records kept as-is (`id < boundary`)
    pub before_count: usize,
    /// Records shifted up (`id >= boundary`)
    pub after_count: usize,
    /// Ids handed to the batch, `None` for an empty batch
    pub inserted: Option<RangeInclusive<WordId>>,
}

impl InsertOutcome {
    pub fn inserted_count(&self) -> usize {
        self.inserted
            .as_ref()
            .map(|r| (*r.end() - *r.start()) as usize + 1)
            .unwrap_or(0)
    }
}

/// Insert `batch` so that it starts at `boundary`.
///
/// Existing records below the boundary are left alone, everything at or above
/// it moves up by the batch size. Batch records are numbered
/// `boundary..boundary + batch.len()` in their given order and the whole list
/// is sorted by id afterwards.
pub fn insert_at(
    existing: Vec<WordRecord>,
    mut batch: Vec<WordRecord>,
    boundary: WordId,
) -> Result<InsertOutcome, CoreError> {
    let shift = batch.len();

    let (before, mut after): (Vec<_>, Vec<_>) =
        existing.into_iter().partition(|record| record.id < boundary);

    tracing::debug!(
        "Split at {boundary}: {} before, {} after",
        before.len(),
        after.len()
    );

    for (offset, record) in batch.iter_mut().enumerate() {
        record.id = offset_id(boundary, offset)?;
    }

    for record in &mut after {
        record.id = offset_id(record.id, shift)?;
    }

    let inserted = match (batch.first(), batch.last()) {
        (Some(first), Some(last)) => Some(first.id..=last.id),
        _ => None,
    };

    let before_count = before.len();
    let after_count = after.len();

    let mut records = before;
    records.reserve(batch.len() + after.len());
    records.extend(batch);
    records.extend(after);
    records.sort_by_key(|record| record.id);

    Ok(InsertOutcome {
        records,
        before_count,
        after_count,
        inserted,
    })
}

fn offset_id(id: WordId, offset: usize) -> Result<WordId, CoreError> {
    WordId::try_from(offset)
        .ok()
        .and_then(|offset| id.checked_add(offset))
        .ok_or(CoreError::IdOverflow { id, shift: offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_list(ids: RangeInclusive<WordId>) -> Vec<WordRecord> {
        ids.map(|id| {
            WordRecord::new(format!("語{id}"), format!("ご{id}"), format!("단어{id}")).with_id(id)
        })
        .collect()
    }

    fn new_batch(len: usize) -> Vec<WordRecord> {
        (0..len)
            .map(|i| WordRecord::new(format!("新{i}"), format!("しん{i}"), format!("새{i}")))
            .collect()
    }

    #[test]
    fn test_insert_scenario_200_plus_20_at_161() {
        let existing = word_list(1..=200);
        let batch = new_batch(20);

        let outcome = insert_at(existing.clone(), batch.clone(), 161).unwrap();
        let records = &outcome.records;

        assert_eq!(records.len(), 220);
        assert_eq!(outcome.before_count, 160);
        assert_eq!(outcome.after_count, 40);
        assert_eq!(outcome.inserted, Some(161..=180));
        assert_eq!(outcome.inserted_count(), 20);

        // 1..=160 untouched
        assert_eq!(&records[..160], &existing[..160]);

        // batch fills 161..=180 in order
        for (i, record) in records[160..180].iter().enumerate() {
            assert_eq!(record.id, 161 + i as WordId);
            assert_eq!(record.word, batch[i].word);
        }

        // former 161..=200 now at 181..=220
        for (old, record) in existing[160..].iter().zip(&records[180..]) {
            assert_eq!(record.id, old.id + 20);
            assert_eq!(record.word, old.word);
            assert_eq!(record.example_kr, old.example_kr);
        }
    }

    #[test]
    fn test_ids_stay_dense() {
        let outcome = insert_at(word_list(1..=50), new_batch(7), 12).unwrap();

        let ids: Vec<WordId> = outcome.records.iter().map(|r| r.id).collect();
        let expected: Vec<WordId> = (1..=57).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_tie_goes_to_after_segment() {
        let outcome = insert_at(word_list(1..=3), new_batch(1), 2).unwrap();

        assert_eq!(outcome.before_count, 1);
        assert_eq!(outcome.after_count, 2);
        assert_eq!(outcome.records[1].word, "新0");
        assert_eq!(outcome.records[2].word, "語2");
        assert_eq!(outcome.records[2].id, 3);
    }

    #[test]
    fn test_insert_at_end() {
        let outcome = insert_at(word_list(1..=5), new_batch(2), 6).unwrap();

        assert_eq!(outcome.after_count, 0);
        assert_eq!(outcome.records.len(), 7);
        assert_eq!(outcome.records[5].word, "新0");
        assert_eq!(outcome.records[6].id, 7);
    }

    #[test]
    fn test_insert_at_start() {
        let outcome = insert_at(word_list(1..=5), new_batch(3), 1).unwrap();

        assert_eq!(outcome.before_count, 0);
        assert_eq!(outcome.records[0].word, "新0");
        assert_eq!(outcome.records[3].word, "語1");
        assert_eq!(outcome.records[3].id, 4);
    }

    #[test]
    fn test_empty_batch_keeps_list() {
        let existing = word_list(1..=5);
        let outcome = insert_at(existing.clone(), Vec::new(), 3).unwrap();

        assert_eq!(outcome.records, existing);
        assert_eq!(outcome.inserted, None);
        assert_eq!(outcome.inserted_count(), 0);
    }

    #[test]
    fn test_unsorted_input_comes_out_sorted() {
        let mut existing = word_list(1..=6);
        existing.reverse();

        let outcome = insert_at(existing, new_batch(2), 4).unwrap();
        let ids: Vec<WordId> = outcome.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_placeholder_ids_in_batch_are_replaced() {
        let batch = vec![
            WordRecord::new("ある", "ある", "있다").with_id(0),
            WordRecord::new("いる", "いる", "있다").with_id(999),
        ];

        let outcome = insert_at(word_list(1..=2), batch, 2).unwrap();
        let words: Vec<(&str, WordId)> = outcome
            .records
            .iter()
            .map(|r| (r.word.as_str(), r.id))
            .collect();

        assert_eq!(words, vec![("語1", 1), ("ある", 2), ("いる", 3), ("語2", 4)]);
    }

    #[test]
    fn test_not_idempotent() {
        let existing = word_list(1..=200);
        let batch = new_batch(20);

        let once = insert_at(existing, batch.clone(), 161).unwrap();
        let twice = insert_at(once.records.clone(), batch, 161).unwrap();

        // Second run inserts the batch again instead of being a no-op
        assert_eq!(once.records.len(), 220);
        assert_eq!(twice.records.len(), 240);
        assert_ne!(once.records, twice.records);
        assert_eq!(twice.records.iter().filter(|r| r.word == "新0").count(), 2);
    }

    #[test]
    fn test_shift_overflow_is_an_error() {
        let existing = vec![WordRecord::new("a", "a", "a").with_id(WordId::MAX)];

        let err = insert_at(existing, new_batch(1), 1).unwrap_err();
        assert!(matches!(err, CoreError::IdOverflow { id, shift: 1 } if id == WordId::MAX));
    }
}
