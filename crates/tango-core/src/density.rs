use crate::error::CoreError;
use crate::types::{WordId, WordRecord};

/// Check that the ids, sorted, are exactly `base, base + 1, ...` with no gaps
pub fn verify_dense(records: &[WordRecord], base: WordId) -> Result<(), CoreError> {
    let mut ids: Vec<WordId> = records.iter().map(|r| r.id).collect();
    ids.sort_unstable();

    let mut expected = Some(base);
    let mut previous: Option<WordId> = None;

    for id in ids {
        if previous == Some(id) {
            return Err(CoreError::DuplicateId(id));
        }
        match expected {
            Some(expected) if expected == id => {}
            Some(expected) => return Err(CoreError::Gap { expected, found: id }),
            None => return Err(CoreError::IdOverflow { id, shift: 1 }),
        }
        previous = Some(id);
        expected = id.checked_add(1);
    }

    Ok(())
}

/// Whether the list is already in ascending id order
pub fn is_sorted_by_id(records: &[WordRecord]) -> bool {
    records.windows(2).all(|pair| pair[0].id <= pair[1].id)
}
