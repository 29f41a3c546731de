use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::{WordId, WordRecord};

/// Where a record moved during renumbering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    pub old: WordId,
    pub new: WordId,
}

#[derive(Debug, Clone)]
pub struct RemovalOutcome {
    /// Renumbered list, dense from the base id
    pub records: Vec<WordRecord>,
    pub removed: usize,
    /// Requested ids that were not in the list
    pub missing: Vec<WordId>,
    pub relocations: Vec<Relocation>,
}

/// Drop the records with the given ids and renumber the rest from `base`.
pub fn remove_and_renumber(
    records: Vec<WordRecord>,
    remove: &[WordId],
    base: WordId,
) -> Result<RemovalOutcome, CoreError> {
    let to_remove: HashSet<WordId> = remove.iter().copied().collect();
    let present: HashSet<WordId> = records.iter().map(|r| r.id).collect();

    let mut missing: Vec<WordId> = to_remove.difference(&present).copied().collect();
    missing.sort_unstable();

    let before = records.len();
    let mut kept: Vec<WordRecord> = records
        .into_iter()
        .filter(|r| !to_remove.contains(&r.id))
        .collect();
    let removed = before - kept.len();

    kept.sort_by_key(|r| r.id);
    let relocations = renumber(&mut kept, base)?;

    Ok(RemovalOutcome {
        records: kept,
        removed,
        missing,
        relocations,
    })
}

/// Assign `base, base + 1, ...` in list order. Returns every id that changed.
pub fn renumber(records: &mut [WordRecord], base: WordId) -> Result<Vec<Relocation>, CoreError> {
    let mut relocations = Vec::new();

    for (index, record) in records.iter_mut().enumerate() {
        let new = WordId::try_from(index)
            .ok()
            .and_then(|index| base.checked_add(index))
            .ok_or(CoreError::IdOverflow {
                id: base,
                shift: index,
            })?;

        if record.id != new {
            relocations.push(Relocation { old: record.id, new });
            record.id = new;
        }
    }

    Ok(relocations)
}
