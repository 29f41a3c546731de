use crate::types::WordId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Shifting id {id} by {shift} overflows")]
    IdOverflow { id: WordId, shift: usize },

    #[error("Duplicate id: {0}")]
    DuplicateId(WordId),

    #[error("Id gap: expected {expected}, found {found}")]
    Gap { expected: WordId, found: WordId },

    #[error("Empty id range: {from}..={to}")]
    EmptyRange { from: WordId, to: WordId },
}
