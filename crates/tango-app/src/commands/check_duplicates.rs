use clap::Args;
use tango_config::Config;
use tango_core::duplicates::{find_duplicates, records_in_range};
use tango_core::preprocess::{DefaultPreprocessor, Preprocessor, VerbatimPreprocessor};
use tango_core::types::WordId;

use super::load;

/// Size of the checked range when only its start is known
const DEFAULT_RANGE_LEN: WordId = 20;

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// First protected id, defaults to the insert boundary
    #[arg(long)]
    pub from: Option<WordId>,

    /// Last protected id (inclusive)
    #[arg(long)]
    pub to: Option<WordId>,
}

/// Owned summary of one duplicated word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateReport {
    pub id: WordId,
    pub word: String,
    pub duplicate_ids: Vec<WordId>,
}

pub fn handle_check_duplicates(
    config: &Config,
    args: &CheckArgs,
) -> anyhow::Result<Vec<DuplicateReport>> {
    let records = load(config)?;

    let from = args.from.unwrap_or(config.insert.boundary);
    let to = args
        .to
        .unwrap_or_else(|| from.saturating_add(DEFAULT_RANGE_LEN - 1));

    let preprocessor: &dyn Preprocessor = if config.duplicates.normalize {
        &DefaultPreprocessor
    } else {
        &VerbatimPreprocessor
    };

    let protected = records_in_range(&records, from..=to).count();
    tracing::info!("Protected words ({from}-{to}): {protected}");
    tracing::info!("Other words: {}", records.len() - protected);

    let matches = find_duplicates(&records, from..=to, preprocessor)?;

    for m in &matches {
        tracing::warn!(
            "Duplicate: ID {} - {} ({}) - {}",
            m.record.id,
            m.record.word,
            m.record.reading,
            m.record.meaning
        );
        for dup in &m.duplicates {
            tracing::warn!(
                "  <-> existing: ID {} - {} ({}) - {}",
                dup.id,
                dup.word,
                dup.reading,
                dup.meaning
            );
        }
    }

    if matches.is_empty() {
        tracing::info!("No duplicates found");
    } else {
        tracing::info!("{} protected words have duplicates", matches.len());
    }

    for record in records_in_range(&records, from..=to) {
        tracing::debug!(
            "{}: {} ({}) - {}",
            record.id,
            record.word,
            record.reading,
            record.meaning
        );
    }

    Ok(matches
        .into_iter()
        .map(|m| DuplicateReport {
            id: m.record.id,
            word: m.record.word.clone(),
            duplicate_ids: m.duplicates.iter().map(|d| d.id).collect(),
        })
        .collect())
}
