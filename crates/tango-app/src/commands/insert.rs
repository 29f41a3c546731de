use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tango_config::Config;
use tango_core::reindex::{InsertOutcome, insert_at};
use tango_core::types::{WordId, id_bounds};
use tango_lang_japanese::BatchLoader;

use super::{load, save, warn_if_not_dense};

#[derive(Args, Debug, Default)]
pub struct InsertArgs {
    /// Id the batch starts at, ids from here on move up
    #[arg(long)]
    pub boundary: Option<WordId>,

    /// JSON array of words to insert, the built-in batch when omitted
    #[arg(long)]
    pub batch: Option<PathBuf>,

    /// Report without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn handle_insert(config: &Config, args: &InsertArgs) -> anyhow::Result<InsertOutcome> {
    let existing = load(config)?;
    let boundary = args.boundary.unwrap_or(config.insert.boundary);

    tracing::info!("Existing records: {}", existing.len());
    if let Some((_, last)) = id_bounds(&existing) {
        tracing::info!("Last existing id: {last}");
    }
    warn_if_not_dense(config, &existing);

    let max_id = existing.iter().map(|r| r.id).max();
    if max_id.is_some_and(|max| boundary > max.saturating_add(1)) {
        tracing::warn!("Boundary {boundary} is past the end of the list, ids will have a gap");
    }

    let batch = match args.batch.as_ref().or(config.insert.batch_path.as_ref()) {
        Some(path) => BatchLoader::load_from_file(path)?,
        None => BatchLoader::load_embedded()?,
    };

    let outcome = insert_at(existing, batch, boundary)
        .with_context(|| format!("Inserting batch at id {boundary}"))?;

    tracing::info!("Records before {boundary}: {}", outcome.before_count);
    tracing::info!("Records from {boundary} on: {}", outcome.after_count);
    tracing::info!("New record count: {}", outcome.records.len());
    if let Some((first, last)) = id_bounds(&outcome.records) {
        tracing::info!("New id range: {first}..={last}");
    }

    save(config, &outcome.records, args.dry_run)?;

    match &outcome.inserted {
        Some(range) => {
            tracing::info!("{}-{}: inserted words", range.start(), range.end());
            if outcome.after_count > 0 {
                tracing::info!(
                    "{} on: words that started at {boundary}",
                    range.end().saturating_add(1)
                );
            }
        }
        None => tracing::warn!("Batch was empty, nothing inserted"),
    }

    Ok(outcome)
}
