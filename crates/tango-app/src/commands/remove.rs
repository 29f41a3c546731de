use anyhow::Context;
use clap::Args;
use tango_config::Config;
use tango_core::renumber::{RemovalOutcome, remove_and_renumber};
use tango_core::types::{WordId, id_bounds};

use super::{load, save};

#[derive(Args, Debug, Default)]
pub struct RemoveArgs {
    /// Ids to delete, comma separated
    #[arg(long, value_delimiter = ',', required = true, num_args = 1..)]
    pub ids: Vec<WordId>,

    /// Log where words of this range end up (first id)
    #[arg(long, requires = "watch_to")]
    pub watch_from: Option<WordId>,

    /// Last id of the watched range (inclusive)
    #[arg(long, requires = "watch_from")]
    pub watch_to: Option<WordId>,

    /// Report without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn handle_remove(config: &Config, args: &RemoveArgs) -> anyhow::Result<RemovalOutcome> {
    let records = load(config)?;
    let total = records.len();

    tracing::info!("Total words: {total}");
    tracing::info!(
        "Ids to delete: {}",
        args.ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let outcome = remove_and_renumber(records, &args.ids, config.base_id)
        .context("Renumbering word list")?;

    if !outcome.missing.is_empty() {
        tracing::warn!("Ids not in the list: {:?}", outcome.missing);
    }
    tracing::info!(
        "After removal: {} ({} deleted)",
        outcome.records.len(),
        outcome.removed
    );

    let watched = args.watch_from.zip(args.watch_to);
    for relocation in &outcome.relocations {
        match watched {
            Some((from, to)) if (from..=to).contains(&relocation.old) => {
                tracing::info!("Watched word moved: {} -> {}", relocation.old, relocation.new);
            }
            _ => tracing::debug!("Moved: {} -> {}", relocation.old, relocation.new),
        }
    }

    if let Some((first, last)) = id_bounds(&outcome.records) {
        tracing::info!("Renumbered ids: {first}..={last}");
    }

    save(config, &outcome.records, args.dry_run)?;
    tracing::info!("Final word count: {}", outcome.records.len());

    Ok(outcome)
}
