use anyhow::Context;
use tango_config::Config;
use tango_core::WordRecord;
use tango_core::density::{is_sorted_by_id, verify_dense};

pub mod check_duplicates;
pub mod insert;
pub mod remove;
pub mod verify;

/// Load the configured word list
fn load(config: &Config) -> anyhow::Result<Vec<WordRecord>> {
    tango_store::load_words(&config.data_path)
        .with_context(|| format!("Loading word list {}", config.data_path.display()))
}

/// Write the list back, or only report when `dry_run` is set
fn save(config: &Config, records: &[WordRecord], dry_run: bool) -> anyhow::Result<()> {
    if dry_run {
        tracing::info!("Dry run, {} left unchanged", config.data_path.display());
        return Ok(());
    }

    tango_store::save_words(&config.data_path, records)
        .with_context(|| format!("Saving word list {}", config.data_path.display()))?;
    tracing::info!("Saved {}", config.data_path.display());
    Ok(())
}

/// Warn about a source list that is already out of shape
fn warn_if_not_dense(config: &Config, records: &[WordRecord]) {
    if !is_sorted_by_id(records) {
        tracing::warn!("Source list is not sorted by id");
    }
    if let Err(e) = verify_dense(records, config.base_id) {
        tracing::warn!("Source list ids are not dense: {e}");
    }
}
