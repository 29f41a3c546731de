use anyhow::Context;
use tango_config::Config;
use tango_core::density::{is_sorted_by_id, verify_dense};
use tango_core::types::id_bounds;

use super::load;

/// Fails unless the stored list is sorted with dense ids from the base id
pub fn handle_verify(config: &Config) -> anyhow::Result<usize> {
    let records = load(config)?;

    if !is_sorted_by_id(&records) {
        anyhow::bail!("{} is not sorted by id", config.data_path.display());
    }
    verify_dense(&records, config.base_id)
        .with_context(|| format!("Checking ids of {}", config.data_path.display()))?;

    match id_bounds(&records) {
        Some((first, last)) => tracing::info!("{} words, ids {first}..={last}", records.len()),
        None => tracing::info!("Word list is empty"),
    }

    Ok(records.len())
}
