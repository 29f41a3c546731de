//! Whole-file persistence of the word list

use std::io::Write;
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;
use tango_core::WordRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed word list {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize word list: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read the whole list from a JSON array file
pub fn load_words(path: &Path) -> Result<Vec<WordRecord>, StoreError> {
    tracing::debug!("Loading word list from {}", path.display());

    let data = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<WordRecord> =
        serde_json::from_str(&data).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Loaded {} records", records.len());
    Ok(records)
}

/// Replace the file with `records`.
///
/// The list goes to a temporary file next to `path` which is renamed over it
/// on commit, so readers see either the old list or the new one. On error the
/// temporary file is discarded and the original stays as it was.
pub fn save_words(path: &Path, records: &[WordRecord]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(records).map_err(StoreError::Serialize)?;

    commit_atomic(path, |file| file.write_all(json.as_bytes()))?;

    tracing::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Run `write` against a staging file and rename it over `path` only if it
/// succeeds. An uncommitted staging file is discarded on drop.
fn commit_atomic<F>(path: &Path, write: F) -> Result<(), StoreError>
where
    F: FnOnce(&mut AtomicWriteFile) -> std::io::Result<()>,
{
    let write_err = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = AtomicWriteFile::open(path).map_err(write_err)?;
    write(&mut file).map_err(write_err)?;
    file.commit().map_err(write_err)
}
