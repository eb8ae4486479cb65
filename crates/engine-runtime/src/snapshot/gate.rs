use crate::error::SyncError;
use std::{fs, io, path::Path};

/// Freshly encoded snapshot content plus the change decision.
#[derive(Debug, Clone)]
pub struct SnapshotDelta {
    pub json: String,
    pub csv: String,
    pub changed: bool,
}

/// Compares the new encodings byte-for-byte against what is currently on
/// disk. Comparison is exact, not semantic: whitespace or key-order drift
/// counts as a change. A missing prior artifact always counts as a change.
/// Performs no writes.
pub fn evaluate(
    json: String,
    csv: String,
    json_path: &Path,
    csv_path: &Path,
) -> Result<SnapshotDelta, SyncError> {
    let prior_json = read_prior(json_path)?;
    let prior_csv = read_prior(csv_path)?;

    let changed = prior_json.as_deref() != Some(json.as_bytes())
        || prior_csv.as_deref() != Some(csv.as_bytes());

    Ok(SnapshotDelta { json, csv, changed })
}

fn read_prior(path: &Path) -> Result<Option<Vec<u8>>, SyncError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SyncError::SnapshotIo(e)),
    }
}
