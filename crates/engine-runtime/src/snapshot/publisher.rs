use crate::{error::SyncError, snapshot::gate::SnapshotDelta};
use model::version::{Version, VersionError};
use serde_json::Value;
use std::{fs, path::Path};
use tracing::info;

/// Writes both snapshot artifacts and advances the persisted version marker.
///
/// The version record is parsed and the bumped rendering computed before any
/// file is touched, so a malformed record aborts with nothing written. The
/// writes themselves are ordered (snapshots, then version record) rather
/// than atomic; a crash in between leaves fresh snapshots with a stale
/// version, which the next changed run repairs.
pub fn publish(
    delta: &SnapshotDelta,
    json_path: &Path,
    csv_path: &Path,
    version_path: &Path,
) -> Result<Version, SyncError> {
    let (rendered_record, next) = bump_version_record(version_path)?;

    for path in [json_path, csv_path] {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(json_path, &delta.json)?;
    fs::write(csv_path, &delta.csv)?;
    fs::write(version_path, rendered_record)?;

    info!(version = %next, "Snapshots written, version bumped");
    Ok(next)
}

/// Parses the persisted version record, bumps the patch component, and
/// renders the updated record. Fields other than `version` are preserved
/// verbatim.
fn bump_version_record(path: &Path) -> Result<(String, Version), SyncError> {
    let raw = fs::read_to_string(path)?;

    let mut doc: Value = serde_json::from_str(&raw).map_err(|e| {
        VersionError::InvalidRecord(format!("{} is not valid JSON: {e}", path.display()))
    })?;

    let current = doc
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| VersionError::InvalidRecord("no 'version' string field".to_string()))?;

    let next = current.parse::<Version>()?.bump_patch();
    doc["version"] = Value::String(next.to_string());

    let mut rendered = serde_json::to_string_pretty(&doc).map_err(SyncError::JsonEncode)?;
    rendered.push('\n');
    Ok((rendered, next))
}
