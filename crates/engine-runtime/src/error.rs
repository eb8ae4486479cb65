use crate::settings::SettingsError;
use connectors::error::SourceError;
use model::version::VersionError;
use thiserror::Error;

/// Top-level errors for a mirror run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Settings(#[from] SettingsError),

    /// A page fetch failed; the run aborts on the first such failure.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Version record error: {0}")]
    Version(#[from] VersionError),

    /// Reading or writing a snapshot artifact failed.
    #[error("Snapshot I/O error: {0}")]
    SnapshotIo(#[from] std::io::Error),

    #[error("Failed to serialize dataset to JSON: {0}")]
    JsonEncode(#[source] serde_json::Error),

    #[error("Failed to serialize dataset to CSV: {0}")]
    CsvEncode(#[from] csv::Error),

    #[error("Shutdown requested")]
    ShutdownRequested,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
