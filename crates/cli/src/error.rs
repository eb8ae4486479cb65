use connectors::error::SourceError;
use engine_runtime::{error::SyncError, settings::SettingsError};
use model::version::VersionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Failed to build the HTTP client: {0}")]
    Client(#[from] SourceError),

    #[error("Mirror run failed: {0}")]
    Sync(#[from] SyncError),

    #[error("Failed to read the version record: {0}")]
    VersionRecordRead(#[from] std::io::Error),

    #[error("Version record error: {0}")]
    Version(#[from] VersionError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
