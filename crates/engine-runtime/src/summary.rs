use model::version::Version;
use serde::Serialize;

/// Final report for one mirror run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    pub run_id: String,
    pub pages: usize,
    pub records: usize,
    pub declared_total: usize,
    pub changed: bool,
    pub dry_run: bool,
    /// The version the marker was advanced to; absent when nothing was
    /// written (no change, or dry run).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    pub duration_ms: u128,
}
