use crate::{
    error::SyncError,
    execution::workers,
    settings::SyncSettings,
    snapshot::{encode, gate, publisher},
    summary::SyncSummary,
};
use connectors::http::source::PageSource;
use model::{pagination::offset::remaining_offsets, records::dataset::Dataset};
use std::{sync::Arc, time::Instant};
use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

/// Runs the full mirror pipeline: fetch, reassemble, reconcile, publish.
///
/// Phase 1 is strictly sequential: a single request at offset 0 establishes
/// the declared total. Phase 2 fans a bounded worker pool out over the
/// statically known remaining offsets. Publishing only happens after both
/// encodings are computed and a change is confirmed; any failure before
/// that point leaves the snapshot files untouched.
pub async fn run(
    source: Arc<dyn PageSource>,
    settings: &SyncSettings,
    dry_run: bool,
    cancel: CancellationToken,
) -> Result<SyncSummary, SyncError> {
    settings.validate()?;

    let start = Instant::now();
    let run_id = Uuid::new_v4().to_string();
    info!(run_id = %run_id, dry_run, "Starting mirror run");

    if cancel.is_cancelled() {
        return Err(SyncError::ShutdownRequested);
    }

    let first = source.fetch_page(0).await?;
    let declared_total = first.declared_total;
    let offsets = remaining_offsets(declared_total, settings.page_size);
    info!(
        declared_total,
        pages = offsets.len() + 1,
        "First page fetched"
    );

    let rest = workers::fetch_all(
        source,
        offsets,
        settings.max_concurrency,
        cancel.clone(),
    )
    .await?;

    let pages = rest.len() + 1;
    let dataset = Dataset::assemble(first, rest);

    let json = encode::to_json(&dataset)?;
    let csv = encode::to_csv(&dataset)?;
    let delta = gate::evaluate(json, csv, &settings.json_path, &settings.csv_path)?;

    let version = if !delta.changed {
        info!("No changes detected, nothing written");
        None
    } else if dry_run {
        info!("Dry run: content changed, skipping writes");
        None
    } else {
        Some(publisher::publish(
            &delta,
            &settings.json_path,
            &settings.csv_path,
            &settings.version_path,
        )?)
    };

    let summary = SyncSummary {
        run_id,
        pages,
        records: dataset.len(),
        declared_total,
        changed: delta.changed,
        dry_run,
        version,
        duration_ms: start.elapsed().as_millis(),
    };
    info!(
        records = summary.records,
        changed = summary.changed,
        duration_ms = summary.duration_ms,
        "Mirror run complete"
    );
    Ok(summary)
}
