use crate::error::SyncError;
use connectors::{error::SourceError, http::source::PageSource};
use model::records::page::Page;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const RESULT_CHANNEL_CAPACITY: usize = 64;

/// Fetches every offset in the plan using a bounded pool of workers and
/// returns the pages in arrival order.
///
/// Pending work is a precomputed, immutable offset list plus an atomic claim
/// cursor; each worker owns the fetch for the offsets it claims. On the
/// first fetch failure the pool gives up immediately: pending offsets are
/// abandoned, in-flight siblings finish or fail on their own, and their late
/// results are discarded.
pub async fn fetch_all(
    source: Arc<dyn PageSource>,
    offsets: Vec<usize>,
    max_concurrency: usize,
    cancel: CancellationToken,
) -> Result<Vec<Page>, SyncError> {
    let expected = offsets.len();
    if expected == 0 {
        return Ok(Vec::new());
    }

    let workers = max_concurrency.min(expected);
    let offsets = Arc::new(offsets);
    let next = Arc::new(AtomicUsize::new(0));
    let (tx, mut rx) = mpsc::channel::<Result<Page, SourceError>>(RESULT_CHANNEL_CAPACITY);

    info!(pages = expected, workers, "Launching fetch workers");

    for worker in 0..workers {
        let source = source.clone();
        let offsets = offsets.clone();
        let next = next.clone();
        let tx = tx.clone();
        let cancel = cancel.clone();

        tokio::spawn(async move {
            loop {
                if cancel.is_cancelled() {
                    break;
                }

                // The claim is a single atomic increment: no offset can be
                // claimed twice and none can be skipped.
                let idx = next.fetch_add(1, Ordering::SeqCst);
                let Some(&offset) = offsets.get(idx) else {
                    break;
                };

                let result = source.fetch_page(offset).await;

                // A closed channel means the collector already gave up on
                // this run; stop claiming.
                if tx.send(result).await.is_err() {
                    break;
                }
            }
            debug!(worker, "Fetch worker done");
        });
    }
    drop(tx);

    let mut pages = Vec::with_capacity(expected);
    while pages.len() < expected {
        match rx.recv().await {
            Some(Ok(page)) => {
                info!(
                    offset = page.offset,
                    records = page.len(),
                    fetched = pages.len() + 1,
                    remaining = expected - pages.len() - 1,
                    "Fetched page"
                );
                pages.push(page);
            }
            Some(Err(e)) => return Err(e.into()),
            None => {
                if cancel.is_cancelled() {
                    return Err(SyncError::ShutdownRequested);
                }
                return Err(SyncError::Unexpected(
                    "worker pool stopped before fetching every page".to_string(),
                ));
            }
        }
    }

    Ok(pages)
}
