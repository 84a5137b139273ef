//! The batch lookup loop.
//!
//! Sequential by design: the provider's rate limit is expressed per rolling
//! minute, so one in-flight request at a time plus fixed inter-request
//! spacing is what keeps the run under the ceiling. Each lookup and each
//! pacing pause is a suspension point; nothing else runs concurrently with
//! the loop.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use crate::error_handling::{LookupError, RunStats};
use crate::models::{LookupRecord, LookupStatus};
use crate::provider::GeoProvider;

/// Callback invoked with each record as it reaches a terminal state, so a
/// presentation layer can render incrementally without the runner knowing
/// about it.
pub type RecordObserver = Arc<dyn Fn(&LookupRecord) + Send + Sync>;

/// Runs the batch lookup loop over `targets`.
///
/// For every target, in order:
/// 1. stop if `cancel` has been tripped
/// 2. ask the provider for the target's geolocation
/// 3. normalize the outcome into exactly one [`LookupRecord`] (provider
///    failures become `Failed`, transport failures become `Error`; neither
///    is retried and neither aborts the remaining targets)
/// 4. count it, notify the observer, append it to the collection
/// 5. pause for `delay` before the next target (no trailing pause)
///
/// Returns the ordered collection. When cancelled mid-run the collection is
/// the prefix of records already produced, still one per attempted target in
/// input order.
pub async fn run_batch(
    provider: &dyn GeoProvider,
    targets: &[String],
    delay: Duration,
    cancel: &CancellationToken,
    stats: &RunStats,
    observer: Option<&RecordObserver>,
) -> Vec<LookupRecord> {
    let mut records = Vec::with_capacity(targets.len());

    for (index, ip) in targets.iter().enumerate() {
        if cancel.is_cancelled() {
            warn!(
                "Lookup cancelled after {} of {} addresses",
                records.len(),
                targets.len()
            );
            break;
        }

        let record = match provider.lookup(ip).await {
            Ok(geo) => {
                stats.record_success();
                LookupRecord::from_geo(ip, geo)
            }
            Err(err) => {
                stats.record_failure(err.kind());
                let status = match err {
                    LookupError::Provider { message } => LookupStatus::Failed { message },
                    LookupError::Transport { message, .. } => LookupStatus::Error { message },
                };
                LookupRecord::placeholder(ip, status)
            }
        };

        debug!("{} -> {}", ip, record.status.label());
        if let Some(observer) = observer {
            observer(&record);
        }
        records.push(record);

        // Pacing: suspend before the next item. Racing the sleep against the
        // token lets Ctrl-C cut a long delay short; the cancellation check at
        // the top of the loop then stops the run.
        if index + 1 < targets.len() {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = cancel.cancelled() => {}
            }
        }
    }

    records
}
