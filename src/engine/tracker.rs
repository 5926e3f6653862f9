// src/engine/tracker.rs

use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use tracing::debug;

/// Completion token sent by every worker exactly once, on success or
/// failure, just before its task exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerDone;

/// Block until `spawned` completion tokens have been received.
///
/// The caller must drop its own sender before draining; after the last
/// worker signals and exits, the channel closes on its own. Because every
/// worker sends unconditionally, receiving fewer tokens than `spawned`
/// can only mean a worker task died before signalling, which is reported
/// rather than hanging forever.
pub async fn drain_completions(
    mut done_rx: mpsc::Receiver<WorkerDone>,
    spawned: usize,
) -> Result<()> {
    for received in 0..spawned {
        if done_rx.recv().await.is_none() {
            return Err(anyhow!(
                "completion channel closed after {received} of {spawned} workers"
            ));
        }
        debug!(received = received + 1, spawned, "worker completed");
    }
    Ok(())
}
