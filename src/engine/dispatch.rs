// src/engine/dispatch.rs

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::model::Section;
use crate::engine::WorkerDone;
use crate::scope::merge::merge_scopes;
use crate::subst::expand::expand_pattern;
use crate::subst::worker::run_worker;

/// Dispatch one pattern section: merge its scope with the global section,
/// expand the pattern against the filesystem, and spawn one worker task
/// per matched file.
///
/// Returns the number of workers spawned; the caller sums these counts and
/// drains that many completion tokens. This function never waits for the
/// workers it starts.
pub fn dispatch_section(
    pattern: &str,
    global: &Section,
    local: &Section,
    done_tx: &mpsc::Sender<WorkerDone>,
) -> usize {
    info!(pattern, "dispatching section");

    let scope = merge_scopes(global, local);
    let files = expand_pattern(pattern);

    if files.is_empty() {
        debug!(pattern, "no files matched");
        return 0;
    }

    let count = files.len();
    for file in files {
        let scope = scope.clone();
        let tx = done_tx.clone();
        tokio::spawn(async move {
            run_worker(file, scope, tx).await;
        });
    }

    count
}
