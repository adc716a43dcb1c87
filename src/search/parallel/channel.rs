//! Stop signal and report channel shared by the coordinator and its workers.

use crate::search::result::WorkerReport;
use crossbeam_channel::{Receiver, Sender, bounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag telling every worker the search is over.
///
/// It only ever goes from `false` to `true`. Clones share the same flag, so a
/// caller can keep one to cancel a running search from outside.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    raised: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if we should stop searching.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Raise the signal. Returns true only for the caller that flipped it, so
    /// a worker can use this to claim the win.
    pub fn raise(&self) -> bool {
        self.raised
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Send the final report to the coordinator.
    pub to_coordinator: Sender<WorkerReport>,
    pub stop: StopSignal,
}

impl WorkerChannels {
    /// Hand over the report. Blocks until the coordinator takes it; returns
    /// false if the coordinator has already gone away.
    pub fn report(&self, report: WorkerReport) -> bool {
        self.to_coordinator.send(report).is_ok()
    }
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive reports from workers.
    pub from_workers: Receiver<WorkerReport>,
    pub stop: StopSignal,
}

/// Create channels for a search with the given number of workers.
///
/// The report channel has no buffer: each worker's send is a direct handoff
/// to the coordinator. Once every worker endpoint is dropped the coordinator
/// sees a disconnect, which is how a worker that died without reporting is
/// detected.
pub fn create_channels(
    num_workers: usize,
    stop: StopSignal,
) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let (worker_tx, coordinator_rx) = bounded(0);

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            to_coordinator: worker_tx.clone(),
            stop: stop.clone(),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        stop,
    };

    (coordinator, worker_channels)
}
