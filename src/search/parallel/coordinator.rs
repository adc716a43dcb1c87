//! Parallel search coordinator that manages worker threads.

use crate::error::HuntError;
use crate::search::config::SearchRequest;
use crate::search::parallel::channel::{CoordinatorChannels, WorkerChannels, create_channels};
use crate::search::parallel::config::ParallelConfig;
use crate::search::parallel::worker::run_worker;
use crate::search::result::{Match, SearchOutcome, Termination, WorkerReport};
use crossbeam_channel::RecvTimeoutError;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Running totals while reports come in.
#[derive(Debug, Default)]
struct ReportTally {
    total_ops: u64,
    found: Option<Match>,
    worker_ops: Vec<(usize, u64)>,
}

impl ReportTally {
    fn record(&mut self, report: WorkerReport) {
        self.total_ops += report.ops_performed;
        self.worker_ops.push((report.worker_id, report.ops_performed));

        if let Some(found) = report.found {
            match &self.found {
                None => self.found = Some(found),
                Some(first) => log::warn!(
                    "worker {} also matched ({}); keeping the match from worker {}",
                    found.worker_id,
                    found.digest_hex,
                    first.worker_id
                ),
            }
        }
    }

    fn received(&self) -> usize {
        self.worker_ops.len()
    }
}

/// Reports gathered by [`collect_reports`], plus whether the deadline fired.
struct Collected {
    tally: ReportTally,
    timed_out: bool,
}

/// Run a search across `request.worker_count()` threads and wait for all of
/// them to report.
///
/// Fails before any thread starts if the request is invalid.
pub fn run_search(
    request: &SearchRequest,
    config: &ParallelConfig,
) -> Result<SearchOutcome, HuntError> {
    request.validate()?;

    let start_time = Instant::now();
    let num_workers = request.worker_count();
    let stop = config.cancel.clone().unwrap_or_default();

    let (coordinator_channels, worker_channels) = create_channels(num_workers, stop.clone());
    let request = Arc::new(request.clone());

    let mut worker_handles: Vec<JoinHandle<()>> = Vec::with_capacity(num_workers);
    for (worker_id, channels) in worker_channels.into_iter().enumerate() {
        let seed = config.worker_seed(worker_id);
        match spawn_worker(worker_id, Arc::clone(&request), seed, channels) {
            Ok(handle) => worker_handles.push(handle),
            Err(e) => {
                abort_launch(&coordinator_channels, worker_handles);
                return Err(HuntError::WorkerSpawn {
                    worker_id,
                    message: e.to_string(),
                });
            }
        }
    }

    // A deadline too far out to represent is no deadline at all.
    let deadline = config.timeout.and_then(|t| start_time.checked_add(t));
    let collected = collect_reports(
        coordinator_channels,
        num_workers,
        deadline,
        config.poll_interval,
    );

    // Nothing should still be running, but make sure of it before joining.
    stop.raise();
    join_workers(worker_handles);

    let Collected { tally, timed_out } = collected?;
    let termination = if tally.found.is_some() {
        Termination::Found
    } else if timed_out {
        Termination::TimedOut
    } else {
        Termination::Cancelled
    };

    Ok(SearchOutcome {
        total_ops: tally.total_ops,
        found: tally.found,
        termination,
        elapsed: start_time.elapsed(),
        worker_ops: tally.worker_ops,
    })
}

fn spawn_worker(
    worker_id: usize,
    request: Arc<SearchRequest>,
    seed: Option<u64>,
    channels: WorkerChannels,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name(format!("hashhunt-worker-{}", worker_id))
        .spawn(move || {
            let report = run_worker(worker_id, &request, seed, &channels.stop);
            if !channels.report(report) {
                log::warn!("worker {} could not deliver its report", worker_id);
            }
        })
}

/// Stop and reap the workers already running when a later spawn fails.
fn abort_launch(channels: &CoordinatorChannels, handles: Vec<JoinHandle<()>>) {
    channels.stop.raise();
    // Take their reports so the rendezvous sends can complete.
    for _ in 0..handles.len() {
        let _ = channels.from_workers.recv();
    }
    join_workers(handles);
}

/// Coordinator loop: receive exactly `expected` reports, raising the stop
/// signal if the deadline passes first.
fn collect_reports(
    channels: CoordinatorChannels,
    expected: usize,
    deadline: Option<Instant>,
    poll_interval: Duration,
) -> Result<Collected, HuntError> {
    let mut tally = ReportTally::default();
    let mut timed_out = false;

    while tally.received() < expected {
        if !timed_out && deadline.is_some_and(|d| Instant::now() >= d) {
            timed_out = channels.stop.raise();
            if timed_out {
                log::debug!("deadline reached, stopping workers");
            }
        }

        match channels.from_workers.recv_timeout(poll_interval) {
            Ok(report) => {
                log::debug!(
                    "report from worker {}: {} hashes, matched: {}",
                    report.worker_id,
                    report.ops_performed,
                    report.matched()
                );
                tally.record(report);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(HuntError::WorkerLost {
                    expected,
                    received: tally.received(),
                });
            }
        }
    }

    Ok(Collected { tally, timed_out })
}

fn join_workers(handles: Vec<JoinHandle<()>>) {
    for handle in handles {
        if handle.join().is_err() {
            log::error!("a worker thread panicked");
        }
    }
}
