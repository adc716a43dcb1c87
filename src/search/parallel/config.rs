//! Configuration for parallel search execution.

use crate::search::parallel::channel::StopSignal;
use std::time::Duration;

/// How a search is run, as opposed to what it looks for.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Overall timeout for the search.
    pub timeout: Option<Duration>,
    /// Base random seed (workers get seed + worker_id).
    pub base_seed: Option<u64>,
    /// Externally held stop signal for cancelling the search.
    pub cancel: Option<StopSignal>,
    /// How often the coordinator wakes up to check the deadline.
    pub poll_interval: Duration,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            base_seed: None,
            cancel: None,
            poll_interval: Duration::from_millis(100),
        }
    }
}

impl ParallelConfig {
    /// Set the overall timeout for the search.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the overall timeout from an Option.
    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the base random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Set the base random seed from an Option.
    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.base_seed = seed;
        self
    }

    /// Share a stop signal with the caller. Raising it ends the search
    /// without a match; the search also raises it when a worker wins.
    pub fn with_cancel(mut self, stop: StopSignal) -> Self {
        self.cancel = Some(stop);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Seed for a given worker, if the search is seeded.
    pub fn worker_seed(&self, worker_id: usize) -> Option<u64> {
        self.base_seed.map(|s| s.wrapping_add(worker_id as u64))
    }
}
