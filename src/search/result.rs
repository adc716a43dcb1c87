//! Search result types and statistics

use crate::hashing::HashKind;
use crate::search::candidate::Candidate;
use std::time::Duration;

/// A candidate whose digest starts with the target prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Lowercase hex digest of `candidate`
    pub digest_hex: String,
    /// The winning data block
    pub candidate: Candidate,
    /// Algorithm that produced the digest
    pub hash_kind: HashKind,
    /// Worker that found it
    pub worker_id: usize,
}

impl Match {
    pub fn hash_name(&self) -> &'static str {
        self.hash_kind.name()
    }
}

/// What a single worker hands back when its loop exits. Every worker sends
/// exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    /// Hashes computed by this worker
    pub ops_performed: u64,
    /// Set only if this worker won the search
    pub found: Option<Match>,
}

impl WorkerReport {
    pub fn no_match(worker_id: usize, ops_performed: u64) -> Self {
        Self {
            worker_id,
            ops_performed,
            found: None,
        }
    }

    pub fn with_match(worker_id: usize, ops_performed: u64, found: Match) -> Self {
        Self {
            worker_id,
            ops_performed,
            found: Some(found),
        }
    }

    pub fn matched(&self) -> bool {
        self.found.is_some()
    }
}

/// Why the search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A worker found a matching candidate
    Found,
    /// The configured deadline passed first
    TimedOut,
    /// Someone outside the search raised the stop signal
    Cancelled,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Found => write!(f, "found"),
            Termination::TimedOut => write!(f, "timed out"),
            Termination::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Final state of a search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Hashes computed across all workers
    pub total_ops: u64,
    /// The first match to arrive, if any
    pub found: Option<Match>,
    pub termination: Termination,
    /// Wall-clock time from launch until the last report
    pub elapsed: Duration,
    /// Per-worker operation counts, in report arrival order
    pub worker_ops: Vec<(usize, u64)>,
}

impl SearchOutcome {
    /// Hashes per second over the whole search
    pub fn hash_rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.total_ops as f64 / secs
        }
    }
}
