//! Error types for prefix hunting

use thiserror::Error;

/// Everything that can stop a search from starting or finishing.
///
/// Configuration and validation errors are raised before any worker thread
/// is launched, so no hashing work has been done when they surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuntError {
    #[error("unknown hash algorithm id {0} (use --list to see the available ids)")]
    UnknownHashId(u32),

    #[error("unknown hash algorithm '{0}' (use --list to see the available names)")]
    UnknownHashName(String),

    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    #[error("prefix is {prefix_len} hex digits but {hash} digests only have {max_len}")]
    PrefixTooLong {
        prefix_len: usize,
        max_len: usize,
        hash: &'static str,
    },

    #[error("missing prefix")]
    EmptyPrefix,

    #[error("invalid hex digit '{ch}' at position {position} in prefix")]
    InvalidPrefixChar { ch: char, position: usize },

    #[error("failed to spawn worker {worker_id}: {message}")]
    WorkerSpawn { worker_id: usize, message: String },

    #[error("expected {expected} worker reports but only {received} arrived")]
    WorkerLost { expected: usize, received: usize },
}

impl HuntError {
    /// True for errors caused by the user's input rather than the search itself.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            HuntError::WorkerSpawn { .. } | HuntError::WorkerLost { .. }
        )
    }
}
