//! Configuration types for a prefix search

use crate::error::HuntError;
use crate::hashing::HashKind;
use crate::search::prefix::Prefix;

/// What to search for. Built once from validated input and read-only
/// afterwards; workers share it through an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    prefix: Prefix,
    hash_kind: HashKind,
    worker_count: usize,
}

impl SearchRequest {
    /// Build a request, rejecting anything that could never finish: a prefix
    /// longer than the digest's hex form, or zero workers.
    pub fn new(prefix: Prefix, hash_kind: HashKind, worker_count: usize) -> Result<Self, HuntError> {
        let request = Self {
            prefix,
            hash_kind,
            worker_count,
        };
        request.validate()?;
        Ok(request)
    }

    /// Re-check the invariants. Cheap, and called again by the coordinator
    /// before it launches anything.
    pub fn validate(&self) -> Result<(), HuntError> {
        if self.worker_count == 0 {
            return Err(HuntError::InvalidWorkerCount(self.worker_count));
        }

        let max_len = self.hash_kind.hex_len();
        if self.prefix.len() > max_len {
            return Err(HuntError::PrefixTooLong {
                prefix_len: self.prefix.len(),
                max_len,
                hash: self.hash_kind.name(),
            });
        }

        Ok(())
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn hash_kind(&self) -> HashKind {
        self.hash_kind
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Same request with a different worker count.
    pub fn with_workers(mut self, worker_count: usize) -> Result<Self, HuntError> {
        self.worker_count = worker_count;
        self.validate()?;
        Ok(self)
    }
}
