//! hashhunt: find data blocks whose hash digest starts with a chosen hex prefix.
//!
//! The search is plain brute force. Worker threads hash random 16-byte
//! candidates until one digest matches, then a shared stop signal ends the
//! rest and the coordinator sums up the work done.

pub mod error;
pub mod hashing;
pub mod search;

pub use error::HuntError;
pub use hashing::{HashKind, Hasher, select_hash};
pub use search::{
    Match, ParallelConfig, Prefix, SearchOutcome, SearchRequest, StopSignal, Termination,
    run_search,
};
