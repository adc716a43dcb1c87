//! Brute-force search for candidates whose digest starts with a hex prefix

pub mod candidate;
pub mod config;
pub mod parallel;
pub mod prefix;
pub mod result;

pub use candidate::{CANDIDATE_LEN, Candidate, CandidateGenerator};
pub use config::SearchRequest;
pub use parallel::{ParallelConfig, StopSignal, run_search};
pub use prefix::Prefix;
pub use result::{Match, SearchOutcome, Termination, WorkerReport};
