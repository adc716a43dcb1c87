//! Parallel search execution.
//!
//! # Architecture
//!
//! - A **coordinator** launches one thread per worker, waits for exactly one
//!   report from each, and folds them into a [`SearchOutcome`](crate::search::SearchOutcome)
//! - **Workers** hash random candidates until one matches or the stop signal
//!   is raised
//! - A **rendezvous channel** carries each worker's single report
//! - A shared **stop signal** (an atomic flag) ends every worker's loop once
//!   any worker wins, the deadline passes, or the caller cancels
//!
//! # Example
//!
//! ```ignore
//! let request = SearchRequest::new(Prefix::parse("6517")?, HashKind::Sha256, 4)?;
//! let config = ParallelConfig::default().with_timeout(Duration::from_secs(60));
//! let outcome = run_search(&request, &config)?;
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;
pub mod worker;

pub use channel::StopSignal;
pub use config::ParallelConfig;
pub use coordinator::run_search;
