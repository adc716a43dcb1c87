//! Random candidate generation for the search loop

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Bytes per candidate data block.
pub const CANDIDATE_LEN: usize = 16;

/// A data block fed to the hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate([u8; CANDIDATE_LEN]);

impl Candidate {
    pub fn from_bytes(bytes: [u8; CANDIDATE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Per-worker source of candidates.
///
/// Each worker owns one of these, so no generator state is shared between
/// threads. The generator is not cryptographically meaningful here; it only
/// needs to spread candidates over the input space.
pub struct CandidateGenerator {
    rng: ChaCha8Rng,
}

impl CandidateGenerator {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Deterministic generator for reproducible searches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Produce the next candidate.
    pub fn next_candidate(&mut self) -> Candidate {
        let mut bytes = [0u8; CANDIDATE_LEN];
        self.rng.fill_bytes(&mut bytes);
        Candidate(bytes)
    }
}

impl Iterator for CandidateGenerator {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        Some(self.next_candidate())
    }
}
