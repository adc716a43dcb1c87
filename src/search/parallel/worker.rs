//! The per-thread search loop.

use crate::hashing::HashKind;
use crate::search::candidate::{Candidate, CandidateGenerator};
use crate::search::config::SearchRequest;
use crate::search::parallel::channel::StopSignal;
use crate::search::result::{Match, WorkerReport};

/// Hash random candidates until one matches the prefix or the stop signal is
/// raised.
///
/// The win is claimed by raising `stop`. A worker whose match lands after
/// another worker already claimed the win reports only its count, so at most
/// one report per search carries a match.
pub fn run_worker(
    worker_id: usize,
    request: &SearchRequest,
    seed: Option<u64>,
    stop: &StopSignal,
) -> WorkerReport {
    let mut hasher = request.hash_kind().hasher();
    let mut generator = CandidateGenerator::from_seed_option(seed);
    let prefix = request.prefix();
    let mut ops: u64 = 0;

    log::debug!(
        "worker {} starting: {} prefix '{}' (seed {:?})",
        worker_id,
        hasher.kind(),
        prefix,
        seed
    );

    loop {
        if stop.is_raised() {
            log::debug!("worker {} stopping after {} hashes", worker_id, ops);
            return WorkerReport::no_match(worker_id, ops);
        }

        let candidate = generator.next_candidate();
        let digest = hasher.digest(candidate.as_bytes());
        ops += 1;

        if prefix.matches(&digest) {
            return claim_match(worker_id, ops, &digest, candidate, hasher.kind(), stop);
        }
    }
}

/// Turn a matching candidate into a report, if this worker is the first to
/// raise the stop signal. A late match is dropped but its work still counts.
fn claim_match(
    worker_id: usize,
    ops: u64,
    digest: &[u8],
    candidate: Candidate,
    hash_kind: HashKind,
    stop: &StopSignal,
) -> WorkerReport {
    if !stop.raise() {
        log::debug!(
            "worker {} matched after the search was already stopped; discarding",
            worker_id
        );
        return WorkerReport::no_match(worker_id, ops);
    }

    log::info!("worker {} found a match after {} hashes", worker_id, ops);
    let found = Match {
        digest_hex: hex::encode(digest),
        candidate,
        hash_kind,
        worker_id,
    };
    WorkerReport::with_match(worker_id, ops, found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::prefix::Prefix;

    fn request(prefix: &str, kind: HashKind) -> SearchRequest {
        SearchRequest::new(Prefix::parse(prefix).unwrap(), kind, 1).unwrap()
    }

    #[test]
    fn test_worker_finds_match() {
        let request = request("0", HashKind::Sha256);
        let stop = StopSignal::new();

        let report = run_worker(0, &request, Some(7), &stop);

        assert!(report.matched());
        assert!(report.ops_performed >= 1);
        assert!(stop.is_raised());

        let found = report.found.unwrap();
        assert!(found.digest_hex.starts_with('0'));
        assert_eq!(found.hash_kind, HashKind::Sha256);
        assert_eq!(found.worker_id, 0);
    }

    #[test]
    fn test_match_rehashes_to_same_digest() {
        for kind in [HashKind::Md5, HashKind::Sha1, HashKind::Sha3_512, HashKind::Whirlpool] {
            let request = request("ab", kind);
            let report = run_worker(0, &request, None, &StopSignal::new());
            let found = report.found.expect("unbounded search always matches");

            let again = kind.hasher().digest_hex(found.candidate.as_bytes());
            assert_eq!(again, found.digest_hex, "{}", kind);
            assert!(found.digest_hex.starts_with("ab"));
        }
    }

    #[test]
    fn test_stopped_worker_does_no_work() {
        let request = request("0", HashKind::Sha256);
        let stop = StopSignal::new();
        stop.raise();

        let report = run_worker(2, &request, None, &stop);

        assert_eq!(report, WorkerReport::no_match(2, 0));
    }

    #[test]
    fn test_seeded_worker_is_reproducible() {
        let request = request("00", HashKind::Md5);

        let a = run_worker(0, &request, Some(1234), &StopSignal::new());
        let b = run_worker(0, &request, Some(1234), &StopSignal::new());

        assert_eq!(a.ops_performed, b.ops_performed);
        assert_eq!(a.found, b.found);
    }

    #[test]
    fn test_late_match_is_discarded_but_counted() {
        let stop = StopSignal::new();
        // Another worker has already won
        let winner = stop.clone();
        std::thread::spawn(move || winner.raise()).join().unwrap();

        let candidate = Candidate::from_bytes([7; 16]);
        let digest = HashKind::Sha256.hasher().digest(candidate.as_bytes());

        let report = claim_match(3, 42, &digest, candidate, HashKind::Sha256, &stop);

        assert_eq!(report, WorkerReport::no_match(3, 42));
        assert!(stop.is_raised());
    }

    #[test]
    fn test_first_claim_wins() {
        let stop = StopSignal::new();
        let candidate = Candidate::from_bytes([7; 16]);
        let mut hasher = HashKind::Md5.hasher();
        let digest = hasher.digest(candidate.as_bytes());

        let report = claim_match(1, 5, &digest, candidate, HashKind::Md5, &stop);

        let found = report.found.expect("first claim should keep the match");
        assert_eq!(report.ops_performed, 5);
        assert_eq!(found.digest_hex, hasher.digest_hex(candidate.as_bytes()));
        assert_eq!(found.worker_id, 1);
        assert!(stop.is_raised());

        // A second claim on the same signal loses
        let again = claim_match(2, 9, &digest, candidate, HashKind::Md5, &stop);
        assert!(!again.matched());
        assert_eq!(again.ops_performed, 9);
    }
}
