// PoW Bench - Free and Open Source Software Statement
//
// File: tests/search_test.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Tests for the nonce search: first-match, determinism, exhaustion and
// cancellation.
//
// Tree Location:
// - tests/search_test.rs (search engine tests)
// - Depends on: pow-bench, sha2

#[cfg(test)]
mod tests {
    use pow_bench::SearchOutcome;
    use pow_bench::core::difficulty::{Target, U256};
    use pow_bench::core::hash::{Algorithm, PowHash, sha256};
    use pow_bench::miner::{NonceSearch, proof_of_work};
    use sha2::{Digest, Sha256};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::thread;
    use std::time::Duration;

    /// SHA-256 hasher that counts invocations
    #[derive(Default)]
    struct CountingHasher {
        calls: AtomicU64,
    }

    impl PowHash for CountingHasher {
        fn hash(&self, input: &[u8]) -> U256 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            sha256(input)
        }
    }

    /// SHA-256 hasher that raises the stop flag on its `stop_after`-th call
    struct StoppingHasher {
        calls: AtomicU64,
        stop_after: u64,
        should_stop: Arc<AtomicBool>,
    }

    impl PowHash for StoppingHasher {
        fn hash(&self, input: &[u8]) -> U256 {
            if self.calls.fetch_add(1, Ordering::Relaxed) + 1 == self.stop_after {
                self.should_stop.store(true, Ordering::Relaxed);
            }
            sha256(input)
        }
    }

    #[test]
    fn test_zero_difficulty_returns_nonce_zero() {
        let outcome = proof_of_work("test block with transactions", 0).unwrap();
        let expected = U256::from_big_endian(&Sha256::digest(b"test block with transactions0"));
        assert!(outcome.is_found());
        assert_eq!(outcome.proof().nonce, 0);
        assert_eq!(outcome.proof().digest, expected);
    }

    #[test]
    fn test_first_match_property() {
        let search = NonceSearch::new(Algorithm::Sha256);
        for bits in [4u32, 8, 10] {
            let message = format!("test block with transactions{}", bits);
            let target = Target::from_bits(bits).unwrap();
            let outcome = search.search(&message, bits).unwrap();
            let pow = *outcome.proof();

            assert!(outcome.is_found(), "{} bits should be found", bits);
            assert!(target.is_met_by(&pow.digest));
            let candidate = format!("{}{}", message, pow.nonce);
            assert_eq!(pow.digest, sha256(candidate.as_bytes()));
            for earlier in 0..pow.nonce {
                let digest = sha256(format!("{}{}", message, earlier).as_bytes());
                assert!(
                    !target.is_met_by(&digest),
                    "nonce {} would have matched first",
                    earlier
                );
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let search = NonceSearch::new(Algorithm::Sha3_256);
        let first = search.search("determinism", 9).unwrap();
        let second = search.search("determinism", 9).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exhaustion_tries_every_nonce() {
        let search = NonceSearch::new(CountingHasher::default())
            .with_max_nonce(999);
        let outcome = search.search_target("unreachable", &Target::zero());

        assert!(outcome.is_exhausted());
        assert_eq!(outcome.proof().nonce, 999);
        assert_eq!(outcome.proof().digest, sha256(b"unreachable999"));
        assert_eq!(search.hasher().calls.load(Ordering::Relaxed), 1000);
        assert_eq!(search.candidate_count(), 1000);
    }

    #[test]
    fn test_max_nonce_zero_still_tries_one_candidate() {
        let search = NonceSearch::new(CountingHasher::default())
            .with_max_nonce(0);
        let outcome = search.search_target("single", &Target::zero());

        assert!(outcome.is_exhausted());
        assert_eq!(outcome.proof().nonce, 0);
        assert_eq!(outcome.proof().digest, sha256(b"single0"));
        assert_eq!(search.candidate_count(), 1);
        assert_eq!(search.hasher().calls.load(Ordering::Relaxed), 1);

        let widest = NonceSearch::new(CountingHasher::default())
            .with_max_nonce(u64::MAX);
        assert_eq!(widest.candidate_count(), u128::from(u64::MAX) + 1);
    }

    #[test]
    fn test_stop_mid_search_ends_at_poll_boundary() {
        let should_stop = Arc::new(AtomicBool::new(false));
        let hasher = StoppingHasher {
            calls: AtomicU64::new(0),
            stop_after: 200_000,
            should_stop: Arc::clone(&should_stop),
        };
        let search = NonceSearch::new(hasher).with_stop_flag(should_stop);
        let outcome = search.search_target("cancelled", &Target::zero());

        // Flag raised at nonce 199_999, next poll happens before nonce 262_144
        assert!(outcome.is_cancelled());
        assert_eq!(outcome.proof().nonce, 262_143);
        assert_eq!(outcome.proof().digest, sha256(b"cancelled262143"));
        assert_eq!(search.hasher().calls.load(Ordering::Relaxed), 262_144);
    }

    #[test]
    fn test_stop_from_another_thread_cancels_search() {
        let should_stop = Arc::new(AtomicBool::new(false));
        let search = NonceSearch::new(Algorithm::Sha256)
            .with_stop_flag(Arc::clone(&should_stop));

        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            should_stop.store(true, Ordering::Relaxed);
        });
        let outcome = search.search_target("interrupted", &Target::zero());
        stopper.join().unwrap();

        assert!(outcome.is_cancelled());
        let pow = *outcome.proof();
        assert_eq!((pow.nonce + 1) % 65_536, 0, "cancelled at a poll boundary");
        let candidate = format!("interrupted{}", pow.nonce);
        assert_eq!(pow.digest, sha256(candidate.as_bytes()));
    }

    #[test]
    fn test_stop_flag_cancels_search() {
        let should_stop = Arc::new(AtomicBool::new(true));
        let search = NonceSearch::new(Algorithm::Sha256)
            .with_stop_flag(should_stop);
        let outcome = search.search_target("cancelled", &Target::zero());
        assert!(matches!(outcome, SearchOutcome::Cancelled(_)));
        assert!(!outcome.is_found());
    }

    #[test]
    fn test_out_of_range_bits_is_an_error() {
        let search = NonceSearch::new(Algorithm::Sha256);
        assert!(search.search("too hard", 300).is_err());
    }
}

// Changelog:
// - v1.0.1 (2026-10-18): Mid-search cancellation and single-candidate exhaustion tests.
// - v1.0.0 (2026-10-18): Nonce search tests.
