// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/search.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains the nonce search for a single difficulty level, located
// in the miner subdirectory. Nonces are tried in ascending order starting at
// zero and the first digest below the target wins, so a search is fully
// reproducible for a given message, difficulty and algorithm.

use crate::core::U256;
use crate::core::difficulty::{Target, digest_hex};
use crate::core::error::PowError;
use crate::core::hash::{Algorithm, PowHash};
use crate::core::types::{MAX_NONCE, ProofOfWork, SearchOutcome};
use log::{debug, trace, warn};
use std::fmt::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

const LOG_TARGET: &str = "pow_bench::search";

/// How often (in nonces) the stop flag is polled
const STOP_CHECK_INTERVAL: u64 = 1 << 16;

/// Exhaustive nonce search over `0..=max_nonce`
#[derive(Debug, Clone)]
pub struct NonceSearch<H = Algorithm> {
    hasher: H,
    max_nonce: u64,
    should_stop: Option<Arc<AtomicBool>>,
}

impl<H: PowHash> NonceSearch<H> {
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            max_nonce: MAX_NONCE,
            should_stop: None,
        }
    }

    pub fn with_max_nonce(mut self, max_nonce: u64) -> Self {
        self.max_nonce = max_nonce;
        self
    }

    pub fn with_stop_flag(mut self, should_stop: Arc<AtomicBool>) -> Self {
        self.should_stop = Some(should_stop);
        self
    }

    pub fn max_nonce(&self) -> u64 {
        self.max_nonce
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Candidates an exhaustive search hashes, `max_nonce + 1`
    pub fn candidate_count(&self) -> u128 {
        u128::from(self.max_nonce) + 1
    }

    /// Search for the first nonce meeting `2^(256 - difficulty_bits)`
    pub fn search(&self, message: &str, difficulty_bits: u32) -> Result<SearchOutcome, PowError> {
        let target = Target::from_bits(difficulty_bits)?;
        Ok(self.search_target(message, &target))
    }

    /// Search against an arbitrary target
    pub fn search_target(&self, message: &str, target: &Target) -> SearchOutcome {
        // message ++ decimal(nonce); only the nonce tail is rewritten per attempt
        let mut candidate = String::with_capacity(message.len() + 20);
        candidate.push_str(message);
        let prefix_len = message.len();

        let mut digest = U256::zero();
        for nonce in 0..=self.max_nonce {
            if nonce % STOP_CHECK_INTERVAL == 0 && self.stop_requested() {
                debug!(target: LOG_TARGET, "Stop requested at nonce {}", nonce);
                return SearchOutcome::Cancelled(ProofOfWork {
                    digest,
                    nonce: nonce.saturating_sub(1),
                });
            }

            candidate.truncate(prefix_len);
            // Writing into a String cannot fail
            let _ = write!(candidate, "{}", nonce);
            digest = self.hasher.hash(candidate.as_bytes());

            if target.is_met_by(&digest) {
                trace!(target: LOG_TARGET, "Nonce {} meets target: {}", nonce, digest_hex(&digest));
                return SearchOutcome::Found(ProofOfWork { digest, nonce });
            }
        }

        warn!(target: LOG_TARGET,
            "Failed after {} nonces (0..={}): no digest of '{}' met target {:x}",
            self.candidate_count(),
            self.max_nonce,
            message,
            target.value()
        );
        SearchOutcome::Exhausted(ProofOfWork {
            digest,
            nonce: self.max_nonce,
        })
    }

    fn stop_requested(&self) -> bool {
        self.should_stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// SHA-256 search over the full 2^32 nonce range
pub fn proof_of_work(message: &str, difficulty_bits: u32) -> Result<SearchOutcome, PowError> {
    let search = NonceSearch::new(Algorithm::Sha256);
    search.search(message, difficulty_bits)
}

// Changelog:
// - v1.0.1 (2026-10-18): Exhaustion warning counts max_nonce + 1 candidates.
// - v1.0.0 (2026-10-18): Replaced the randomized mining thread loop.
//   - Nonces start at zero and ascend so results are deterministic.
//   - Candidates are message ++ decimal nonce instead of a binary header.
//   - Results are tagged Found / Exhausted / Cancelled; exhaustion logs a warning.
//   - The stop flag is polled every 65,536 nonces like the old batch loop.
