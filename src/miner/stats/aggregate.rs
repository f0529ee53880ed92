// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/aggregate.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the run-wide hashrate accounting shared by every
// difficulty level, located in the stats subdirectory of the miner module.
// One instance is created when a sweep starts and handed to each worker
// behind an Arc.
//
// Tree Location:
// - src/miner/stats/aggregate.rs (aggregate hashrate accounting)
// - Depends on: std

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct AggregateState {
    total_nonces: AtomicU64,
    /// Highest per-level rate seen, stored as whole H/s
    peak_rate: AtomicU64,
    start_time: Instant,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(start_time: Instant) -> Self {
        Self {
            total_nonces: AtomicU64::new(0),
            peak_rate: AtomicU64::new(0),
            start_time,
        }
    }

    /// Add the nonces a finished search consumed; returns the new total
    pub fn record_completion(&self, nonces: u64) -> u64 {
        self.total_nonces.fetch_add(nonces, Ordering::Relaxed) + nonces
    }

    /// Raise the peak rate if `rate` beats it
    pub fn observe_rate(&self, rate: f64) {
        let rate = rate as u64;
        let mut peak = self.peak_rate.load(Ordering::Relaxed);
        while rate > peak {
            match self.peak_rate.compare_exchange_weak(
                peak,
                rate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(current) => peak = current,
            }
        }
    }

    /// Total nonces / seconds since start
    pub fn current_rate(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_nonces() as f64 / elapsed
        } else {
            0.0
        }
    }

    pub fn total_nonces(&self) -> u64 {
        self.total_nonces.load(Ordering::Relaxed)
    }

    pub fn peak_rate(&self) -> f64 {
        self.peak_rate.load(Ordering::Relaxed) as f64
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for AggregateState {
    fn default() -> Self {
        Self::new()
    }
}

// Changelog:
// - v1.0.1 (2026-10-18): Dropped the level counters; the runner tallies outcomes.
// - v1.0.0 (2026-10-18): Aggregate accounting for the difficulty sweep.
//   - Reduced MinerStats/ThreadStats to one atomic nonce total and a start instant.
//   - Peak tracking uses the compare-exchange loop from the profiler.
//   - Dropped share history, dashboards and per-thread mutex state.
