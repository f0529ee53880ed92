// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 2.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the benchmark driver that sweeps difficulty levels,
// either spread over a pool of worker threads or one after another with
// digest-chained messages. Every finished level updates the shared aggregate
// state and is forwarded to a report sink.

use crate::benchmark::jobs::{LevelJob, create_level_jobs, level_message};
use crate::benchmark::report::ReportSink;
use crate::core::difficulty::{DIGEST_BITS, MAX_SWEEP_BITS, digest_hex};
use crate::core::error::PowError;
use crate::core::hash::Algorithm;
use crate::core::types::{
    Args, BenchmarkSummary, DEFAULT_MESSAGE_PREFIX, LevelReport, MAX_NONCE, MessageScheme,
    Schedule, SearchOutcome,
};
use crate::miner::search::NonceSearch;
use crate::miner::stats::AggregateState;
use crate::utils::format::FormatUtils;
use crossbeam::channel;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

const LOG_TARGET: &str = "pow_bench::runner";

/// Configuration for a difficulty sweep
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub algorithm: Algorithm,
    pub schedule: Schedule,
    pub messages: MessageScheme,
    pub min_bits: u32,
    pub max_bits: u32,
    /// Worker threads for the parallel schedule (0 = auto-detect)
    pub thread_count: usize,
    pub max_nonce: u64,
    pub message_prefix: String,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Sha256,
            schedule: Schedule::Parallel,
            messages: MessageScheme::Independent,
            min_bits: 0,
            max_bits: MAX_SWEEP_BITS,
            thread_count: 0,
            max_nonce: MAX_NONCE,
            message_prefix: DEFAULT_MESSAGE_PREFIX.to_string(),
        }
    }
}

impl BenchmarkConfig {
    /// Sweep settings from the command line
    pub fn from_args(args: &Args, algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            schedule: args.schedule,
            messages: args.messages,
            min_bits: args.min_bits,
            max_bits: args.max_bits,
            thread_count: args.threads,
            max_nonce: args.max_nonce,
            message_prefix: args.prefix.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), PowError> {
        if self.min_bits > self.max_bits {
            return Err(PowError::InvalidConfig(format!(
                "min_bits ({}) exceeds max_bits ({})",
                self.min_bits, self.max_bits
            )));
        }
        if self.max_bits > DIGEST_BITS {
            return Err(PowError::DifficultyOutOfRange {
                bits: self.max_bits,
            });
        }
        if self.messages == MessageScheme::Chained && self.schedule == Schedule::Parallel {
            return Err(PowError::InvalidConfig(
                "chained messages require the sequential schedule".to_string(),
            ));
        }
        Ok(())
    }

    pub fn level_count(&self) -> usize {
        (self.max_bits - self.min_bits) as usize + 1
    }

    /// Worker count after auto-detection, never more than there are levels
    pub fn effective_threads(&self) -> usize {
        match self.schedule {
            Schedule::Sequential => 1,
            Schedule::Parallel => {
                let requested = if self.thread_count == 0 {
                    num_cpus::get()
                } else {
                    self.thread_count
                };
                requested.clamp(1, self.level_count())
            }
        }
    }
}

/// Main benchmark runner
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    should_stop: Arc<AtomicBool>,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Result<Self, PowError> {
        config.validate()?;
        Ok(Self {
            config,
            should_stop: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Flag that cancels running searches and skips queued levels once set
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.should_stop)
    }

    /// Run the sweep, forwarding every finished level to `sink`
    pub fn run<S: ReportSink + ?Sized>(&self, sink: &mut S) -> Result<BenchmarkSummary, PowError> {
        let thread_count = self.config.effective_threads();
        info!(target: LOG_TARGET,
            "🧪 Sweeping {}..={} bits with {} ({:?}, {:?} messages, {} threads)",
            self.config.min_bits,
            self.config.max_bits,
            self.config.algorithm,
            self.config.schedule,
            self.config.messages,
            thread_count
        );
        if self.config.max_bits > MAX_SWEEP_BITS {
            warn!(target: LOG_TARGET,
                "⚠️ Levels above {} bits may exhaust all {} nonces and run for a long time",
                MAX_SWEEP_BITS,
                self.config.max_nonce
            );
        }

        let aggregate = Arc::new(AggregateState::new());
        let search = NonceSearch::new(self.config.algorithm)
            .with_max_nonce(self.config.max_nonce)
            .with_stop_flag(Arc::clone(&self.should_stop));

        let mut counts = LevelCounts::default();
        match self.config.schedule {
            Schedule::Sequential => self.run_sequential(&search, &aggregate, sink, &mut counts)?,
            Schedule::Parallel => {
                self.run_parallel(&search, &aggregate, thread_count, sink, &mut counts)?
            }
        }

        let summary = BenchmarkSummary {
            levels_run: counts.found + counts.exhausted + counts.cancelled,
            found: counts.found,
            exhausted: counts.exhausted,
            cancelled: counts.cancelled,
            total_nonces: aggregate.total_nonces(),
            duration: aggregate.elapsed(),
            aggregate_rate: aggregate.current_rate(),
            peak_rate: aggregate.peak_rate(),
            thread_count,
            schedule: self.config.schedule,
        };
        info!(target: LOG_TARGET,
            "✅ Sweep finished: {} levels, {} nonces, {}",
            summary.levels_run,
            FormatUtils::format_number(summary.total_nonces),
            summary.format_hashrate()
        );
        sink.finish(&summary);
        Ok(summary)
    }

    fn run_sequential<S: ReportSink + ?Sized>(
        &self,
        search: &NonceSearch,
        aggregate: &AggregateState,
        sink: &mut S,
        counts: &mut LevelCounts,
    ) -> Result<(), PowError> {
        let mut previous = None;
        for bits in self.config.min_bits..=self.config.max_bits {
            if self.should_stop.load(Ordering::Relaxed) {
                info!(target: LOG_TARGET,
                    "🛑 Stop requested, skipping levels from {} bits", bits
                );
                break;
            }
            let message = level_message(
                self.config.messages,
                &self.config.message_prefix,
                bits,
                previous.as_ref(),
            );
            let job = LevelJob::new(bits, message)?;
            let (outcome, report) = run_level(search, aggregate, &job);
            counts.record(&outcome);
            sink.report(&report);

            if outcome.is_cancelled() {
                break;
            }
            previous = Some(outcome.proof().digest);
        }
        Ok(())
    }

    fn run_parallel<S: ReportSink + ?Sized>(
        &self,
        search: &NonceSearch,
        aggregate: &Arc<AggregateState>,
        thread_count: usize,
        sink: &mut S,
        counts: &mut LevelCounts,
    ) -> Result<(), PowError> {
        let jobs = create_level_jobs(
            &self.config.message_prefix,
            self.config.min_bits..=self.config.max_bits,
        )?;
        let (job_tx, job_rx) = channel::unbounded::<LevelJob>();
        let (report_tx, report_rx) = channel::unbounded::<(SearchOutcome, LevelReport)>();
        for job in jobs {
            // Receiver is alive until the workers below are spawned
            let _ = job_tx.send(job);
        }
        drop(job_tx);

        let mut thread_handles = Vec::with_capacity(thread_count);
        for worker_id in 0..thread_count {
            let job_rx = job_rx.clone();
            let report_tx = report_tx.clone();
            let search = search.clone();
            let aggregate = Arc::clone(aggregate);
            let should_stop = Arc::clone(&self.should_stop);

            let handle = thread::spawn(move || {
                while let Ok(job) = job_rx.recv() {
                    if should_stop.load(Ordering::Relaxed) {
                        debug!(target: LOG_TARGET,
                            "Worker {}: skipping {} bits after stop",
                            worker_id, job.difficulty_bits
                        );
                        continue;
                    }
                    debug!(target: LOG_TARGET,
                        "Worker {}: searching {} bits", worker_id, job.difficulty_bits
                    );
                    let result = run_level(&search, &aggregate, &job);
                    if report_tx.send(result).is_err() {
                        break;
                    }
                }
                debug!(target: LOG_TARGET, "Worker {}: Terminated", worker_id);
            });
            thread_handles.push(handle);
        }
        drop(report_tx);

        // Arrival order is completion order, not difficulty order
        for (outcome, report) in report_rx.iter() {
            counts.record(&outcome);
            sink.report(&report);
        }

        let mut failed_worker = None;
        for (worker_id, handle) in thread_handles.into_iter().enumerate() {
            if handle.join().is_err() {
                error!(target: LOG_TARGET, "Worker {} panicked", worker_id);
                failed_worker.get_or_insert(worker_id);
            }
        }
        match failed_worker {
            Some(worker) => Err(PowError::WorkerPanicked { worker }),
            None => Ok(()),
        }
    }
}

/// Search one level, account for it and build its report
pub fn run_level(
    search: &NonceSearch,
    aggregate: &AggregateState,
    job: &LevelJob,
) -> (SearchOutcome, LevelReport) {
    let start = Instant::now();
    let outcome = search.search_target(&job.message, &job.target);
    let elapsed = start.elapsed().as_secs_f64();

    let proof = outcome.proof();
    aggregate.record_completion(proof.nonce);

    let instantaneous_rate = if elapsed > 0.0 {
        proof.nonce as f64 / elapsed
    } else {
        0.0
    };
    aggregate.observe_rate(instantaneous_rate);

    let report = LevelReport {
        difficulty_bits: job.difficulty_bits,
        message: job.message.clone(),
        nonce: proof.nonce,
        digest_hex: digest_hex(&proof.digest),
        elapsed_seconds: elapsed,
        instantaneous_rate,
        aggregate_rate: aggregate.current_rate(),
        exhausted: outcome.is_exhausted(),
        cancelled: outcome.is_cancelled(),
    };
    (outcome, report)
}

#[derive(Debug, Default)]
struct LevelCounts {
    found: usize,
    exhausted: usize,
    cancelled: usize,
}

impl LevelCounts {
    fn record(&mut self, outcome: &SearchOutcome) {
        match outcome {
            SearchOutcome::Found(_) => self.found += 1,
            SearchOutcome::Exhausted(_) => self.exhausted += 1,
            SearchOutcome::Cancelled(_) => self.cancelled += 1,
        }
    }
}

// Changelog:
// - v2.0.1 (2026-10-18): Added BenchmarkConfig::from_args; outcome counts live here only.
// - v2.0.0 (2026-10-18): Rewrote the runner as a difficulty sweep driver.
//   - One driver covers the {Independent, Chained} x {Parallel, Sequential} modes.
//   - Parallel mode hands level jobs to a fixed worker pool over crossbeam channels.
//   - Aggregate nonce total and start time live in an Arc<AggregateState>.
//   - Exhausted levels are reported and the sweep continues; a stop request ends it.
// - v1.0.29 (2025-06-23): Fixed benchmark duration logic.
