// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for the benchmark, located in the
// core subdirectory. It includes the command-line arguments, search results,
// per-level report records and the end-of-run summary.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde

use crate::core::difficulty::{MAX_SWEEP_BITS, U256};
use crate::utils::format::FormatUtils;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::time::Duration;

/// Last nonce tried by a search, inclusive (2^32)
pub const MAX_NONCE: u64 = 1 << 32;

/// Fixed payload every level's message starts with
pub const DEFAULT_MESSAGE_PREFIX: &str = "test block with transactions";

/// How difficulty levels are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    /// All levels spread over a pool of worker threads
    #[default]
    Parallel,
    /// Levels run one after another on the calling thread
    Sequential,
}

/// How each level's message is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageScheme {
    /// prefix followed by the difficulty in decimal
    #[default]
    Independent,
    /// prefix followed by the previous level's digest in hex
    Chained,
}

/// Report renderer selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Coloured terminal lines
    #[default]
    Console,
    /// Same layout without colours
    Plain,
    /// One JSON object per line
    Json,
    /// Through the logger at info level
    Log,
}

/// Command-line arguments for the benchmark
#[derive(Parser, Debug)]
#[command(
    name = "powbench",
    version,
    about = "Proof-of-work difficulty sweep benchmark",
    long_about = "Searches, for every difficulty from --min-bits to --max-bits, the first nonce whose\n\
                  digest of MESSAGE ++ NONCE falls below 2^(256 - bits), and reports nonce, digest,\n\
                  time and hashrate per level plus the running aggregate hashrate.\n\n\
                  Examples:\n\
                    Default sweep: powbench\n\
                    Chained sweep: powbench --schedule sequential --messages chained\n\
                    Quick check:   powbench --max-bits 20 --threads 4 --output plain\n\
                    JSON output:   powbench --algo sha3-256 --output json"
)]
pub struct Args {
    /// Parallel spreads levels over worker threads, sequential runs them in order
    #[arg(long, value_enum, default_value_t = Schedule::Parallel)]
    pub schedule: Schedule,

    /// Independent messages use the difficulty, chained ones the previous digest
    #[arg(long, value_enum, default_value_t = MessageScheme::Independent)]
    pub messages: MessageScheme,

    /// Digest algorithm: sha256, sha256d, sha3-256 or sha3x
    #[arg(long, default_value = "sha256", value_name = "ALGO")]
    pub algo: String,

    /// First difficulty level in bits
    #[arg(long, default_value_t = 0, value_name = "BITS")]
    pub min_bits: u32,

    /// Last difficulty level in bits (inclusive)
    #[arg(long, default_value_t = MAX_SWEEP_BITS, value_name = "BITS")]
    pub max_bits: u32,

    /// Number of worker threads (0 = auto-detect)
    #[arg(short, long, default_value_t = 0, value_name = "COUNT")]
    pub threads: usize,

    /// Largest nonce tried before a level counts as exhausted
    #[arg(long, default_value_t = MAX_NONCE, value_name = "NONCE")]
    pub max_nonce: u64,

    /// Message prefix hashed in front of the nonce
    #[arg(long, default_value = DEFAULT_MESSAGE_PREFIX, value_name = "TEXT")]
    pub prefix: String,

    /// Report renderer
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub output: OutputFormat,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,
}

impl Args {
    /// Validate command-line only settings; sweep ranges and modes are checked
    /// by `BenchmarkConfig::validate`
    pub fn validate(&self) -> Result<(), String> {
        if self.threads > 1024 {
            return Err("Thread count cannot exceed 1024".to_string());
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(format!("Unknown log level: {}", self.log_level));
        }
        Ok(())
    }
}

/// Result of one nonce search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofOfWork {
    pub digest: U256,
    pub nonce: u64,
}

/// How a nonce search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// First nonce whose digest is below the target
    Found(ProofOfWork),
    /// Every nonce up to max_nonce failed; carries the last digest and max_nonce
    Exhausted(ProofOfWork),
    /// The stop flag was raised; carries the last nonce tried
    Cancelled(ProofOfWork),
}

impl SearchOutcome {
    pub fn proof(&self) -> &ProofOfWork {
        match self {
            SearchOutcome::Found(pow)
            | SearchOutcome::Exhausted(pow)
            | SearchOutcome::Cancelled(pow) => pow,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, SearchOutcome::Exhausted(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchOutcome::Cancelled(_))
    }
}

/// Record handed to a report sink once a level completes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelReport {
    pub difficulty_bits: u32,
    pub message: String,
    pub nonce: u64,
    pub digest_hex: String,
    pub elapsed_seconds: f64,
    /// nonce / elapsed_seconds for this level alone
    pub instantaneous_rate: f64,
    /// All nonces recorded so far / time since the run started
    pub aggregate_rate: f64,
    pub exhausted: bool,
    pub cancelled: bool,
}

/// Totals for a whole sweep
#[derive(Debug, Clone)]
pub struct BenchmarkSummary {
    pub levels_run: usize,
    pub found: usize,
    pub exhausted: usize,
    pub cancelled: usize,
    pub total_nonces: u64,
    pub duration: Duration,
    pub aggregate_rate: f64,
    pub peak_rate: f64,
    pub thread_count: usize,
    pub schedule: Schedule,
}

impl BenchmarkSummary {
    /// Format aggregate hashrate for display
    pub fn format_hashrate(&self) -> String {
        FormatUtils::format_hashrate(self.aggregate_rate)
    }
}

// Changelog:
// - v1.0.1 (2026-10-18): Args::validate keeps only command-line checks.
// - v1.0.0 (2026-10-18): Types for the difficulty sweep benchmark.
//   - Args now configures schedule, message scheme, bit range and output.
//   - Removed pool job, share and SV2 structures.
//   - Added ProofOfWork, SearchOutcome, LevelReport and BenchmarkSummary.
//   - Chained messages with the parallel schedule are rejected by validate().
