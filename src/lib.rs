// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for the benchmark, located
// at the root of the source tree. It exports all public modules and types
// that the binary and the integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, miner, benchmark, utils

pub mod benchmark;
pub mod core;
pub mod miner;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::{BenchmarkConfig, BenchmarkRunner, ReportSink};
pub use crate::core::{Algorithm, PowError, ProofOfWork, SearchOutcome, Target};
pub use crate::miner::{AggregateState, NonceSearch, proof_of_work};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.0.0 (2026-10-18): Library root for the difficulty sweep benchmark.
//   - Exports core, miner, benchmark and utils.
//   - Dropped pool, help and tui modules.
