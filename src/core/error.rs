// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the error taxonomy for the benchmark, located in the core
// subdirectory. Running out of nonces is not an error: it is reported through
// SearchOutcome::Exhausted and the sweep continues.
//
// Tree Location:
// - src/core/error.rs (error types)
// - Depends on: thiserror

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PowError {
    #[error("Unsupported digest algorithm: {name} (expected sha256, sha256d, sha3-256 or sha3x)")]
    UnsupportedDigestAlgorithm { name: String },

    #[error("Difficulty of {bits} bits is outside the supported range 0..=256")]
    DifficultyOutOfRange { bits: u32 },

    #[error("Invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    #[error("Benchmark worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}

// Changelog:
// - v1.0.0 (2026-10-18): Initial error taxonomy.
//   - UnsupportedDigestAlgorithm is raised while parsing --algo and aborts startup.
//   - DifficultyOutOfRange guards the target mapper above 256 bits.
//   - InvalidConfig and WorkerPanicked cover the benchmark driver.
