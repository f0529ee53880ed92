// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core functionality of the
// benchmark, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod difficulty;
pub mod error;
pub mod hash;
pub mod types;

// Re-export the most commonly used items
pub use difficulty::{Target, U256, U512, difficulty_to_target, digest_hex};
pub use error::PowError;
pub use hash::{Algorithm, PowHash, sha256};
pub use types::{
    Args, BenchmarkSummary, LevelReport, MAX_NONCE, MessageScheme, OutputFormat, ProofOfWork,
    Schedule, SearchOutcome,
};

// Changelog:
// - v1.0.0 (2026-10-18): Core module for the difficulty sweep.
//   - Replaced sha3x/sha256 modules with a single hash adapter.
//   - Added the error module.
