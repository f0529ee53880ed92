// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the search functionality of the
// benchmark, located in the miner subdirectory. It declares submodules and
// re-exports key types for use throughout the project.
//
// Tree Location:
// - src/miner/mod.rs (miner module entry point)
// - Submodules: search, stats

pub mod search;
pub mod stats;

// Re-export key types for convenience
pub use search::{NonceSearch, proof_of_work};
pub use stats::AggregateState;

// Changelog:
// - v1.0.0 (2026-10-18): Reorganised around the nonce search.
//   - Replaced the cpu and gpu pool miners with the search submodule.
//   - Stats now exports the run-wide AggregateState.
