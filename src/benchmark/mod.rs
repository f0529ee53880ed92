// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 2.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the benchmark module that sweeps proof-of-work
// difficulty levels and reports per-level and aggregate hashrates.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: jobs, runner, report

pub mod jobs;
pub mod report;
pub mod runner;

// Re-export key benchmark types and functions
pub use jobs::{LevelJob, create_level_jobs, level_message};
pub use report::{ConsoleSink, JsonSink, LogSink, ReportSink, sink_for};
pub use runner::{BenchmarkConfig, BenchmarkRunner, run_level};

// Changelog:
// - v2.0.0 (2026-10-18): Difficulty sweep benchmark.
//   - Replaced the profiler submodule with report sinks.
// - v1.0.0 (2025-06-14): Initial benchmark module creation.
