// PoW Bench - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Entry point: parse arguments, set up logging, run the sweep on a blocking
// thread and stop it cleanly on Ctrl-C.

use clap::Parser;
use log::{LevelFilter, error, info, warn};
use pow_bench::{
    Algorithm, BenchmarkConfig, BenchmarkRunner, Result,
    benchmark::sink_for,
    core::types::Args,
    utils::{FormatUtils, init_logging},
};
use std::sync::atomic::Ordering;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    let level = args.log_level.parse::<LevelFilter>()?;
    init_logging(level, args.log_file.as_deref())?;

    // Unknown digest names abort before any level runs
    let algorithm = match args.algo.parse::<Algorithm>() {
        Ok(algorithm) => algorithm,
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    handle_benchmark(&args, algorithm).await
}

async fn handle_benchmark(args: &Args, algorithm: Algorithm) -> Result<()> {
    // Difficulty range and schedule/message combination are checked here
    let runner = match BenchmarkRunner::new(BenchmarkConfig::from_args(args, algorithm)) {
        Ok(runner) => runner,
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    info!("🧪 Starting difficulty sweep (Algo: {})", algorithm);
    let threads = if args.threads == 0 {
        "auto".to_string()
    } else {
        args.threads.to_string()
    };
    info!("🧵 Threads: {}", threads);
    info!(
        "🎯 Difficulty: {}..={} bits, max nonce {}",
        args.min_bits, args.max_bits, args.max_nonce
    );

    let should_stop = runner.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("🛑 Ctrl-C received, stopping after the current searches");
            should_stop.store(true, Ordering::Relaxed);
        }
    });

    let mut sink = sink_for(args.output);
    let summary = tokio::task::spawn_blocking(move || runner.run(&mut sink)).await??;

    info!("📊 Benchmark Complete!");
    info!("⏱️ Duration: {}", FormatUtils::format_duration(summary.duration));
    info!("⚡ Aggregate hashrate: {}", summary.format_hashrate());
    info!(
        "🔥 Peak level hashrate: {}",
        FormatUtils::format_hashrate(summary.peak_rate)
    );
    info!("📈 Total nonces: {}", summary.total_nonces);
    info!(
        "💎 Levels found/exhausted/cancelled: {}/{}/{}",
        summary.found, summary.exhausted, summary.cancelled
    );

    Ok(())
}

// Changelog:
// - v1.0.1 (2026-10-18): Sweep config errors from BenchmarkRunner::new exit with code 1.
// - v1.0.0 (2026-10-18): Single benchmark entry point.
//   - Removed CPU/GPU/hybrid feature mains, SV2 test and web dashboard.
//   - Ctrl-C sets the runner's stop flag instead of killing the process.
