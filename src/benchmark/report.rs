// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/report.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the report sinks that receive one record per finished
// difficulty level and a summary at the end of the sweep. In parallel mode
// records arrive in completion order, so every line carries its difficulty.
//
// Tree Location:
// - src/benchmark/report.rs (report renderers)
// - Depends on: crossterm, serde_json, log

use crate::core::types::{BenchmarkSummary, LevelReport, OutputFormat};
use crate::utils::format::FormatUtils;
use crossterm::style::Stylize;
use log::{info, warn};
use serde_json::json;
use std::io::{self, Write};

const LOG_TARGET: &str = "pow_bench::report";

/// Receiver for per-level results
pub trait ReportSink {
    fn report(&mut self, record: &LevelReport);

    fn finish(&mut self, _summary: &BenchmarkSummary) {}
}

/// Build the sink selected on the command line, writing to stdout
pub fn sink_for(format: OutputFormat) -> Box<dyn ReportSink + Send> {
    match format {
        OutputFormat::Console => Box::new(ConsoleSink::new(io::stdout(), true)),
        OutputFormat::Plain => Box::new(ConsoleSink::new(io::stdout(), false)),
        OutputFormat::Json => Box::new(JsonSink::new(io::stdout())),
        OutputFormat::Log => Box::new(LogSink),
    }
}

/// `[003 bits][1.2 MH/s] [Tot: 3.4 MH/s][0.0012 s][Nonce 17][Hash 00ab..]`
pub fn format_level_line(record: &LevelReport, colored: bool) -> String {
    let bits = format!("[{:03} bits]", record.difficulty_bits);
    let rate = format!("[{}]", FormatUtils::format_hashrate(record.instantaneous_rate));
    let total = format!(" [Tot: {}]", FormatUtils::format_hashrate(record.aggregate_rate));
    let elapsed = format!("[{}]", FormatUtils::format_seconds(record.elapsed_seconds));
    let nonce = format!("[Nonce {}]", record.nonce);
    let hash = format!("[Hash {}]", record.digest_hex);
    let status = if record.cancelled {
        "[CANCELLED]"
    } else if record.exhausted {
        "[EXHAUSTED]"
    } else {
        ""
    };

    if colored {
        format!(
            "{}{}{}{}{}{}{}",
            bits.cyan(),
            rate.red(),
            total.dark_red(),
            elapsed.magenta(),
            nonce.green(),
            hash,
            status.yellow()
        )
    } else {
        format!("{}{}{}{}{}{}{}", bits, rate, total, elapsed, nonce, hash, status)
    }
}

fn format_summary_line(summary: &BenchmarkSummary) -> String {
    format!(
        "{} levels ({} found, {} exhausted, {} cancelled) | {} nonces in {} | avg {} | peak {} | {} threads",
        summary.levels_run,
        summary.found,
        summary.exhausted,
        summary.cancelled,
        FormatUtils::format_number(summary.total_nonces),
        FormatUtils::format_duration(summary.duration),
        summary.format_hashrate(),
        FormatUtils::format_hashrate(summary.peak_rate),
        summary.thread_count
    )
}

/// Human-readable lines, optionally coloured
pub struct ConsoleSink<W: Write> {
    out: W,
    colored: bool,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn report(&mut self, record: &LevelReport) {
        let line = format_level_line(record, self.colored);
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!(target: LOG_TARGET, "Failed to write report line: {}", e);
        }
    }

    fn finish(&mut self, summary: &BenchmarkSummary) {
        if let Err(e) = writeln!(self.out, "{}", format_summary_line(summary))
            .and_then(|_| self.out.flush())
        {
            warn!(target: LOG_TARGET, "Failed to write summary: {}", e);
        }
    }
}

/// One JSON object per line
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn report(&mut self, record: &LevelReport) {
        let written = serde_json::to_writer(&mut self.out, record)
            .map_err(io::Error::from)
            .and_then(|_| writeln!(self.out));
        if let Err(e) = written {
            warn!(target: LOG_TARGET, "Failed to write JSON record: {}", e);
        }
    }

    fn finish(&mut self, summary: &BenchmarkSummary) {
        let value = json!({
            "summary": {
                "levels_run": summary.levels_run,
                "found": summary.found,
                "exhausted": summary.exhausted,
                "cancelled": summary.cancelled,
                "total_nonces": summary.total_nonces,
                "duration_seconds": summary.duration.as_secs_f64(),
                "aggregate_rate": summary.aggregate_rate,
                "peak_rate": summary.peak_rate,
                "thread_count": summary.thread_count,
                "schedule": summary.schedule,
            }
        });
        if let Err(e) = writeln!(self.out, "{}", value).and_then(|_| self.out.flush()) {
            warn!(target: LOG_TARGET, "Failed to write JSON summary: {}", e);
        }
    }
}

/// Reports through the logger
pub struct LogSink;

impl ReportSink for LogSink {
    fn report(&mut self, record: &LevelReport) {
        if record.exhausted {
            warn!(target: LOG_TARGET, "{}", format_level_line(record, false));
        } else {
            info!(target: LOG_TARGET, "{}", format_level_line(record, false));
        }
    }

    fn finish(&mut self, summary: &BenchmarkSummary) {
        info!(target: LOG_TARGET, "📊 {}", format_summary_line(summary));
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn report(&mut self, record: &LevelReport) {
        (**self).report(record);
    }

    fn finish(&mut self, summary: &BenchmarkSummary) {
        (**self).finish(summary);
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Report sinks for the difficulty sweep.
//   - Console lines follow the bits / rate / total / seconds / nonce / hash layout.
//   - JSON sink emits serde records, log sink routes lines through log.
