// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides utility functions for formatting statistics in the
// benchmark, located in the utils subdirectory. It formats hashrate, elapsed
// time and numbers for consistent output in reports and logs.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// SI prefixes used above 1000 H/s
const RATE_PREFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

/// Utility functions for formatting benchmark statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format hashrate with base-1000 prefixes, e.g. 1_500_000.0 -> "1.5 MH/s"
    pub fn format_hashrate(hashrate: f64) -> String {
        // Fractional H/s are dropped before scaling
        let whole = if hashrate.is_finite() && hashrate > 0.0 {
            hashrate as u64
        } else {
            0
        };
        if whole < 1000 {
            return format!("{} H/s", whole);
        }

        let mut scaled = whole as f64;
        let mut exp = 0;
        while scaled >= 1000.0 && exp < RATE_PREFIXES.len() {
            scaled /= 1000.0;
            exp += 1;
        }
        format!("{:.1} {}H/s", scaled, RATE_PREFIXES[exp - 1])
    }

    /// Format elapsed time as seconds with four decimals
    pub fn format_duration(duration: Duration) -> String {
        Self::format_seconds(duration.as_secs_f64())
    }

    pub fn format_seconds(seconds: f64) -> String {
        format!("{:.4} s", seconds)
    }

    /// Format large numbers with suffixes (K, M, B)
    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }
}

// Changelog:
// - v1.1.0 (2026-10-18): Hashrate formatting for the difficulty sweep.
//   - format_hashrate now truncates to whole H/s and scales through k..E in
//     base 1000 with one decimal.
//   - format_duration prints seconds with four decimals instead of "Ns ago".
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
