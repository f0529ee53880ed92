// PoW Bench - Free and Open Source Software Statement
//
// File: tests/report_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Tests for the report sinks and the logger configuration.
//
// Tree Location:
// - tests/report_test.rs (report and logging tests)
// - Depends on: pow-bench, serde_json, tempfile

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use pow_bench::benchmark::report::{ConsoleSink, JsonSink, ReportSink, format_level_line};
    use pow_bench::core::types::{BenchmarkSummary, LevelReport, Schedule};
    use pow_bench::utils::build_log_config;
    use std::time::Duration;

    fn sample_report(exhausted: bool) -> LevelReport {
        LevelReport {
            difficulty_bits: 3,
            message: "test block with transactions3".to_string(),
            nonce: 17,
            digest_hex: format!("0{}", "f".repeat(63)),
            elapsed_seconds: 0.25,
            instantaneous_rate: 1_500_000.0,
            aggregate_rate: 2_000.0,
            exhausted,
            cancelled: false,
        }
    }

    fn sample_summary() -> BenchmarkSummary {
        BenchmarkSummary {
            levels_run: 1,
            found: 1,
            exhausted: 0,
            cancelled: 0,
            total_nonces: 17,
            duration: Duration::from_millis(250),
            aggregate_rate: 68.0,
            peak_rate: 68.0,
            thread_count: 1,
            schedule: Schedule::Sequential,
        }
    }

    #[test]
    fn test_plain_line_layout() {
        let line = format_level_line(&sample_report(false), false);
        assert_eq!(
            line,
            format!(
                "[003 bits][1.5 MH/s] [Tot: 2.0 kH/s][0.2500 s][Nonce 17][Hash 0{}]",
                "f".repeat(63)
            )
        );
    }

    #[test]
    fn test_exhausted_line_is_flagged() {
        let line = format_level_line(&sample_report(true), false);
        assert!(line.ends_with("[EXHAUSTED]"));
    }

    #[test]
    fn test_console_sink_writes_lines() {
        let mut sink = ConsoleSink::new(Vec::new(), false);
        sink.report(&sample_report(false));
        sink.finish(&sample_summary());
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[003 bits]"));
        assert!(lines[1].contains("1 levels (1 found, 0 exhausted, 0 cancelled)"));
    }

    #[test]
    fn test_json_sink_emits_records() {
        let mut sink = JsonSink::new(Vec::new());
        sink.report(&sample_report(true));
        sink.finish(&sample_summary());
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(record["difficulty_bits"], 3);
        assert_eq!(record["nonce"], 17);
        assert_eq!(record["exhausted"], true);
        assert_eq!(record["aggregate_rate"], 2_000.0);

        let summary: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(summary["summary"]["total_nonces"], 17);
        assert_eq!(summary["summary"]["schedule"], "sequential");
    }

    #[test]
    fn test_log_config_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("powbench.log");
        let config = build_log_config(LevelFilter::Debug, Some(&path)).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.appenders().len(), 2);
        assert!(path.exists(), "file appender creates the log file");
    }

    #[test]
    fn test_log_config_console_only() {
        let config = build_log_config(LevelFilter::Info, None).unwrap();
        assert_eq!(config.appenders().len(), 1);
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Report sink and logging tests.
