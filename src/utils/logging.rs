// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file builds the log4rs configuration for the benchmark binary, located
// in the utils subdirectory. Logs go to stderr (and optionally a file) so the
// per-level report on stdout stays machine readable.
//
// Tree Location:
// - src/utils/logging.rs (logger setup)
// - Depends on: log, log4rs, anyhow

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l:<5})} {t} - {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} [{T}] {t} - {m}{n}";

/// Build the logger configuration without installing it
pub fn build_log_config(level: LevelFilter, log_file: Option<&Path>) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let stderr = Appender::builder().build("stderr", Box::new(stderr));
    let mut builder = Config::builder().appender(stderr);
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = log_file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        let file = Appender::builder().build("file", Box::new(file));
        builder = builder.appender(file);
        root = root.appender("file");
    }

    builder
        .build(root.build(level))
        .context("Invalid logger configuration")
}

/// Install the global logger
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let config = build_log_config(level, log_file)?;
    log4rs::init_config(config).context("Logger already initialised")?;
    Ok(())
}

// Changelog:
// - v1.0.0 (2026-10-18): Programmatic log4rs setup.
//   - Console appender on stderr with level highlighting.
//   - Optional file appender selected by --log-file.
