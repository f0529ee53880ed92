// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/jobs.rs
// Version: 2.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file builds the per-level work items of a sweep: the difficulty, its
// target and the message hashed in front of every nonce.

use crate::core::U256;
use crate::core::difficulty::{Target, digest_hex};
use crate::core::error::PowError;
use crate::core::types::MessageScheme;
use std::ops::RangeInclusive;

/// One difficulty level of a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct LevelJob {
    pub difficulty_bits: u32,
    pub target: Target,
    pub message: String,
}

impl LevelJob {
    pub fn new(difficulty_bits: u32, message: String) -> Result<Self, PowError> {
        Ok(Self {
            difficulty_bits,
            target: Target::from_bits(difficulty_bits)?,
            message,
        })
    }
}

/// prefix ++ decimal(difficulty_bits)
pub fn independent_message(prefix: &str, difficulty_bits: u32) -> String {
    format!("{}{}", prefix, difficulty_bits)
}

/// prefix ++ hex(previous digest); the first level of a chain has no previous digest
pub fn chained_message(prefix: &str, previous: Option<&U256>) -> String {
    match previous {
        Some(digest) => format!("{}{}", prefix, digest_hex(digest)),
        None => prefix.to_string(),
    }
}

/// Message for a level under the given scheme
pub fn level_message(
    scheme: MessageScheme,
    prefix: &str,
    difficulty_bits: u32,
    previous: Option<&U256>,
) -> String {
    match scheme {
        MessageScheme::Independent => independent_message(prefix, difficulty_bits),
        MessageScheme::Chained => chained_message(prefix, previous),
    }
}

/// Jobs for every level of an independent sweep, easiest first
pub fn create_level_jobs(
    prefix: &str,
    levels: RangeInclusive<u32>,
) -> Result<Vec<LevelJob>, PowError> {
    levels
        .map(|bits| LevelJob::new(bits, independent_message(prefix, bits)))
        .collect()
}

// Changelog:
// - v2.0.0 (2026-10-18): Level jobs for the difficulty sweep.
//   - Replaced the static pool-style benchmark jobs and nBits conversion.
//   - Messages are either prefix ++ difficulty or prefix ++ previous digest.
// - v1.0.14 (2025-06-17): Static SHA3x and SHA-256 benchmark jobs.
