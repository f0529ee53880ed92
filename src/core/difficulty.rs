// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/difficulty.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file maps a difficulty expressed in leading zero bits to the numeric
// target a digest has to stay below, located in the core subdirectory. The
// target for zero bits is 2^256, one past the largest digest, so targets are
// held in a 512-bit integer.

use crate::core::error::PowError;
use log::debug;
use uint::construct_uint;

const LOG_TARGET: &str = "pow_bench::difficulty";

construct_uint! {
    pub struct U256(4);
}

construct_uint! {
    pub struct U512(8);
}

/// Width of the digest space in bits
pub const DIGEST_BITS: u32 = 256;

/// Highest difficulty the default sweep runs
pub const MAX_SWEEP_BITS: u32 = 31;

impl From<U256> for U512 {
    fn from(value: U256) -> Self {
        let U256(words) = value;
        U512([words[0], words[1], words[2], words[3], 0, 0, 0, 0])
    }
}

/// Upper bound (exclusive) a digest must fall below
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Target(U512);

impl Target {
    /// target = 2^(256 - bits)
    pub fn from_bits(bits: u32) -> Result<Self, PowError> {
        if bits > DIGEST_BITS {
            return Err(PowError::DifficultyOutOfRange { bits });
        }
        let target = U512::one() << (DIGEST_BITS - bits);
        debug!(target: LOG_TARGET, "{} bits -> target {:x}", bits, target);
        Ok(Self(target))
    }

    /// A target no digest can meet
    pub fn zero() -> Self {
        Self(U512::zero())
    }

    pub fn from_value(value: U512) -> Self {
        Self(value)
    }

    pub fn value(&self) -> U512 {
        self.0
    }

    /// Strict `digest < target`
    pub fn is_met_by(&self, digest: &U256) -> bool {
        U512::from(*digest) < self.0
    }
}

/// Convenience wrapper returning the bare integer target
pub fn difficulty_to_target(bits: u32) -> Result<U512, PowError> {
    Target::from_bits(bits).map(|target| target.value())
}

/// Digest rendered as 64 lowercase hex characters
pub fn digest_hex(digest: &U256) -> String {
    hex::encode(digest.to_big_endian())
}

/// Number of leading zero bits of a digest
pub fn leading_zero_bits(digest: &U256) -> u32 {
    DIGEST_BITS - digest.bits() as u32
}

// Changelog:
// - v1.0.0 (2026-10-18): Rewrote the difficulty module for bit-based targets.
//   - Replaced pool share difficulty and nbits decoding with 2^(256 - bits).
//   - Added U512 so the zero-bit target 2^256 is exact.
//   - Target::is_met_by replaces hash_meets_target and uses a strict comparison.
