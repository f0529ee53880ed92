// PoW Bench - Free and Open Source Software Statement
//
// This project, pow-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/hash.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the digest adapter used by the nonce search, located in
// the core subdirectory. Every supported algorithm produces 32 bytes which are
// read as a big-endian unsigned 256-bit integer.
//
// Tree Location:
// - src/core/hash.rs (digest adapter)
// - Depends on: sha2, sha3, uint (via difficulty::U256)

use crate::core::difficulty::U256;
use crate::core::error::PowError;
use sha2::{Digest, Sha256};
use sha3::Sha3_256;
use std::fmt;
use std::str::FromStr;

/// Anything that can turn a candidate byte string into a 256-bit digest value.
pub trait PowHash {
    fn hash(&self, input: &[u8]) -> U256;
}

/// Digest algorithm variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Sha256,
    /// Double SHA-256 as used by Bitcoin headers
    Sha256d,
    Sha3_256,
    /// Triple SHA3-256 as used by Tari
    Sha3x,
}

impl Algorithm {
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha256d => "sha256d",
            Algorithm::Sha3_256 => "sha3-256",
            Algorithm::Sha3x => "sha3x",
        }
    }

    /// Raw 32-byte digest of `input`
    pub fn digest_bytes(&self, input: &[u8]) -> [u8; 32] {
        match self {
            Algorithm::Sha256 => Sha256::digest(input).into(),
            Algorithm::Sha256d => {
                let first = Sha256::digest(input);
                Sha256::digest(first).into()
            }
            Algorithm::Sha3_256 => Sha3_256::digest(input).into(),
            Algorithm::Sha3x => {
                let hash1 = Sha3_256::digest(input);
                let hash2 = Sha3_256::digest(hash1);
                Sha3_256::digest(hash2).into()
            }
        }
    }
}

impl PowHash for Algorithm {
    fn hash(&self, input: &[u8]) -> U256 {
        U256::from_big_endian(&self.digest_bytes(input))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            "sha256d" => Ok(Algorithm::Sha256d),
            "sha3-256" | "sha3_256" | "sha3" => Ok(Algorithm::Sha3_256),
            "sha3x" => Ok(Algorithm::Sha3x),
            _ => Err(PowError::UnsupportedDigestAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// SHA-256 of `input` as an unsigned integer
pub fn sha256(input: &[u8]) -> U256 {
    Algorithm::Sha256.hash(input)
}

// Changelog:
// - v1.0.0 (2026-10-18): Digest adapter for the difficulty sweep.
//   - Folded the SHA256d and SHA3x routines into one Algorithm enum.
//   - Digests are returned as U256 instead of byte vectors so the search can
//     compare them against a target directly.
//   - Added the PowHash trait so tests can count hash invocations.
