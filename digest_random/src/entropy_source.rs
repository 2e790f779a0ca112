//! Entropy capability consumed once per generator at construction time.
//!
//! # Purpose
//! Separates "where the unpredictable bytes come from" from the generator
//! itself, so production code seeds from the host's secure random provider
//! while tests substitute a fixed byte pattern and get a reproducible stream.
//!
//! # Hardware Entropy Strategy
//! [`OsEntropySource`] delegates to the `getrandom` crate, which maps to:
//! - Linux: getrandom() syscall, falling back to /dev/urandom
//! - Windows: BCryptGenRandom / ProcessPrng
//! - macOS: getentropy()
//!
//! The provider is expected to be safe for concurrent independent calls;
//! both implementations here hold no mutable state.

use crate::digest_random_error::{DigestRandomError, Result};

/// Supplies `n` bytes of high-entropy input on demand.
pub trait EntropySource {
    /// Returns exactly `n` bytes, or `EntropyUnavailable` if the provider failed.
    fn get_random_bytes(&self, n: usize) -> Result<Vec<u8>>;
}

/// Host cryptographically secure random byte provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropySource;

impl EntropySource for OsEntropySource {
    fn get_random_bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; n];
        getrandom::getrandom(&mut buffer).map_err(|e| {
            log::error!("os entropy provider failed: {}", e);
            DigestRandomError::EntropyUnavailable("os entropy provider failed")
        })?;
        Ok(buffer)
    }
}

/// Deterministic stand-in that repeats a fixed byte pattern.
///
/// # Use Cases
/// - Golden-vector regression tests
/// - Reproducing a specific stream while debugging
///
/// # Security Warning
/// The pattern is the seed. NEVER use this outside tests and demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEntropySource {
    pattern: Vec<u8>,
}

impl FixedEntropySource {
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Thirty-two zero bytes, the golden-vector seed.
    pub fn zeros() -> Self {
        Self::new(vec![0u8; 32])
    }

    /// Thirty-two copies of `byte`; handy for sweeping many distinct seeds.
    pub fn filled(byte: u8) -> Self {
        Self::new(vec![byte; 32])
    }
}

impl EntropySource for FixedEntropySource {
    fn get_random_bytes(&self, n: usize) -> Result<Vec<u8>> {
        // Production catch: an empty pattern cannot produce any bytes
        if self.pattern.is_empty() {
            return Err(DigestRandomError::EntropyUnavailable(
                "fixed entropy pattern is empty",
            ));
        }

        Ok(self.pattern.iter().copied().cycle().take(n).collect())
    }
}
