//! Error taxonomy shared by every stage of the digest generator.
//!
//! # Project Context
//! Every failure in this crate is a local contract violation detected at a
//! component boundary: a malformed entropy buffer, an unavailable entropy
//! provider, a zero-sized request, or an empty sample handed to the
//! validator. None of them are retried internally, none are transient.
//!
//! # Design Note
//! Error messages carry a short static context string so they read cleanly
//! in logs without leaking generator state.

/// Errors raised by seeding, sampling, mapping and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestRandomError {
    /// Entropy buffer handed to the seed reducer was not exactly 32 bytes.
    ///
    /// Carries the length actually received.
    InvalidSeedLength(usize),

    /// The entropy provider failed, or kept producing a degenerate seed.
    ///
    /// Context: fatal to generator construction, surfaced unchanged.
    EntropyUnavailable(&'static str),

    /// A generation request asked for zero values.
    InvalidSampleSize(&'static str),

    /// Validator received no data, or fewer than two buckets.
    EmptySample(&'static str),

    /// Explicit initial state of zero.
    ///
    /// Context: zero is a fixed point of the xorshift mixer, so the mixer
    /// would stop contributing to the stream.
    DegenerateSeed(&'static str),

    /// Reference chi-square distribution could not be built.
    StatisticsUnavailable(&'static str),
}

impl std::fmt::Display for DigestRandomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSeedLength(len) => write!(
                f,
                "DRNG seed error: expected {} entropy bytes, got {}",
                crate::seed_reducer::SEED_BYTES,
                len
            ),
            Self::EntropyUnavailable(msg) => write!(f, "DRNG entropy error: {}", msg),
            Self::InvalidSampleSize(msg) => write!(f, "DRNG sample size error: {}", msg),
            Self::EmptySample(msg) => write!(f, "DRNG validation error: {}", msg),
            Self::DegenerateSeed(msg) => write!(f, "DRNG seed error: {}", msg),
            Self::StatisticsUnavailable(msg) => write!(f, "DRNG statistics error: {}", msg),
        }
    }
}

impl std::error::Error for DigestRandomError {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DigestRandomError>;
