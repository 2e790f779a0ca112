//! Counter-driven digest sampler and the generator that owns its state.
//!
//! # Purpose
//! Produces a stream of integers in `[0, 100]` from a 32-bit state that is
//! advanced by the xorshift mixer and a 64-bit counter that increases by one
//! on every draw. Each output is a SHA-256 digest of the two combined, so
//! the stream never repeats a `(state, counter)` pair within the counter's
//! range.
//!
//! # ⚠️ CRITICAL LIMITATIONS ⚠️
//! - **NOT cryptographically secure** - the whole future stream follows from
//!   32 bits of state plus a public counter
//! - **NOT suitable for** keys, tokens, nonces or any security-sensitive use
//! - Only 101 distinct outputs; this is a teaching generator
//!
//! # Algorithm (one draw)
//! ```text
//! state    = mix(state)                         // xorshift32
//! combined = state as u64 + counter             // wrapping
//! digest   = SHA-256(decimal_ascii(combined))   // canonical encoding
//! raw      = digest as big-endian uint mod 101  // 0 ..= 100
//! counter += 1
//! ```
//!
//! # Canonical Encoding
//! `combined` is hashed as its base-10 ASCII digits: no sign, no padding, no
//! separators (`0` encodes as `"0"`). Any other formatting changes every
//! output and breaks the golden vectors.
//!
//! # Ownership
//! A [`DigestGenerator`] exclusively owns its [`GeneratorState`]. It is not
//! `Clone`: two handles on one stream would replay the same
//! draws. Independent streams come from independent seeding, one generator
//! per thread.

use crate::digest_random_error::{DigestRandomError, Result};
use crate::entropy_source::{EntropySource, OsEntropySource};
use crate::seed_reducer::{reduce, sha256, SEED_BYTES};
use crate::state_mixer::mix;

/// Number of distinct raw outcomes (`0..=RAW_MAX`).
pub const RAW_OUTCOMES: u32 = 101;

/// Largest raw output.
pub const RAW_MAX: u32 = RAW_OUTCOMES - 1;

/// Entropy draws attempted before giving up on a nonzero seed.
pub const MAX_SEED_ATTEMPTS: usize = 4;

/// Complete internal state of one generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorState {
    /// Mixed 32-bit state; zero only if constructed degenerate (rejected).
    pub state: u32,
    /// Number of draws made so far.
    pub counter: u64,
}

/// Base-10 ASCII encoding of the combined state and counter.
pub fn canonical_encoding(state: u32, counter: u64) -> String {
    (state as u64).wrapping_add(counter).to_string()
}

/// Reduces a 256-bit big-endian digest modulo [`RAW_OUTCOMES`].
///
/// Horner's rule over the bytes keeps every intermediate below 101 * 256,
/// so the result is exact without big-integer arithmetic.
fn digest_mod_outcomes(digest: &[u8; 32]) -> u32 {
    digest
        .iter()
        .fold(0u32, |acc, &byte| (acc * 256 + byte as u32) % RAW_OUTCOMES)
}

/// One digest step: pure function of `(state, counter)`.
///
/// # Returns
/// `(raw, next_counter)` where `raw` is in `[0, 100]` and
/// `next_counter == counter + 1`.
///
/// # Examples
/// ```
/// use digest_random::digest_generator::sample;
///
/// let (raw, next) = sample(0x0D5F_2925, 0);
/// assert_eq!((raw, next), (6, 1));
/// ```
pub fn sample(state: u32, counter: u64) -> (u32, u64) {
    let encoded = canonical_encoding(state, counter);
    let raw = digest_mod_outcomes(&sha256(encoded.as_bytes()));
    (raw, counter.wrapping_add(1))
}

/// A source of raw `[0, 100]` draws; the seam the distribution mapper consumes.
pub trait RawStream {
    /// Next raw value in `[0, RAW_MAX]`.
    fn next_raw(&mut self) -> u32;

    /// Next raw value scaled to `[0.0, 1.0]` (inclusive at both ends).
    fn next_normalized(&mut self) -> f64 {
        self.next_raw() as f64 / RAW_MAX as f64
    }
}

/// Hash-driven generator seeded once from an [`EntropySource`].
#[derive(Debug)]
pub struct DigestGenerator {
    state: GeneratorState,
}

impl DigestGenerator {
    /// Seeds a generator from `source`.
    ///
    /// # Degenerate Seed Handling
    /// If the 32 entropy bytes reduce to exactly 0 (the mixer's fixed point),
    /// fresh bytes are drawn, up to [`MAX_SEED_ATTEMPTS`] times. Nonzero
    /// seeds are used exactly as reduced.
    ///
    /// # Returns
    /// - `Ok(DigestGenerator)` - Seeded with counter at 0
    /// - `Err(EntropyUnavailable)` - Provider failed or only produced zero seeds
    /// - `Err(InvalidSeedLength)` - Provider returned the wrong number of bytes
    pub fn from_entropy<S: EntropySource + ?Sized>(source: &S) -> Result<Self> {
        let seed = draw_nonzero_seed(|| {
            let bytes = source.get_random_bytes(SEED_BYTES)?;
            reduce(&bytes)
        })?;
        log::debug!("digest generator seeded from entropy source");
        log::trace!("initial state {:#010x}", seed);

        Ok(Self {
            state: GeneratorState {
                state: seed,
                counter: 0,
            },
        })
    }

    /// Seeds from the host's secure random provider.
    pub fn from_os_entropy() -> Result<Self> {
        Self::from_entropy(&OsEntropySource)
    }

    /// Builds a generator from an already-reduced state, counter at 0.
    ///
    /// # Returns
    /// - `Err(DegenerateSeed)` - `state == 0`
    pub fn from_state(state: u32) -> Result<Self> {
        // Production catch: zero would freeze the mixer
        if state == 0 {
            return Err(DigestRandomError::DegenerateSeed(
                "state must be nonzero; zero is a fixed point of the mixer",
            ));
        }

        Ok(Self {
            state: GeneratorState { state, counter: 0 },
        })
    }

    /// Snapshot of the current state, for inspection and tests.
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Mixes the state, digests it with the counter, advances the counter.
    pub fn next_raw(&mut self) -> u32 {
        self.state.state = mix(self.state.state);
        let (raw, next_counter) = sample(self.state.state, self.state.counter);
        self.state.counter = next_counter;
        raw
    }

    /// Draws `n` raw values.
    ///
    /// # Returns
    /// - `Err(InvalidSampleSize)` - `n == 0`
    pub fn raw_sample(&mut self, n: usize) -> Result<Vec<u32>> {
        if n == 0 {
            return Err(DigestRandomError::InvalidSampleSize(
                "sample size must be > 0",
            ));
        }

        Ok((0..n).map(|_| self.next_raw()).collect())
    }
}

impl RawStream for DigestGenerator {
    fn next_raw(&mut self) -> u32 {
        DigestGenerator::next_raw(self)
    }
}

/// Calls `draw` until it yields a nonzero seed, at most [`MAX_SEED_ATTEMPTS`] times.
fn draw_nonzero_seed(mut draw: impl FnMut() -> Result<u32>) -> Result<u32> {
    for attempt in 1..=MAX_SEED_ATTEMPTS {
        let seed = draw()?;
        if seed != 0 {
            return Ok(seed);
        }
        log::warn!(
            "entropy reduced to the zero state (attempt {}/{}), drawing again",
            attempt,
            MAX_SEED_ATTEMPTS
        );
    }

    Err(DigestRandomError::EntropyUnavailable(
        "entropy repeatedly reduced to the zero state",
    ))
}

// ============================================================================
// TESTING
// ============================================================================
