//! Xorshift32 mixing step applied to the generator state before every draw.
//!
//! # Algorithm
//! Marsaglia's (13, 17, 5) triple on a 32-bit word:
//! ```text
//! s ^= s << 13
//! s ^= s >> 17
//! s ^= s << 5
//! ```
//! Shifts on `u32` drop overflowing bits, so every step stays inside 32 bits.
//!
//! # Degenerate State
//! Zero maps to zero. Nonzero states never reach zero (the map is a
//! bijection), so the generator only has to keep zero out at seeding time.

/// Advances `state` by one xorshift32 step.
///
/// Total and deterministic over all 2^32 inputs.
#[inline]
pub fn mix(state: u32) -> u32 {
    let mut s = state;
    s ^= s << 13;
    s ^= s >> 17;
    s ^= s << 5;
    s
}
