//! Seed reduction: 32 bytes of entropy in, one 32-bit initial state out.
//!
//! # Algorithm
//! ```text
//! digest = SHA-256(entropy)            // 256-bit digest
//! value  = digest as big-endian uint   // 0 .. 2^256 - 1
//! seed   = value & 0xFFFF_FFFF          // low 32 bits == last four bytes
//! ```
//! Hashing spreads any structure in the input over the whole 32-bit space,
//! so even a very regular buffer (all zeros) lands on an unremarkable seed.
//!
//! # Security Assumption
//! The reducer cannot tell a predictable buffer from a good one. Supplying
//! exactly 32 bytes of real entropy is the caller's responsibility.

use sha2::{Digest, Sha256};

use crate::digest_random_error::{DigestRandomError, Result};

/// Entropy buffer length accepted by [`reduce`].
pub const SEED_BYTES: usize = 32;

/// SHA-256 of `bytes` as a plain array.
pub(crate) fn sha256(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// Reduces an entropy buffer to the generator's initial 32-bit state.
///
/// # Arguments
/// * `entropy` - Exactly [`SEED_BYTES`] bytes of high-entropy input
///
/// # Returns
/// - `Ok(u32)` - Low 32 bits of the big-endian SHA-256 digest
/// - `Err(DigestRandomError::InvalidSeedLength)` - Buffer of any other length
///
/// # Examples
/// ```
/// use digest_random::seed_reducer::reduce;
///
/// let seed = reduce(&[0u8; 32]).unwrap();
/// assert_eq!(seed, 0x0D5F_2925);
/// ```
pub fn reduce(entropy: &[u8]) -> Result<u32> {
    // Production catch: reject short or oversized buffers
    if entropy.len() != SEED_BYTES {
        return Err(DigestRandomError::InvalidSeedLength(entropy.len()));
    }

    let digest = sha256(entropy);
    Ok(u32::from_be_bytes([
        digest[28], digest[29], digest[30], digest[31],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===========================================
    // Test: Golden Vector
    // ===========================================
    #[test]
    fn test_zero_entropy_golden_seed() {
        // SHA-256(32 x 0x00) ends in ...0d5f2925
        assert_eq!(reduce(&[0u8; 32]), Ok(0x0D5F_2925));
    }

    #[test]
    fn test_sha256_of_zero_block() {
        let digest = sha256(&[0u8; 32]);
        assert_eq!(
            digest[..4],
            [0x66, 0x68, 0x7a, 0xad],
            "Digest prefix mismatch: {:02x?}",
            digest
        );
    }

    // ===========================================
    // Test: Length Validation
    // ===========================================
    #[test]
    fn test_short_buffer_rejected() {
        assert_eq!(
            reduce(&[1u8; 16]),
            Err(DigestRandomError::InvalidSeedLength(16))
        );
    }

    #[test]
    fn test_long_buffer_rejected() {
        assert_eq!(
            reduce(&[1u8; 33]),
            Err(DigestRandomError::InvalidSeedLength(33))
        );
    }

    #[test]
    fn test_empty_buffer_rejected() {
        assert_eq!(reduce(&[]), Err(DigestRandomError::InvalidSeedLength(0)));
    }

    #[test]
    fn test_single_bit_change_moves_seed() {
        let mut entropy = [0u8; 32];
        let base = reduce(&entropy).expect("Valid length");
        entropy[0] = 1;
        assert_ne!(base, reduce(&entropy).expect("Valid length"));
    }

    proptest! {
        #[test]
        fn reduce_is_pure_for_any_buffer(entropy in proptest::collection::vec(any::<u8>(), SEED_BYTES)) {
            let first = reduce(&entropy);
            prop_assert!(first.is_ok());
            prop_assert_eq!(first, reduce(&entropy));
        }

        #[test]
        fn reduce_rejects_every_other_length(len in 0usize..128) {
            prop_assume!(len != SEED_BYTES);
            let entropy = vec![0xA5u8; len];
            prop_assert_eq!(reduce(&entropy), Err(DigestRandomError::InvalidSeedLength(len)));
        }
    }
}
