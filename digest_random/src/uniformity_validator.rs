//! Chi-square goodness-of-fit check of raw output against a uniform reference.
//!
//! # Algorithm
//! 1. Split the 101 raw outcomes into `k` buckets: `bucket = value * k / 101`
//! 2. Count observed frequency `O_i` per bucket
//! 3. Expected frequency is `E = n / k` for every bucket
//! 4. `chi2 = sum((O_i - E)^2 / E)`
//! 5. `p = P(X >= chi2)` for `X ~ ChiSquared(k - 1)`
//!
//! # Reporting Convention
//! `p > 0.05` reads as good uniformity, anything else as poor. The validator
//! only reports; nothing downstream refuses a stream on a poor verdict.
//!
//! # Known Bias
//! 101 is prime, so no `k >= 2` splits the outcomes evenly (for `k = 10` the
//! first bucket covers 11 values). With the flat `n / k` expectation this
//! slowly inflates `chi2` as `n` grows; at `n ~ 1000` the effect is well
//! below the test's resolution.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::digest_generator::{DigestGenerator, RAW_MAX, RAW_OUTCOMES};
use crate::digest_random_error::{DigestRandomError, Result};

/// Significance threshold used by the reporting convention.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Most buckets a test can use: one per raw outcome.
pub const MAX_BUCKETS: usize = RAW_OUTCOMES as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformityVerdict {
    Good,
    Poor,
}

impl std::fmt::Display for UniformityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good uniformity"),
            Self::Poor => write!(f, "poor uniformity"),
        }
    }
}

/// Outcome of one chi-square test.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformityReport {
    pub chi2_statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: usize,
    pub bucket_counts: Vec<usize>,
}

impl UniformityReport {
    /// `Good` when `p_value > alpha`.
    pub fn verdict(&self, alpha: f64) -> UniformityVerdict {
        if self.p_value > alpha {
            UniformityVerdict::Good
        } else {
            UniformityVerdict::Poor
        }
    }
}

/// Tally of repeated independent tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformityTrials {
    pub trials: usize,
    pub good: usize,
}

impl UniformityTrials {
    pub fn pass_rate(&self) -> f64 {
        self.good as f64 / self.trials as f64
    }
}

/// Bucket of a raw value; values above `RAW_MAX` count as `RAW_MAX`.
///
/// `bucket_count` must already be within `2..=MAX_BUCKETS`.
#[inline]
fn bucket_index(value: u32, bucket_count: usize) -> usize {
    value.min(RAW_MAX) as usize * bucket_count / RAW_OUTCOMES as usize
}

/// Observed frequency per bucket.
fn bucket_counts(sample: &[u32], bucket_count: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bucket_count];
    for &value in sample {
        counts[bucket_index(value, bucket_count)] += 1;
    }
    counts
}

/// Runs the chi-square uniformity test over raw `[0, 100]` values.
///
/// # Arguments
/// * `sample` - Raw generator outputs
/// * `bucket_count` - Number of buckets, `2..=MAX_BUCKETS`
///
/// # Returns
/// - `Ok(UniformityReport)` - statistic, p-value and observed counts
/// - `Err(EmptySample)` - empty sample or `bucket_count < 2`
/// - `Err(InvalidSampleSize)` - more buckets than raw outcomes
///
/// # Examples
/// ```
/// use digest_random::digest_generator::DigestGenerator;
/// use digest_random::uniformity_validator::test_uniformity;
///
/// let mut rng = DigestGenerator::from_state(42).unwrap();
/// let sample = rng.raw_sample(1000).unwrap();
/// let report = test_uniformity(&sample, 10).unwrap();
/// assert_eq!(report.degrees_of_freedom, 9);
/// assert!((0.0..=1.0).contains(&report.p_value));
/// ```
pub fn test_uniformity(sample: &[u32], bucket_count: usize) -> Result<UniformityReport> {
    if sample.is_empty() {
        return Err(DigestRandomError::EmptySample("sample must not be empty"));
    }
    if bucket_count < 2 {
        return Err(DigestRandomError::EmptySample(
            "bucket count must be at least 2",
        ));
    }
    // Production catch: extra buckets could never be filled, and a huge
    // count would exhaust memory before any counting starts
    if bucket_count > MAX_BUCKETS {
        return Err(DigestRandomError::InvalidSampleSize(
            "bucket count must not exceed the 101 raw outcomes",
        ));
    }

    let counts = bucket_counts(sample, bucket_count);
    let expected = sample.len() as f64 / bucket_count as f64;
    let chi2_statistic: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let degrees_of_freedom = bucket_count - 1;
    let reference = ChiSquared::new(degrees_of_freedom as f64).map_err(|_| {
        DigestRandomError::StatisticsUnavailable("invalid chi-square degrees of freedom")
    })?;
    let p_value = reference.sf(chi2_statistic);

    log::debug!(
        "chi-square uniformity: n={} k={} chi2={:.4} p={:.4}",
        sample.len(),
        bucket_count,
        chi2_statistic,
        p_value
    );

    Ok(UniformityReport {
        chi2_statistic,
        p_value,
        degrees_of_freedom,
        bucket_counts: counts,
    })
}

/// Draws `trials` fresh samples from `rng` and tests each one.
///
/// # Returns
/// - `Err(InvalidSampleSize)` - `trials == 0`, `sample_size == 0`, or
///   `bucket_count > MAX_BUCKETS`
/// - `Err(EmptySample)` - `bucket_count < 2`
pub fn run_uniformity_trials(
    rng: &mut DigestGenerator,
    trials: usize,
    sample_size: usize,
    bucket_count: usize,
    alpha: f64,
) -> Result<UniformityTrials> {
    if trials == 0 {
        return Err(DigestRandomError::InvalidSampleSize(
            "trial count must be > 0",
        ));
    }

    let mut good = 0;
    for _ in 0..trials {
        let sample = rng.raw_sample(sample_size)?;
        if test_uniformity(&sample, bucket_count)?.verdict(alpha) == UniformityVerdict::Good {
            good += 1;
        }
    }

    log::info!("{}/{} uniformity trials judged good", good, trials);
    Ok(UniformityTrials { trials, good })
}

// ============================================================================
// TESTING
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy_source::FixedEntropySource;

    fn seeded(byte: u8) -> DigestGenerator {
        DigestGenerator::from_entropy(&FixedEntropySource::filled(byte)).expect("Valid entropy")
    }

    // ===========================================
    // Test: Bucketing
    // ===========================================
    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_index(0, 10), 0);
        assert_eq!(bucket_index(10, 10), 0);
        assert_eq!(bucket_index(11, 10), 1);
        assert_eq!(bucket_index(100, 10), 9);
        assert_eq!(bucket_index(500, 10), 9, "Out-of-range values clamp");
    }

    #[test]
    fn test_every_outcome_lands_in_a_bucket() {
        for k in 2..=101 {
            let all: Vec<u32> = (0..=RAW_MAX).collect();
            let counts = bucket_counts(&all, k);
            assert_eq!(counts.iter().sum::<usize>(), RAW_OUTCOMES as usize);
            assert!(counts.iter().all(|&c| c > 0), "Empty bucket with k={}", k);
        }
    }

    // ===========================================
    // Test: Statistic and p-value
    // ===========================================
    #[test]
    fn test_hand_computed_statistic() {
        // Buckets of [0, 50, 100, 25] with k=4: [2, 1, 0, 1], E=1
        let report = test_uniformity(&[0, 50, 100, 25], 4).expect("Valid input");
        assert_eq!(report.bucket_counts, vec![2, 1, 0, 1]);
        assert!((report.chi2_statistic - 2.0).abs() < 1e-12);
        assert_eq!(report.degrees_of_freedom, 3);
        assert!(
            (report.p_value - 0.572_406_7).abs() < 1e-6,
            "p {}",
            report.p_value
        );
    }

    #[test]
    fn test_perfect_fit() {
        let report = test_uniformity(&[0, 100], 2).expect("Valid input");
        assert_eq!(report.chi2_statistic, 0.0);
        assert!(report.p_value > 0.999, "p {}", report.p_value);
        assert_eq!(report.verdict(DEFAULT_ALPHA), UniformityVerdict::Good);
    }

    #[test]
    fn test_constant_sample_is_poor() {
        let report = test_uniformity(&[50; 1000], 10).expect("Valid input");
        assert!((report.chi2_statistic - 9000.0).abs() < 1e-9);
        assert!(report.p_value < 1e-6);
        assert_eq!(report.verdict(DEFAULT_ALPHA), UniformityVerdict::Poor);
    }

    #[test]
    fn test_verdict_threshold_is_strict() {
        let report = UniformityReport {
            chi2_statistic: 0.0,
            p_value: 0.05,
            degrees_of_freedom: 9,
            bucket_counts: Vec::new(),
        };
        assert_eq!(report.verdict(0.05), UniformityVerdict::Poor);
    }

    // ===========================================
    // Test: Generator Output Quality
    // ===========================================
    #[test]
    fn test_zero_seed_sample_is_uniform() {
        let mut rng =
            DigestGenerator::from_entropy(&FixedEntropySource::zeros()).expect("Valid entropy");
        let sample = rng.raw_sample(1000).expect("n > 0");
        let report = test_uniformity(&sample, 10).expect("Valid input");
        assert!(
            (report.chi2_statistic - 5.82).abs() < 1e-9,
            "chi2 {}",
            report.chi2_statistic
        );
        assert_eq!(report.verdict(DEFAULT_ALPHA), UniformityVerdict::Good);
    }

    #[test]
    fn test_large_majority_of_seeds_pass() {
        // Project Context: a sound generator fails ~5% of trials by construction
        let good = (1u8..=20)
            .filter(|&byte| {
                let sample = seeded(byte).raw_sample(1000).expect("n > 0");
                test_uniformity(&sample, 10)
                    .expect("Valid input")
                    .verdict(DEFAULT_ALPHA)
                    == UniformityVerdict::Good
            })
            .count();
        assert!(good >= 16, "Only {} of 20 seeds judged uniform", good);
    }

    #[test]
    fn test_repeated_trials() {
        let mut rng = seeded(1);
        let trials =
            run_uniformity_trials(&mut rng, 20, 1000, 10, DEFAULT_ALPHA).expect("Valid input");
        assert_eq!(trials.trials, 20);
        assert!(trials.pass_rate() >= 0.8, "Pass rate {}", trials.pass_rate());
        assert_eq!(rng.state().counter, 20_000);
    }

    // ===========================================
    // Test: Error Paths
    // ===========================================
    #[test]
    fn test_empty_sample_rejected() {
        assert!(matches!(
            test_uniformity(&[], 10),
            Err(DigestRandomError::EmptySample(_))
        ));
    }

    #[test]
    fn test_single_bucket_rejected() {
        assert!(matches!(
            test_uniformity(&[1, 2, 3], 1),
            Err(DigestRandomError::EmptySample(_))
        ));
    }

    #[test]
    fn test_oversized_bucket_count_rejected() {
        // Project Context: must return an error, never allocate or overflow
        for bucket_count in [MAX_BUCKETS + 1, usize::MAX / 64, usize::MAX] {
            assert!(
                matches!(
                    test_uniformity(&[1, 2, 3], bucket_count),
                    Err(DigestRandomError::InvalidSampleSize(_))
                ),
                "Accepted bucket_count={}",
                bucket_count
            );
        }
    }

    #[test]
    fn test_one_bucket_per_outcome_accepted() {
        let all: Vec<u32> = (0..=RAW_MAX).collect();
        let report = test_uniformity(&all, MAX_BUCKETS).expect("Valid input");
        assert_eq!(report.chi2_statistic, 0.0);
        assert_eq!(report.degrees_of_freedom, 100);
    }

    #[test]
    fn test_oversized_bucket_count_in_trials_rejected() {
        let mut rng = seeded(3);
        assert!(matches!(
            run_uniformity_trials(&mut rng, 1, 100, MAX_BUCKETS + 1, DEFAULT_ALPHA),
            Err(DigestRandomError::InvalidSampleSize(_))
        ));
    }

    #[test]
    fn test_zero_trials_rejected() {
        let mut rng = seeded(2);
        assert!(matches!(
            run_uniformity_trials(&mut rng, 0, 1000, 10, DEFAULT_ALPHA),
            Err(DigestRandomError::InvalidSampleSize(_))
        ));
    }
}
