//! Descriptive statistics for normalized samples in `[0, 1]`.
//!
//! Mean and standard deviation come from `statrs`; the mode is estimated as
//! the center of the fullest fixed-width histogram bin.

use statrs::statistics::{Data, Distribution};

use crate::digest_random_error::{DigestRandomError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample (n - 1) standard deviation; 0.0 for a single value.
    pub std_dev: f64,
    /// Center of the fullest bin; ties go to the lowest bin.
    pub mode: f64,
    pub histogram: Vec<usize>,
}

impl SampleSummary {
    /// Summarizes `values`, binning `[0, 1]` into `bins` equal-width bins.
    ///
    /// Values of exactly 1.0 fall into the last bin.
    ///
    /// # Returns
    /// - `Err(EmptySample)` - no values
    /// - `Err(InvalidSampleSize)` - `bins == 0`
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(DigestRandomError::EmptySample(
                "cannot summarize an empty sample",
            ));
        }
        if bins == 0 {
            return Err(DigestRandomError::InvalidSampleSize(
                "histogram bin count must be > 0",
            ));
        }

        let data = Data::new(values.to_vec());
        let mean = data
            .mean()
            .ok_or(DigestRandomError::StatisticsUnavailable("mean undefined"))?;
        let std_dev = if values.len() < 2 {
            0.0
        } else {
            data.std_dev()
                .ok_or(DigestRandomError::StatisticsUnavailable("variance undefined"))?
        };

        let mut histogram = vec![0usize; bins];
        for &value in values {
            let bin = ((value.clamp(0.0, 1.0) * bins as f64) as usize).min(bins - 1);
            histogram[bin] += 1;
        }

        let peak = histogram.iter().copied().max().unwrap_or(0);
        let mode_bin = histogram.iter().position(|&c| c == peak).unwrap_or(0);

        Ok(Self {
            count: values.len(),
            mean,
            std_dev,
            mode: (mode_bin as f64 + 0.5) / bins as f64,
            histogram,
        })
    }
}

impl std::fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} mean={:.4} sd={:.4} mode~{:.2}",
            self.count, self.mean, self.std_dev, self.mode
        )
    }
}
