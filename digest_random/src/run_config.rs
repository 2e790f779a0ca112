//! Parameters for a generation-and-validation run, loadable from TOML.
//!
//! ```toml
//! sample_size = 1000
//! beta_points = 1000
//! bucket_count = 10
//! alpha = 0.05
//! trials = 20
//! summary_bins = 10
//! ```
//! Missing keys take their default; unknown keys are rejected.

use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::uniformity_validator::{DEFAULT_ALPHA, MAX_BUCKETS};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Raw draws for the uniform point cloud and the single chi-square test.
    pub sample_size: usize,
    /// Points in the beta-like cloud.
    pub beta_points: usize,
    pub bucket_count: usize,
    pub alpha: f64,
    /// Independent repeats for the pass-rate estimate.
    pub trials: usize,
    /// Histogram bins for the summaries' mode estimate.
    pub summary_bins: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sample_size: 1000,
            beta_points: 1000,
            bucket_count: 10,
            alpha: DEFAULT_ALPHA,
            trials: 20,
            summary_bins: 10,
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse run config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read run config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid run config {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.sample_size == 0 || self.beta_points == 0 || self.trials == 0 {
            bail!("sample_size, beta_points and trials must all be > 0");
        }
        if self.sample_size < 2 {
            bail!(
                "sample_size must be at least 2 to form a uniform point, got {}",
                self.sample_size
            );
        }
        if !(2..=MAX_BUCKETS).contains(&self.bucket_count) {
            bail!(
                "bucket_count must be in 2..={}, got {}",
                MAX_BUCKETS,
                self.bucket_count
            );
        }
        if self.summary_bins == 0 {
            bail!("summary_bins must be > 0");
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            bail!("alpha must be in (0, 1), got {}", self.alpha);
        }
        Ok(())
    }
}
