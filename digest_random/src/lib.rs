//! Hash-Driven Pseudo-Random Generator
//!
//! # Purpose
//! An educational generator whose 32-bit state is seeded once from an
//! entropy source, advanced by xorshift32 on every draw, and combined with a
//! draw counter under SHA-256 to produce integers in `[0, 100]`. On top of
//! the raw stream sit a uniform and a Beta(2,2)-like point mapping and a
//! chi-square uniformity check.
//!
//! # ⚠️ CRITICAL LIMITATIONS ⚠️
//! - **NOT a CSPRNG** even though it uses SHA-256: 32 bits of state
//! - **NOT portable across seeds**: only determinism from a given state is promised
//! - No persistence of generator state across runs
//!
//! # Data Flow
//! ```text
//! EntropySource -> seed_reducer::reduce -> state
//!     state -> state_mixer::mix -> digest_generator::sample(state, counter) -> raw [0,100]
//!     raw stream -> distribution_mapper -> points
//!     raw stream -> uniformity_validator -> chi2, p
//! ```

pub mod digest_generator;
pub mod digest_random_error;
pub mod distribution_mapper;
pub mod entropy_source;
pub mod run_config;
pub mod sample_summary;
pub mod seed_reducer;
pub mod state_mixer;
pub mod uniformity_validator;

pub use digest_generator::{DigestGenerator, GeneratorState, RawStream};
pub use digest_random_error::{DigestRandomError, Result};
pub use distribution_mapper::{
    generate_beta_like, generate_uniform, DistributionKind, DistributionPoint,
};
pub use entropy_source::{EntropySource, FixedEntropySource, OsEntropySource};
pub use run_config::RunConfig;
pub use sample_summary::SampleSummary;
pub use uniformity_validator::{test_uniformity, UniformityReport, UniformityVerdict};
