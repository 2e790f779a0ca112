//! Maps the raw `[0, 100]` stream onto 2-D point clouds for two target shapes.
//!
//! # Shapes
//! - **Uniform**: each raw value normalized to `value / 100`, consecutive
//!   values paired into `(x_i, x_{i+1})`. `n` draws give `n - 1` points.
//! - **Beta-like**: each coordinate is the median of three normalized draws
//!   (six draws per point). The median of three independent uniforms is
//!   exactly Beta(2,2) in the continuous limit: unimodal, symmetric about
//!   0.5, thinner at the edges.
//!
//! Both shapes keep every coordinate inside `[0.0, 1.0]`. Calls are not
//! idempotent: each one consumes fresh draws from the stream.

use crate::digest_generator::RawStream;
use crate::digest_random_error::{DigestRandomError, Result};

/// Draws consumed per beta-like coordinate.
pub const BETA_DRAWS_PER_COORDINATE: usize = 3;

/// Which shaping produced a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    Uniform,
    BetaLike,
}

/// One `(x, y)` sample in the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionPoint {
    pub x: f64,
    pub y: f64,
    pub kind: DistributionKind,
}

impl DistributionPoint {
    pub fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Draws `n` normalized values and pairs neighbours into `n - 1` points.
///
/// # Returns
/// - `Ok(Vec)` - `n - 1` points (empty when `n == 1`)
/// - `Err(InvalidSampleSize)` - `n == 0`, nothing drawn
///
/// # Examples
/// ```
/// use digest_random::digest_generator::DigestGenerator;
/// use digest_random::distribution_mapper::generate_uniform;
///
/// let mut rng = DigestGenerator::from_state(42).unwrap();
/// let points = generate_uniform(&mut rng, 100).unwrap();
/// assert_eq!(points.len(), 99);
/// ```
pub fn generate_uniform<R: RawStream + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Result<Vec<DistributionPoint>> {
    // Production catch: reject rather than silently return nothing
    if n == 0 {
        return Err(DigestRandomError::InvalidSampleSize(
            "uniform sample size must be > 0",
        ));
    }

    let values: Vec<f64> = (0..n).map(|_| rng.next_normalized()).collect();
    Ok(values
        .windows(2)
        .map(|pair| DistributionPoint {
            x: pair[0],
            y: pair[1],
            kind: DistributionKind::Uniform,
        })
        .collect())
}

/// Produces `n` center-concentrated points, six draws each.
///
/// # Returns
/// - `Err(InvalidSampleSize)` - `n == 0`
pub fn generate_beta_like<R: RawStream + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Result<Vec<DistributionPoint>> {
    if n == 0 {
        return Err(DigestRandomError::InvalidSampleSize(
            "beta-like sample size must be > 0",
        ));
    }

    Ok((0..n)
        .map(|_| {
            let x = beta_like_coordinate(rng);
            let y = beta_like_coordinate(rng);
            DistributionPoint {
                x,
                y,
                kind: DistributionKind::BetaLike,
            }
        })
        .collect())
}

fn beta_like_coordinate<R: RawStream + ?Sized>(rng: &mut R) -> f64 {
    let a = rng.next_normalized();
    let b = rng.next_normalized();
    let c = rng.next_normalized();
    median_of_three(a, b, c)
}

#[inline]
fn median_of_three(a: f64, b: f64, c: f64) -> f64 {
    a.min(b).max(a.max(b).min(c))
}

/// Every coordinate of `points`, `x` before `y`, in order.
pub fn flatten_coordinates(points: &[DistributionPoint]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
