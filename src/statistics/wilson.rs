//! Wilson-score confidence intervals for binomial proportions.
//!
//! The Wilson interval is used instead of the naive normal (Wald)
//! approximation because it stays inside `[0, 1]` and remains well-behaved
//! at proportions near 0 or 1, which attribute-sampling results frequently
//! are (a clean sample has an observed rate of exactly 0).
//!
//! # Reference
//!
//! Wilson, E. B. (1927). "Probable inference, the law of succession, and
//! statistical inference." Journal of the American Statistical Association
//! 22(158):209-212.

use serde::{Deserialize, Serialize};

/// A two-sided confidence interval for a proportion, bounded in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound, in `[0, 1]`.
    pub lower: f64,
    /// Upper bound, in `[0, 1]`.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Width of the interval, a measure of remaining uncertainty.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether the interval contains `value`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Compute the Wilson-score interval for an observed proportion.
///
/// ```text
/// denom  = 1 + z²/n
/// center = (p + z²/2n) / denom
/// margin = (z/denom) · sqrt(p(1-p)/n + z²/4n²)
/// ```
///
/// The interval always contains `p`, and both bounds are clamped to
/// `[0, 1]`.
///
/// # Arguments
///
/// * `p` - Observed proportion in `[0, 1]`
/// * `n` - Sample size, must be > 0
/// * `z` - Standard-normal quantile for the desired confidence
///
/// # Panics
///
/// Panics if `n` is zero; callers validate sample size before reaching
/// this function.
pub fn wilson_interval(p: f64, n: u32, z: f64) -> ConfidenceInterval {
    assert!(n > 0, "Wilson interval requires a positive sample size");

    let n = f64::from(n);
    let z2 = z * z;

    let denom = 1.0 + z2 / n;
    let center = (p + z2 / (2.0 * n)) / denom;
    let margin = (z / denom) * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt();

    ConfidenceInterval {
        lower: (center - margin).max(0.0),
        upper: (center + margin).min(1.0),
    }
}
