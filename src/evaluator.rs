//! Final result evaluation: conclusion and confidence bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FAIL_THRESHOLD, QUALIFIED_THRESHOLD};
use crate::error::SamplingError;
use crate::params::ConfidenceLevel;
use crate::statistics::{wilson_interval, ConfidenceInterval};

/// The statistical conclusion of a completed sampling plan.
///
/// Thresholds are fixed, not configurable: consistent conclusions across
/// engagements matter more than per-engagement tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conclusion {
    /// Observed error rate below 5%. Control operated effectively.
    Pass,
    /// Observed error rate in [5%, 10%). Requires documented review.
    Qualified,
    /// Observed error rate at or above 10%.
    Fail,
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conclusion::Pass => write!(f, "pass"),
            Conclusion::Qualified => write!(f, "qualified"),
            Conclusion::Fail => write!(f, "fail"),
        }
    }
}

/// Terminal verdict for a completed plan.
///
/// Carries the raw counts and the z-score alongside the derived rate,
/// interval, and conclusion, so the verdict is independently
/// re-derivable for the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingVerdict {
    /// Number of units tested.
    pub sample_size: u32,

    /// Number of errors found among them.
    pub errors_found: u32,

    /// `errors_found / sample_size`.
    pub observed_error_rate: f64,

    /// Wilson-score interval around the observed rate.
    pub confidence_interval: ConfidenceInterval,

    /// Confidence level the interval was computed at.
    pub confidence_level: ConfidenceLevel,

    /// The verdict.
    pub conclusion: Conclusion,
}

impl fmt::Display for SamplingVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} errors ({:.1}%), {:.0}% CI [{:.4}, {:.4}]",
            self.conclusion.to_string().to_uppercase(),
            self.errors_found,
            self.sample_size,
            self.observed_error_rate * 100.0,
            self.confidence_level.as_fraction() * 100.0,
            self.confidence_interval.lower,
            self.confidence_interval.upper,
        )
    }
}

/// Evaluate final error counts into a statistical verdict.
///
/// The confidence interval uses the Wilson score rather than the naive
/// normal approximation: it stays within `[0, 1]` and remains
/// well-behaved at rates near 0, which clean audit samples produce
/// constantly.
///
/// # Arguments
///
/// * `sample_size` - Units tested; must be positive
/// * `errors_found` - Errors among them; must not exceed `sample_size`
/// * `confidence_level` - Confidence for the interval
///
/// # Errors
///
/// Returns `InvalidResult` if `sample_size` is zero or `errors_found`
/// exceeds it, and `InvalidParameters` if a hand-built custom confidence
/// level is outside (0.5, 1.0).
///
/// # Example
///
/// ```
/// use audit_sampling::{evaluate_results, Conclusion, ConfidenceLevel};
///
/// let verdict = evaluate_results(60, 0, ConfidenceLevel::NinetyFive)?;
/// assert_eq!(verdict.conclusion, Conclusion::Pass);
/// assert!(verdict.confidence_interval.upper < 0.10);
/// # Ok::<(), audit_sampling::SamplingError>(())
/// ```
pub fn evaluate_results(
    sample_size: u32,
    errors_found: u32,
    confidence_level: ConfidenceLevel,
) -> Result<SamplingVerdict, SamplingError> {
    confidence_level.validate()?;
    if sample_size == 0 || errors_found > sample_size {
        return Err(SamplingError::InvalidResult {
            errors_found,
            sample_size,
        });
    }

    let rate = f64::from(errors_found) / f64::from(sample_size);
    let interval = wilson_interval(rate, sample_size, confidence_level.z_score());

    let conclusion = if errors_found == 0 || rate < QUALIFIED_THRESHOLD {
        Conclusion::Pass
    } else if rate < FAIL_THRESHOLD {
        Conclusion::Qualified
    } else {
        Conclusion::Fail
    };

    Ok(SamplingVerdict {
        sample_size,
        errors_found,
        observed_error_rate: rate,
        confidence_interval: interval,
        confidence_level,
        conclusion,
    })
}
