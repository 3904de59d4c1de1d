//! Sampling parameters: confidence level and error-rate assumptions.

use serde::{Deserialize, Serialize};

use crate::constants::{Z_90, Z_95, Z_99};
use crate::error::SamplingError;
use crate::statistics::quantile_normal;

/// Confidence level for sample sizing and verdict intervals.
///
/// The three standard audit confidence levels map to fixed two-sided
/// z-scores. `Custom` serves the occasional engagement that mandates a
/// different level; its z-score comes from the inverse normal CDF.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// 90% confidence (z = 1.645).
    Ninety,
    /// 95% confidence (z = 1.960). The usual default.
    NinetyFive,
    /// 99% confidence (z = 2.576).
    NinetyNine,
    /// An arbitrary confidence level in (0.5, 1.0).
    Custom(f64),
}

impl ConfidenceLevel {
    /// Construct a custom confidence level, validating its range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` unless `level` is in (0.5, 1.0). Levels
    /// at or below 0.5 would make the sizing formula meaningless (a coin
    /// flip carries more confidence), and 1.0 has no finite z-score.
    pub fn custom(level: f64) -> Result<Self, SamplingError> {
        if !(level > 0.5 && level < 1.0) || level.is_nan() {
            return Err(SamplingError::InvalidParameters {
                reason: format!("confidence level {} must be in (0.5, 1.0)", level),
            });
        }
        Ok(ConfidenceLevel::Custom(level))
    }

    /// Check that this level can produce a finite z-score.
    ///
    /// The `Custom` payload is public (and deserializable), so a caller
    /// can build `Custom(1.5)` without going through [`Self::custom`].
    /// Every engine entry point that accepts a confidence level
    /// re-validates it here: an out-of-range level must fail loudly, not
    /// flow a NaN z-score into the sizing formula or Wilson interval.
    pub(crate) fn validate(&self) -> Result<(), SamplingError> {
        match self {
            ConfidenceLevel::Custom(level) if !(*level > 0.5 && *level < 1.0) => {
                Err(SamplingError::InvalidParameters {
                    reason: format!("confidence level {} must be in (0.5, 1.0)", level),
                })
            }
            _ => Ok(()),
        }
    }

    /// The two-sided z-score for this confidence level.
    pub fn z_score(&self) -> f64 {
        match self {
            ConfidenceLevel::Ninety => Z_90,
            ConfidenceLevel::NinetyFive => Z_95,
            ConfidenceLevel::NinetyNine => Z_99,
            // Two-sided: half the remaining mass in each tail.
            ConfidenceLevel::Custom(level) => quantile_normal(1.0 - (1.0 - level) / 2.0),
        }
    }

    /// The confidence level as a fraction in (0, 1).
    pub fn as_fraction(&self) -> f64 {
        match self {
            ConfidenceLevel::Ninety => 0.90,
            ConfidenceLevel::NinetyFive => 0.95,
            ConfidenceLevel::NinetyNine => 0.99,
            ConfidenceLevel::Custom(level) => *level,
        }
    }
}

/// Immutable risk inputs for sample sizing.
///
/// Invariant: `expected_error_rate < tolerable_error_rate`. A plan where
/// the expected error already exceeds what the audit can tolerate is not
/// a valid sampling problem, so the constructor rejects it rather than
/// letting the calculator produce a meaningless size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParameters {
    confidence_level: ConfidenceLevel,
    tolerable_error_rate: f64,
    expected_error_rate: f64,
}

impl SamplingParameters {
    /// Create validated sampling parameters.
    ///
    /// # Arguments
    ///
    /// * `confidence_level` - Desired confidence in the conclusion
    /// * `tolerable_error_rate` - Maximum acceptable error rate, in (0, 1]
    /// * `expected_error_rate` - Prior estimate of the true error rate,
    ///   in `[0, tolerable_error_rate)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if either rate is outside its range,
    /// the expected rate is not strictly below the tolerable rate, or a
    /// custom confidence level is outside (0.5, 1.0).
    pub fn new(
        confidence_level: ConfidenceLevel,
        tolerable_error_rate: f64,
        expected_error_rate: f64,
    ) -> Result<Self, SamplingError> {
        confidence_level.validate()?;
        if !(tolerable_error_rate > 0.0 && tolerable_error_rate <= 1.0)
            || tolerable_error_rate.is_nan()
        {
            return Err(SamplingError::InvalidParameters {
                reason: format!(
                    "tolerable_error_rate {} must be in (0, 1]",
                    tolerable_error_rate
                ),
            });
        }
        if !(0.0..1.0).contains(&expected_error_rate) || expected_error_rate.is_nan() {
            return Err(SamplingError::InvalidParameters {
                reason: format!(
                    "expected_error_rate {} must be in [0, 1)",
                    expected_error_rate
                ),
            });
        }
        if expected_error_rate >= tolerable_error_rate {
            return Err(SamplingError::InvalidParameters {
                reason: format!(
                    "expected_error_rate {} must be strictly below tolerable_error_rate {}",
                    expected_error_rate, tolerable_error_rate
                ),
            });
        }

        Ok(Self {
            confidence_level,
            tolerable_error_rate,
            expected_error_rate,
        })
    }

    /// The confidence level.
    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    /// Maximum error rate the audit can accept.
    pub fn tolerable_error_rate(&self) -> f64 {
        self.tolerable_error_rate
    }

    /// The auditor's prior estimate of the true error rate.
    pub fn expected_error_rate(&self) -> f64 {
        self.expected_error_rate
    }
}
