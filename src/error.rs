//! Error types for the sampling engine.
//!
//! Every error here is a deterministic validation failure: retrying the
//! same call with the same input cannot succeed. The engine surfaces them
//! synchronously and never substitutes a default or returns a partial
//! result, because a silently-wrong sampling plan is worse than a
//! rejected call.

use std::fmt;

/// Errors returned by the sampling engine's fallible entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// The population contains no units, so no sampling problem exists.
    EmptyPopulation,

    /// The sampling parameters violate an invariant.
    ///
    /// Raised when `expected_error_rate >= tolerable_error_rate` (a plan
    /// where expected error already exceeds tolerance is not a valid
    /// sampling problem), when a rate is outside its valid range, or when
    /// a custom confidence level is unsupported.
    InvalidParameters {
        /// Which invariant was violated.
        reason: String,
    },

    /// The population cannot support the requested selection.
    ///
    /// Raised by stratified selection when units lack stratum keys, since
    /// proportional allocation has nothing to allocate over.
    InsufficientPopulation {
        /// Why the selection cannot proceed.
        reason: String,
    },

    /// The reported test results are internally inconsistent.
    ///
    /// `errors_found` must lie in `[0, sample_size]` and `sample_size`
    /// must be positive.
    InvalidResult {
        /// Number of errors reported.
        errors_found: u32,
        /// Number of items reported as tested.
        sample_size: u32,
    },
}

impl fmt::Display for SamplingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingError::EmptyPopulation => {
                write!(f, "Population is empty: cannot size or select a sample")
            }
            SamplingError::InvalidParameters { reason } => {
                write!(f, "Invalid sampling parameters: {}", reason)
            }
            SamplingError::InsufficientPopulation { reason } => {
                write!(f, "Population cannot support selection: {}", reason)
            }
            SamplingError::InvalidResult {
                errors_found,
                sample_size,
            } => {
                write!(
                    f,
                    "Invalid test results: {} errors reported against a sample of {}",
                    errors_found, sample_size
                )
            }
        }
    }
}

impl std::error::Error for SamplingError {}
