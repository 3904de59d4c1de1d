//! Adaptive monitoring of in-progress testing.
//!
//! The monitor is invoked repeatedly as testing proceeds (typically after
//! each completed batch) and decides whether the plan must be expanded
//! mid-engagement. It owns no state: every call is a pure function of the
//! plan and the running totals, so it can be re-invoked any number of
//! times against the same or a growing batch.
//!
//! Callers are responsible for supplying monotonically non-decreasing
//! `tests_completed` / `errors_found` across calls for a given plan; the
//! monitor does not enforce that ordering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::EXPANSION_FRACTION;
use crate::plan::SamplingPlan;

/// Running totals of test execution, supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestBatch {
    /// Number of sampled units tested so far.
    pub tests_completed: u32,
    /// Number of those that failed the attribute being tested.
    pub errors_found: u32,
}

/// Why the monitor decided what it decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerReason {
    /// No tests completed yet; nothing can be assessed from zero evidence.
    NoData,
    /// Observed error rate exceeds the tolerable rate.
    ErrorRateExceedsTolerance,
    /// Observed rate is under half of tolerance with the full sample
    /// tested. Informational only: an in-progress sample is never
    /// contracted, since shrinking a sample retroactively is not
    /// permitted.
    WellWithinTolerance,
    /// Observed rate is within tolerance; testing continues as planned.
    WithinTolerance,
}

impl fmt::Display for TriggerReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerReason::NoData => write!(f, "no data"),
            TriggerReason::ErrorRateExceedsTolerance => {
                write!(f, "error rate exceeds tolerance")
            }
            TriggerReason::WellWithinTolerance => write!(f, "well within tolerance"),
            TriggerReason::WithinTolerance => write!(f, "within tolerance"),
        }
    }
}

/// One monitoring checkpoint's outcome.
///
/// A decision never mutates the plan it was made against; it only
/// recommends a new target size. Applying the recommendation is
/// [`SamplingPlan::expand`]'s job, after human approval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveDecision {
    /// Whether the sample must grow.
    pub expansion_needed: bool,

    /// How many additional units to test, when expansion is needed.
    pub additional_units_required: u32,

    /// What drove the decision.
    pub trigger_reason: TriggerReason,

    /// Expansion changes audit scope, so it must be surfaced to a human
    /// and approved, never silently applied.
    pub requires_approval: bool,

    /// Error rate observed at this checkpoint, if any tests completed.
    pub observed_error_rate: Option<f64>,
}

/// Assess running test results against the plan's tolerance.
///
/// When the observed error rate exceeds the tolerable rate, the decision
/// recommends a fixed 50% escalation of the original recommended size.
/// The fraction is deliberately not re-derived from the partial data:
/// resizing from an interim error rate would introduce selection bias,
/// and a fixed fraction is auditable.
///
/// # Example
///
/// ```
/// use audit_sampling::{
///     calculate_sample_size, check_progress, ConfidenceLevel, SamplingParameters, TestBatch,
/// };
///
/// let params = SamplingParameters::new(ConfidenceLevel::NinetyFive, 0.05, 0.02)?;
/// let plan = calculate_sample_size(10_000, &params)?;
/// let decision = check_progress(&plan, &TestBatch { tests_completed: 30, errors_found: 3 });
/// assert!(decision.expansion_needed);
/// assert!(decision.requires_approval);
/// # Ok::<(), audit_sampling::SamplingError>(())
/// ```
pub fn check_progress(plan: &SamplingPlan, batch: &TestBatch) -> AdaptiveDecision {
    if batch.tests_completed == 0 {
        return AdaptiveDecision {
            expansion_needed: false,
            additional_units_required: 0,
            trigger_reason: TriggerReason::NoData,
            requires_approval: false,
            observed_error_rate: None,
        };
    }

    let rate = f64::from(batch.errors_found) / f64::from(batch.tests_completed);
    let tolerable = plan.parameters.tolerable_error_rate();

    if rate > tolerable {
        let additional = (f64::from(plan.recommended_size) * EXPANSION_FRACTION).ceil() as u32;
        tracing::warn!(
            "observed error rate {:.4} exceeds tolerance {:.4} after {} tests; \
             recommending {} additional units (requires approval)",
            rate, tolerable, batch.tests_completed, additional
        );
        return AdaptiveDecision {
            expansion_needed: true,
            additional_units_required: additional,
            trigger_reason: TriggerReason::ErrorRateExceedsTolerance,
            requires_approval: true,
            observed_error_rate: Some(rate),
        };
    }

    let reason = if rate < tolerable / 2.0 && batch.tests_completed >= plan.recommended_size {
        TriggerReason::WellWithinTolerance
    } else {
        TriggerReason::WithinTolerance
    };

    AdaptiveDecision {
        expansion_needed: false,
        additional_units_required: 0,
        trigger_reason: reason,
        requires_approval: false,
        observed_error_rate: Some(rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate_sample_size;
    use crate::params::{ConfidenceLevel, SamplingParameters};

    fn plan() -> SamplingPlan {
        let params =
            SamplingParameters::new(ConfidenceLevel::NinetyFive, 0.05, 0.02).unwrap();
        calculate_sample_size(10_000, &params).unwrap()
    }

    #[test]
    fn zero_tests_is_no_data() {
        let decision = check_progress(
            &plan(),
            &TestBatch {
                tests_completed: 0,
                errors_found: 0,
            },
        );
        assert!(!decision.expansion_needed);
        assert_eq!(decision.trigger_reason, TriggerReason::NoData);
        assert_eq!(decision.observed_error_rate, None);
    }

    #[test]
    fn excess_error_rate_triggers_half_expansion() {
        let plan = plan();
        // 3/30 = 10% observed against 5% tolerable.
        let decision = check_progress(
            &plan,
            &TestBatch {
                tests_completed: 30,
                errors_found: 3,
            },
        );

        assert!(decision.expansion_needed);
        assert!(decision.requires_approval);
        assert_eq!(
            decision.trigger_reason,
            TriggerReason::ErrorRateExceedsTolerance
        );
        let expected = (f64::from(plan.recommended_size) * 0.5).ceil() as u32;
        assert_eq!(decision.additional_units_required, expected);
    }

    #[test]
    fn clean_complete_sample_is_informational_only() {
        let plan = plan();
        let decision = check_progress(
            &plan,
            &TestBatch {
                tests_completed: plan.recommended_size,
                errors_found: 0,
            },
        );

        assert!(!decision.expansion_needed, "no contraction is ever recommended");
        assert_eq!(decision.trigger_reason, TriggerReason::WellWithinTolerance);
        assert!(!decision.requires_approval);
    }

    #[test]
    fn low_rate_mid_sample_stays_within_tolerance() {
        // Rate below tolerance/2 but the sample is incomplete.
        let decision = check_progress(
            &plan(),
            &TestBatch {
                tests_completed: 10,
                errors_found: 0,
            },
        );
        assert_eq!(decision.trigger_reason, TriggerReason::WithinTolerance);
    }

    #[test]
    fn rate_at_tolerance_does_not_expand() {
        // Exactly at tolerance: expansion requires strictly exceeding it.
        let decision = check_progress(
            &plan(),
            &TestBatch {
                tests_completed: 20,
                errors_found: 1,
            },
        );
        assert!(!decision.expansion_needed);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let plan = plan();
        let batch = TestBatch {
            tests_completed: 30,
            errors_found: 3,
        };
        let first = check_progress(&plan, &batch);
        let second = check_progress(&plan, &batch);
        assert_eq!(first, second);
    }
}
