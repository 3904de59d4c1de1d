//! The sampling plan: a versioned, immutable sizing record.

use serde::{Deserialize, Serialize};

use crate::params::SamplingParameters;

/// Output of the sample-size calculator.
///
/// A plan is immutable once created. Adaptive expansion produces a *new*
/// plan version with a back-reference to the version it supersedes, so the
/// full sizing history remains replayable for the audit trail. Nothing in
/// this engine ever edits a plan in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingPlan {
    /// Plan version, starting at 1. Each approved expansion increments it.
    pub version: u32,

    /// Version this plan supersedes, if it resulted from an expansion.
    pub superseded_version: Option<u32>,

    /// Number of units the audit must test.
    pub recommended_size: u32,

    /// `recommended_size / population_size * 100`, rounded to 2 decimals.
    pub sampling_percentage: f64,

    /// Size of the population the plan was derived for.
    pub population_size: u32,

    /// The risk inputs the size was derived from.
    pub parameters: SamplingParameters,
}

impl SamplingPlan {
    /// Produce the next plan version with `additional_units` more items.
    ///
    /// Intended to be called after a human has approved an
    /// `AdaptiveDecision` that recommended expansion. The new size is
    /// still capped at the population size; you cannot test more units
    /// than exist.
    pub fn expand(&self, additional_units: u32) -> SamplingPlan {
        let new_size = self
            .recommended_size
            .saturating_add(additional_units)
            .min(self.population_size);

        SamplingPlan {
            version: self.version + 1,
            superseded_version: Some(self.version),
            recommended_size: new_size,
            sampling_percentage: percentage(new_size, self.population_size),
            population_size: self.population_size,
            parameters: self.parameters,
        }
    }
}

/// Sampling percentage rounded to 2 decimal places.
pub(crate) fn percentage(size: u32, population_size: u32) -> f64 {
    let raw = f64::from(size) / f64::from(population_size) * 100.0;
    (raw * 100.0).round() / 100.0
}
