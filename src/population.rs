//! Population and sampling-unit types.

use serde::{Deserialize, Serialize};

use crate::error::SamplingError;

/// A single unit available for selection: a transaction, journal entry,
/// confirmation, or any other item the audit can test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingUnit {
    /// Unique identifier within the population.
    pub id: String,

    /// Optional classifying attribute for stratified selection
    /// (e.g., business unit, transaction type, currency).
    pub stratum_key: Option<String>,

    /// Optional risk score for risk-based selection. Higher means riskier.
    /// Units without a score are treated as risk 0.
    pub risk_score: Option<f64>,
}

impl SamplingUnit {
    /// Create a unit with no stratum or risk attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stratum_key: None,
            risk_score: None,
        }
    }

    /// Attach a stratum key.
    pub fn with_stratum(mut self, key: impl Into<String>) -> Self {
        self.stratum_key = Some(key.into());
        self
    }

    /// Attach a risk score.
    pub fn with_risk_score(mut self, score: f64) -> Self {
        self.risk_score = Some(score);
        self
    }

    /// Risk score with the missing-score default applied.
    pub fn effective_risk(&self) -> f64 {
        self.risk_score.unwrap_or(0.0)
    }
}

/// The collection of units a sample is drawn from.
///
/// Invariant: non-empty. The constructor rejects an empty unit list, so
/// every `Population` the selector sees has at least one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population {
    units: Vec<SamplingUnit>,
}

impl Population {
    /// Create a population from its units.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::EmptyPopulation` if `units` is empty.
    pub fn new(units: Vec<SamplingUnit>) -> Result<Self, SamplingError> {
        if units.is_empty() {
            return Err(SamplingError::EmptyPopulation);
        }
        Ok(Self { units })
    }

    /// Number of units in the population.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false: the constructor rejects empty populations.
    /// Provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The units, in insertion order.
    pub fn units(&self) -> &[SamplingUnit] {
        &self.units
    }
}
