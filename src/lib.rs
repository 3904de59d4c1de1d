//! # audit-sampling
//!
//! Statistical attribute-sampling engine for audit testing.
//!
//! Given a population of auditable items and risk parameters, this crate
//! determines how many items must be examined to support a conclusion at a
//! stated confidence level, selects which items to examine, monitors error
//! rates as testing proceeds, and computes the final statistical verdict
//! with Wilson-score confidence bounds.
//!
//! Four components, each a pure function of its inputs:
//! - [`calculate_sample_size`]: risk inputs to a sized [`SamplingPlan`]
//!   (finite-population-corrected attribute sampling)
//! - [`select`]: plan plus [`Population`] to a concrete [`SampleSelection`]
//! - [`check_progress`]: running totals to an [`AdaptiveDecision`]
//! - [`evaluate_results`]: final counts to a [`SamplingVerdict`]
//!
//! Nothing here performs I/O or holds shared mutable state; every call is
//! independently safe to run concurrently. All returned values are
//! immutable records the caller is responsible for persisting.
//!
//! ## Quick Start
//!
//! ```
//! use audit_sampling::{
//!     calculate_sample_size, evaluate_results, select, Conclusion, ConfidenceLevel,
//!     Population, SamplingParameters, SamplingUnit, SelectionStrategy,
//! };
//!
//! // 95% confidence, 5% tolerable error, 2% expected error.
//! let params = SamplingParameters::new(ConfidenceLevel::NinetyFive, 0.05, 0.02)?;
//! let plan = calculate_sample_size(10_000, &params)?;
//! assert_eq!(plan.recommended_size, 31);
//!
//! let population = Population::new(
//!     (0..10_000).map(|i| SamplingUnit::new(format!("txn-{i}"))).collect(),
//! )?;
//! let selection = select(&population, &plan, SelectionStrategy::Random, Some(42))?;
//! assert_eq!(selection.items.len(), 31);
//!
//! // ... external test execution ...
//!
//! let verdict = evaluate_results(31, 0, ConfidenceLevel::NinetyFive)?;
//! assert_eq!(verdict.conclusion, Conclusion::Pass);
//! # Ok::<(), audit_sampling::SamplingError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod calculator;
mod constants;
mod error;
mod evaluator;
mod monitor;
mod params;
mod plan;
mod population;
mod selector;

// Statistical primitives
pub mod statistics;

// Re-exports for public API
pub use calculator::calculate_sample_size;
pub use constants::{EXPANSION_FRACTION, MIN_SAMPLE_SIZE, RISK_TOP_FRACTION};
pub use error::SamplingError;
pub use evaluator::{evaluate_results, Conclusion, SamplingVerdict};
pub use monitor::{check_progress, AdaptiveDecision, TestBatch, TriggerReason};
pub use params::{ConfidenceLevel, SamplingParameters};
pub use plan::SamplingPlan;
pub use population::{Population, SamplingUnit};
pub use selector::{select, SampleSelection, SelectionStrategy};
pub use statistics::ConfidenceInterval;
