//! Sample selection strategies.
//!
//! Four interchangeable strategies turn a sampling plan into the concrete
//! units to test:
//! - **Random**: uniform selection without replacement
//! - **Systematic**: fixed-interval selection from a random start
//! - **Stratified**: proportional allocation across stratum keys
//! - **RiskBased**: highest-risk units always included, remainder random
//!
//! The strategy set is closed: adding a fifth strategy is a deliberate,
//! reviewed change, so dispatch is a plain `match` over an enum rather
//! than an open trait-object seam.
//!
//! Every strategy is deterministic given a seed. When the caller supplies
//! no seed, a fresh one is drawn from OS entropy and recorded in the
//! returned [`SampleSelection`] so the draw can be replayed later.

mod random;
mod risk;
mod stratified;
mod systematic;

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::error::SamplingError;
use crate::plan::SamplingPlan;
use crate::population::Population;

/// Which selection method to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionStrategy {
    /// Uniform selection without replacement.
    Random,
    /// Every `interval`-th unit from a random start.
    Systematic,
    /// Proportional allocation across stratum keys.
    Stratified,
    /// Top 30% by risk score, remainder uniform.
    RiskBased,
}

/// The concrete units chosen for testing.
///
/// Carries the strategy and seed used so the selection is reproducible:
/// re-running [`select`] with the same population, plan, strategy, and
/// seed yields an identical item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSelection {
    /// Selected unit identifiers, in selection order.
    pub items: Vec<String>,

    /// Strategy that produced this selection.
    pub strategy: SelectionStrategy,

    /// Seed the random draws were made with.
    pub seed: u64,

    /// Version of the plan this selection was drawn for.
    pub plan_version: u32,
}

/// Select the units to test for a sampling plan.
///
/// Random and Systematic degrade gracefully when the plan asks for more
/// units than exist: they return the full population, since testing
/// everything leaves no sampling error. Stratified and RiskBased cap their
/// draw at the population size for the same reason.
///
/// # Arguments
///
/// * `population` - Units available for selection
/// * `plan` - The sizing plan, which fixes the target count
/// * `strategy` - Selection method
/// * `seed` - Optional seed for reproducibility; drawn fresh if `None`
///
/// # Errors
///
/// Returns `InsufficientPopulation` if Stratified selection encounters a
/// unit without a stratum key.
pub fn select(
    population: &Population,
    plan: &SamplingPlan,
    strategy: SelectionStrategy,
    seed: Option<u64>,
) -> Result<SampleSelection, SamplingError> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let target = plan.recommended_size as usize;

    let items = match strategy {
        SelectionStrategy::Random => random::select(population, target, &mut rng),
        SelectionStrategy::Systematic => systematic::select(population, target, &mut rng),
        SelectionStrategy::Stratified => stratified::select(population, target, &mut rng)?,
        SelectionStrategy::RiskBased => risk::select(population, target, &mut rng),
    };

    Ok(SampleSelection {
        items,
        strategy,
        seed,
        plan_version: plan.version,
    })
}
