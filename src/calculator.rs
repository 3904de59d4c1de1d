//! Sample-size calculation via finite-population-corrected attribute sampling.

use crate::constants::MIN_SAMPLE_SIZE;
use crate::error::SamplingError;
use crate::params::SamplingParameters;
use crate::plan::{percentage, SamplingPlan};

/// Compute the required sample size for a population and risk inputs.
///
/// The infinite-population attribute-sampling size is
///
/// ```text
/// n_inf = z² · p · (1 - p) / e²
/// ```
///
/// with `p` the expected error rate and `e` the tolerable error rate,
/// then shrunk by the finite-population correction
///
/// ```text
/// n_adj = n_inf / (1 + (n_inf - 1) / N)
/// ```
///
/// rounded up to the next integer and clamped to `[min(25, N), N]`.
/// The floor of 25 is a professional-practice minimum below which
/// statistical conclusions are not considered defensible; the cap keeps
/// the recommendation from exceeding the units that exist.
///
/// # Arguments
///
/// * `population_size` - Number of units available for testing
/// * `params` - Validated confidence and error-rate inputs
///
/// # Errors
///
/// Returns `EmptyPopulation` if `population_size` is zero. Parameter
/// invariants are enforced by [`SamplingParameters::new`], so a plan can
/// only ever be derived from valid inputs.
///
/// # Example
///
/// ```
/// use audit_sampling::{calculate_sample_size, ConfidenceLevel, SamplingParameters};
///
/// let params = SamplingParameters::new(ConfidenceLevel::NinetyFive, 0.05, 0.02)?;
/// let plan = calculate_sample_size(10_000, &params)?;
/// assert_eq!(plan.recommended_size, 31);
/// # Ok::<(), audit_sampling::SamplingError>(())
/// ```
pub fn calculate_sample_size(
    population_size: u32,
    params: &SamplingParameters,
) -> Result<SamplingPlan, SamplingError> {
    if population_size == 0 {
        return Err(SamplingError::EmptyPopulation);
    }

    let z = params.confidence_level().z_score();
    let p = params.expected_error_rate();
    let e = params.tolerable_error_rate();
    let n = f64::from(population_size);

    let n_inf = z * z * p * (1.0 - p) / (e * e);
    let n_adj = n_inf / (1.0 + (n_inf - 1.0) / n);

    let floor = MIN_SAMPLE_SIZE.min(population_size);
    let recommended = (n_adj.ceil().max(0.0) as u32)
        .max(floor)
        .min(population_size);

    tracing::debug!(
        "sample size: n_inf={:.2} n_adj={:.2} -> {} of {} units",
        n_inf, n_adj, recommended, population_size
    );

    Ok(SamplingPlan {
        version: 1,
        superseded_version: None,
        recommended_size: recommended,
        sampling_percentage: percentage(recommended, population_size),
        population_size,
        parameters: *params,
    })
}
