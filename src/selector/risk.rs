//! Risk-based selection: highest-risk units always tested.

use rand::seq::index::sample;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::constants::RISK_TOP_FRACTION;
use crate::population::Population;

/// Select the top 30% of the target by risk, the remainder at random.
///
/// Units are ordered by descending risk score (missing scores count as 0)
/// with identifier as tie-break, so the high-risk block is fully
/// deterministic: the riskiest items are always tested, by design, rather
/// than left to chance. The rest of the sample is drawn uniformly from
/// the remaining units.
pub(super) fn select(
    population: &Population,
    target: usize,
    rng: &mut Xoshiro256PlusPlus,
) -> Vec<String> {
    let units = population.units();
    let target = target.min(units.len());

    let mut by_risk: Vec<usize> = (0..units.len()).collect();
    by_risk.sort_by(|&a, &b| {
        units[b]
            .effective_risk()
            .total_cmp(&units[a].effective_risk())
            .then_with(|| units[a].id.cmp(&units[b].id))
    });

    let high_risk_count = ((target as f64 * RISK_TOP_FRACTION).ceil() as usize).min(target);

    let mut items: Vec<String> = by_risk[..high_risk_count]
        .iter()
        .map(|&i| units[i].id.clone())
        .collect();

    let rest = &by_risk[high_risk_count..];
    let remaining = target - high_risk_count;
    if remaining >= rest.len() {
        items.extend(rest.iter().map(|&i| units[i].id.clone()));
    } else {
        items.extend(
            sample(rng, rest.len(), remaining)
                .iter()
                .map(|j| units[rest[j]].id.clone()),
        );
    }

    items
}
