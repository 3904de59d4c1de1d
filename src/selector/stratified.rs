//! Stratified selection with proportional allocation.

use std::collections::BTreeMap;

use rand::seq::index::sample;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::SamplingError;
use crate::population::Population;

/// Select proportionally across strata.
///
/// Each stratum receives `round(target * |stratum| / |population|)` units,
/// with every non-empty stratum guaranteed at least one. Rounding error is
/// absorbed by adjusting allocations starting from the largest stratum
/// (ties broken by key), which keeps the adjustment deterministic. Within
/// each stratum, units are drawn uniformly without replacement.
///
/// Strata are visited in key order so the RNG consumption, and therefore
/// the whole selection, is reproducible for a given seed.
///
/// # Errors
///
/// Returns `InsufficientPopulation` if any unit lacks a stratum key;
/// proportional allocation is undefined for unclassified units.
pub(super) fn select(
    population: &Population,
    target: usize,
    rng: &mut Xoshiro256PlusPlus,
) -> Result<Vec<String>, SamplingError> {
    let units = population.units();
    let total = units.len();
    let target = target.min(total);

    // Group unit indices by stratum key; BTreeMap fixes iteration order.
    let mut strata: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, unit) in units.iter().enumerate() {
        match unit.stratum_key.as_deref() {
            Some(key) => strata.entry(key).or_default().push(i),
            None => {
                return Err(SamplingError::InsufficientPopulation {
                    reason: format!(
                        "unit '{}' has no stratum key; stratified selection requires \
                         every unit to be classified",
                        unit.id
                    ),
                })
            }
        }
    }

    let mut allocations = allocate(&strata, target, total);

    // Restore the exact total by adjusting the largest strata first.
    let mut diff = target as i64 - allocations.values().map(|&a| a as i64).sum::<i64>();
    if diff != 0 {
        let mut order: Vec<&str> = strata.keys().copied().collect();
        order.sort_by_key(|k| (std::cmp::Reverse(strata[k].len()), *k));

        for key in order {
            if diff == 0 {
                break;
            }
            let size = strata[key].len() as i64;
            let alloc = allocations[key] as i64;
            // Stay within [1, stratum size].
            let adjusted = (alloc + diff).clamp(1, size);
            diff -= adjusted - alloc;
            allocations.insert(key, adjusted as usize);
        }
    }

    let mut items = Vec::with_capacity(target);
    for (key, indices) in &strata {
        let take = allocations[key];
        if take >= indices.len() {
            items.extend(indices.iter().map(|&i| units[i].id.clone()));
        } else {
            items.extend(
                sample(rng, indices.len(), take)
                    .iter()
                    .map(|j| units[indices[j]].id.clone()),
            );
        }
    }

    Ok(items)
}

/// Proportional allocation, minimum 1 per stratum, capped at stratum size.
fn allocate<'a>(
    strata: &BTreeMap<&'a str, Vec<usize>>,
    target: usize,
    total: usize,
) -> BTreeMap<&'a str, usize> {
    strata
        .iter()
        .map(|(&key, indices)| {
            let proportional =
                (target as f64 * indices.len() as f64 / total as f64).round() as usize;
            (key, proportional.clamp(1, indices.len()))
        })
        .collect()
}
