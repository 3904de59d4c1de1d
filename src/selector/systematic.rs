//! Systematic (fixed-interval) selection.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::population::Population;

/// Select every `interval`-th unit from a uniformly random start.
///
/// `interval = floor(|population| / target)`, start drawn from
/// `[0, interval)`, with modulo wrap so that exactly `target` units come
/// back even when `interval * target < |population|`. Returns the full
/// population when `target` covers it.
pub(super) fn select(
    population: &Population,
    target: usize,
    rng: &mut Xoshiro256PlusPlus,
) -> Vec<String> {
    let units = population.units();
    if target >= units.len() {
        return units.iter().map(|u| u.id.clone()).collect();
    }

    let interval = units.len() / target;
    let start = rng.random_range(0..interval);

    (0..target)
        .map(|k| units[(start + k * interval) % units.len()].id.clone())
        .collect()
}
