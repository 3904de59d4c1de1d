//! Uniform random selection without replacement.

use rand::seq::index::sample;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::population::Population;

/// Draw `target` units uniformly at random without replacement.
///
/// If `target` covers the whole population, returns every unit in
/// population order; exhaustive testing has no sampling error, so there
/// is nothing to randomize.
pub(super) fn select(
    population: &Population,
    target: usize,
    rng: &mut Xoshiro256PlusPlus,
) -> Vec<String> {
    let units = population.units();
    if target >= units.len() {
        return units.iter().map(|u| u.id.clone()).collect();
    }

    sample(rng, units.len(), target)
        .iter()
        .map(|i| units[i].id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::SamplingUnit;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn population(n: usize) -> Population {
        Population::new((0..n).map(|i| SamplingUnit::new(format!("u{}", i))).collect())
            .unwrap()
    }

    #[test]
    fn draws_are_unique_and_from_population() {
        let pop = population(100);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let items = select(&pop, 30, &mut rng);

        assert_eq!(items.len(), 30);
        let unique: HashSet<_> = items.iter().collect();
        assert_eq!(unique.len(), 30);
        for id in &items {
            assert!(pop.units().iter().any(|u| &u.id == id));
        }
    }

    #[test]
    fn oversized_target_returns_full_population() {
        let pop = population(20);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let items = select(&pop, 25, &mut rng);
        assert_eq!(items.len(), 20);
        // Full population comes back in original order.
        assert_eq!(items[0], "u0");
        assert_eq!(items[19], "u19");
    }
}
