//! Tests for the four selection strategies.
//!
//! Shared properties: completeness (the selection has exactly the
//! recommended count, or the whole population when the plan exceeds it),
//! uniqueness, membership, and seed reproducibility.

use std::collections::HashSet;

use audit_sampling::{
    calculate_sample_size, select, ConfidenceLevel, Population, SamplingError, SamplingParameters,
    SamplingPlan, SamplingUnit, SelectionStrategy,
};

fn plain_population(n: usize) -> Population {
    Population::new(
        (0..n)
            .map(|i| SamplingUnit::new(format!("txn-{:05}", i)))
            .collect(),
    )
    .unwrap()
}

fn stratified_population(per_stratum: &[(&str, usize)]) -> Population {
    let mut units = Vec::new();
    for (key, n) in per_stratum {
        for i in 0..*n {
            units.push(SamplingUnit::new(format!("{}-{:04}", key, i)).with_stratum(*key));
        }
    }
    Population::new(units).unwrap()
}

fn plan_for(population_size: u32) -> SamplingPlan {
    let params = SamplingParameters::new(ConfidenceLevel::NinetyFive, 0.05, 0.02).unwrap();
    calculate_sample_size(population_size, &params).unwrap()
}

const ALL_STRATEGIES: [SelectionStrategy; 4] = [
    SelectionStrategy::Random,
    SelectionStrategy::Systematic,
    SelectionStrategy::Stratified,
    SelectionStrategy::RiskBased,
];

// =============================================================================
// SHARED PROPERTIES
// =============================================================================

#[test]
fn completeness_uniqueness_membership() {
    let pop = stratified_population(&[("north", 400), ("south", 400), ("west", 200)]);
    let plan = plan_for(1_000);

    for strategy in ALL_STRATEGIES {
        let selection = select(&pop, &plan, strategy, Some(99)).unwrap();

        assert_eq!(
            selection.items.len(),
            plan.recommended_size as usize,
            "{:?} returned wrong count",
            strategy
        );

        let unique: HashSet<_> = selection.items.iter().collect();
        assert_eq!(unique.len(), selection.items.len(), "{:?} repeated a unit", strategy);

        let ids: HashSet<_> = pop.units().iter().map(|u| u.id.as_str()).collect();
        for id in &selection.items {
            assert!(ids.contains(id.as_str()), "{:?} selected unknown id {}", strategy, id);
        }
    }
}

#[test]
fn same_seed_reproduces_selection() {
    let pop = stratified_population(&[("a", 300), ("b", 700)]);
    let plan = plan_for(1_000);

    for strategy in ALL_STRATEGIES {
        let first = select(&pop, &plan, strategy, Some(2024)).unwrap();
        let second = select(&pop, &plan, strategy, Some(2024)).unwrap();
        assert_eq!(first, second, "{:?} not reproducible", strategy);
    }
}

#[test]
fn different_seeds_vary_random_draws() {
    let pop = plain_population(1_000);
    let plan = plan_for(1_000);

    let a = select(&pop, &plan, SelectionStrategy::Random, Some(1)).unwrap();
    let b = select(&pop, &plan, SelectionStrategy::Random, Some(2)).unwrap();
    assert_ne!(a.items, b.items);
}

// =============================================================================
// UNDERSIZED POPULATION (plan larger than population)
// =============================================================================

#[test]
fn random_and_systematic_return_full_population() {
    // N=20 with a floor-driven recommendation of 20 < 25: build a plan for
    // a larger population, then run it against the 20-unit one.
    let pop = plain_population(20);
    let plan = plan_for(10_000); // recommends 31

    for strategy in [SelectionStrategy::Random, SelectionStrategy::Systematic] {
        let selection = select(&pop, &plan, strategy, Some(5)).unwrap();
        assert_eq!(selection.items.len(), 20, "{:?} should take everything", strategy);
    }
}

#[test]
fn stratified_oversize_takes_equal_strata_whole() {
    let pop = stratified_population(&[("x", 10), ("y", 10)]);
    let plan = plan_for(10_000); // recommends 31 > 20

    let selection = select(&pop, &plan, SelectionStrategy::Stratified, Some(5)).unwrap();
    assert_eq!(selection.items.len(), 20);
    assert_eq!(selection.items.iter().filter(|i| i.starts_with("x-")).count(), 10);
    assert_eq!(selection.items.iter().filter(|i| i.starts_with("y-")).count(), 10);
}

// =============================================================================
// STRATEGY-SPECIFIC BEHAVIOR
// =============================================================================

#[test]
fn stratified_allocates_proportionally() {
    let pop = stratified_population(&[("large", 800), ("small", 200)]);
    let plan = plan_for(1_000); // 30 units

    let selection = select(&pop, &plan, SelectionStrategy::Stratified, Some(3)).unwrap();
    let large = selection.items.iter().filter(|i| i.starts_with("large-")).count();
    let small = selection.items.iter().filter(|i| i.starts_with("small-")).count();

    assert_eq!(large + small, 30);
    // round(30 * 0.8) = 24, remainder to the larger stratum as needed.
    assert!(small >= 1, "every non-empty stratum contributes");
    assert!(large > small * 3, "allocation follows stratum weight");
}

#[test]
fn stratified_requires_classified_units() {
    let mut units: Vec<SamplingUnit> = (0..50)
        .map(|i| SamplingUnit::new(format!("k-{}", i)).with_stratum("k"))
        .collect();
    units.push(SamplingUnit::new("orphan"));
    let pop = Population::new(units).unwrap();
    let plan = plan_for(51);

    let err = select(&pop, &plan, SelectionStrategy::Stratified, Some(1)).unwrap_err();
    assert!(matches!(err, SamplingError::InsufficientPopulation { .. }));
    assert!(err.to_string().contains("orphan"));
}

#[test]
fn risk_based_always_includes_top_scorers() {
    let units: Vec<SamplingUnit> = (0..200)
        .map(|i| SamplingUnit::new(format!("r-{:03}", i)).with_risk_score(f64::from(i)))
        .collect();
    let pop = Population::new(units).unwrap();
    let plan = plan_for(200); // 27 units; ceil(27 * 0.3) = 9 deterministic

    for seed in [10, 20, 30] {
        let selection = select(&pop, &plan, SelectionStrategy::RiskBased, Some(seed)).unwrap();
        for i in 191..=199 {
            let id = format!("r-{:03}", i);
            assert!(
                selection.items.contains(&id),
                "high-risk unit {} must always be selected",
                id
            );
        }
    }
}

#[test]
fn systematic_covers_population_evenly() {
    let pop = plain_population(300);
    let plan = plan_for(300); // 28 units, interval floor(300/28) = 10

    let selection = select(&pop, &plan, SelectionStrategy::Systematic, Some(8)).unwrap();
    let mut indices: Vec<usize> = selection
        .items
        .iter()
        .map(|id| id.trim_start_matches("txn-").parse().unwrap())
        .collect();
    indices.sort_unstable();

    // Picks fall in distinct interval-width bands across the population.
    for (k, idx) in indices.iter().enumerate() {
        assert!(*idx >= k * 10 && *idx < (k + 1) * 10);
    }
}

// =============================================================================
// AUDIT-TRAIL SERIALIZATION
// =============================================================================

#[test]
fn selection_serializes_for_persistence() {
    let pop = plain_population(100);
    let plan = plan_for(100);
    let selection = select(&pop, &plan, SelectionStrategy::Random, Some(7)).unwrap();

    let json = serde_json::to_string(&selection).unwrap();
    assert!(json.contains("\"seed\":7"));
    assert!(json.contains("Random"));
}
