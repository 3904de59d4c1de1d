//! Fixed statistical constants used across the engine.

/// Minimum defensible sample size.
///
/// Professional practice floor: statistical conclusions drawn from fewer
/// than 25 items are not considered defensible, regardless of what the
/// attribute-sampling formula suggests. The calculator clamps upward to
/// this value (or to the population size when the population is smaller).
pub const MIN_SAMPLE_SIZE: u32 = 25;

/// z-score for 90% confidence (two-sided).
pub const Z_90: f64 = 1.645;

/// z-score for 95% confidence (two-sided).
pub const Z_95: f64 = 1.960;

/// z-score for 99% confidence (two-sided).
pub const Z_99: f64 = 2.576;

/// Fraction of the sample that risk-based selection fills deterministically
/// with the highest-risk units before falling back to random draws.
pub const RISK_TOP_FRACTION: f64 = 0.30;

/// Escalation fraction applied when observed errors exceed tolerance.
///
/// A fixed 50% of the original recommended size, chosen as a conservative,
/// auditable default. Re-deriving n from partial data would introduce
/// selection bias, so the monitor never does that.
pub const EXPANSION_FRACTION: f64 = 0.5;

/// Observed error rate at or above which a verdict is Qualified.
pub const QUALIFIED_THRESHOLD: f64 = 0.05;

/// Observed error rate at or above which a verdict is Fail.
pub const FAIL_THRESHOLD: f64 = 0.10;
