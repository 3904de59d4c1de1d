//! Standard-normal quantile computation.

/// Compute the quantile of the standard normal distribution.
///
/// Uses the rational approximation from Abramowitz and Stegun (1964),
/// formula 26.2.23, accurate to about 4.5e-4 absolute error. That is more
/// than enough precision for sample sizing: the result feeds a formula
/// whose output is rounded up to an integer.
///
/// # Arguments
///
/// * `p` - Cumulative probability in (0, 1)
///
/// # Returns
///
/// The z value such that `Phi(z) = p`, or NaN for `p` outside (0, 1).
pub fn quantile_normal(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return f64::NAN;
    }

    let t = if p < 0.5 {
        (-2.0 * p.ln()).sqrt()
    } else {
        (-2.0 * (1.0 - p).ln()).sqrt()
    };

    // Coefficients for the approximation
    let c0 = 2.515517;
    let c1 = 0.802853;
    let c2 = 0.010328;
    let d1 = 1.432788;
    let d2 = 0.189269;
    let d3 = 0.001308;

    let result = t - (c0 + c1 * t + c2 * t * t) / (1.0 + d1 * t + d2 * t * t + d3 * t * t * t);

    if p < 0.5 {
        -result
    } else {
        result
    }
}
