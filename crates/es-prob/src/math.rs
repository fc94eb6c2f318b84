//! Small numerically-stable math utilities used across the PMF code.

use es_core::{Error, Result};
use statrs::function::gamma::ln_gamma;

/// `ln(k!)` via `lnΓ(k+1)`; finite for every `u64`.
#[inline]
pub fn ln_factorial(k: u64) -> f64 {
    ln_gamma(k as f64 + 1.0)
}

/// Log of the generalized binomial coefficient `C(k + r - 1, k)` for real `r > 0`.
///
/// `C = Γ(k+r) / (Γ(r) k!) = Π_{j<k} (r + j) / k!`.
///
/// For `r > k` the rising factorial is summed term by term: `lnΓ(k+r) - lnΓ(r)`
/// would subtract two numbers of size `r ln r` and lose every significant digit
/// once `r` reaches ~1e10. For `r <= k` both `lnΓ` terms are bounded by
/// `lnΓ(2k+1)`, so the difference is as accurate as `ln k!` itself.
pub fn ln_multiset_coeff(k: u64, r: f64) -> f64 {
    let kf = k as f64;
    if r > kf {
        (0..k).map(|j| (r + j as f64).ln()).sum::<f64>() - ln_factorial(k)
    } else {
        ln_gamma(kf + r) - ln_gamma(r) - ln_factorial(k)
    }
}

/// Stable `log(sum_i exp(x_i))`.
///
/// Returns `-inf` for an empty slice or when every term is `-inf`.
pub fn log_sum_exp(xs: &[f64]) -> f64 {
    let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    let s: f64 = xs.iter().map(|&x| (x - max).exp()).sum();
    max + s.ln()
}

/// `points` evenly spaced values over the closed interval `[start, stop]`.
pub fn linspace(start: f64, stop: f64, points: usize) -> Result<Vec<f64>> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "linspace bounds must be finite, got [{}, {}]",
            start, stop
        )));
    }
    match points {
        0 => Ok(Vec::new()),
        1 => Ok(vec![start]),
        _ => {
            let step = (stop - start) / (points as f64 - 1.0);
            let mut xs: Vec<f64> = (0..points).map(|i| start + step * i as f64).collect();
            // Pin the endpoint exactly.
            xs[points - 1] = stop;
            Ok(xs)
        }
    }
}

/// Reject non-finite or non-positive values.
pub(crate) fn require_positive(name: &str, x: f64) -> Result<()> {
    if !x.is_finite() || x <= 0.0 {
        return Err(Error::InvalidParameter(format!("{} must be finite and > 0, got {}", name, x)));
    }
    Ok(())
}

/// Reject non-finite or negative values.
pub(crate) fn require_non_negative(name: &str, x: f64) -> Result<()> {
    if !x.is_finite() || x < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "{} must be finite and >= 0, got {}",
            name, x
        )));
    }
    Ok(())
}
