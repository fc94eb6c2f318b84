//! Poisson distribution utilities (narrow, constant-rate expression).

use es_core::{CountModel, Error, Result};

use crate::math::{ln_factorial, require_positive};

/// Log-PMF of a Poisson distribution with mean `lambda` at count `k`.
///
/// `lambda = 0` is the point mass at zero, which the kinetic sweep reaches at
/// zero enzyme.
pub fn logpmf(k: u64, lambda: f64) -> Result<f64> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "lambda must be finite and >= 0, got {}",
            lambda
        )));
    }
    if lambda == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }

    let kf = k as f64;
    Ok(kf * lambda.ln() - lambda - ln_factorial(k))
}

/// Poisson PMF with mean `mu > 0` at every count in `counts`.
pub fn pmf(counts: &[u64], mu: f64) -> Result<Vec<f64>> {
    require_positive("mu", mu)?;
    counts.iter().map(|&k| logpmf(k, mu).map(f64::exp)).collect()
}

/// A Poisson count model with mean `mu`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    mu: f64,
}

impl Poisson {
    /// Create a Poisson model; `mu` must be finite and > 0.
    pub fn new(mu: f64) -> Result<Self> {
        require_positive("mu", mu)?;
        Ok(Self { mu })
    }

    /// Mean (and variance).
    pub fn mu(&self) -> f64 {
        self.mu
    }
}

impl CountModel for Poisson {
    fn logpmf(&self, k: u64) -> Result<f64> {
        logpmf(k, self.mu)
    }

    fn mean(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        self.mu
    }

    fn name(&self) -> &str {
        "poisson"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn factorial(n: u64) -> u64 {
        (1..=n).product()
    }

    #[test]
    fn test_basic_value_matches_naive() {
        let k = 3u64;
        let lambda: f64 = 2.5;
        let prob = lambda.powi(k as i32) * (-lambda).exp() / factorial(k) as f64;
        let lp = logpmf(k, lambda).unwrap();
        assert_relative_eq!(lp, prob.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_lambda_zero() {
        assert_eq!(logpmf(0, 0.0).unwrap(), 0.0);
        assert!(logpmf(1, 0.0).unwrap().is_infinite());
    }

    #[test]
    fn test_invalid_lambda() {
        assert!(logpmf(0, -1.0).is_err());
        assert!(logpmf(0, f64::NAN).is_err());
        assert!(pmf(&[0, 1], 0.0).is_err());
        assert!(Poisson::new(-2.0).is_err());
    }

    #[test]
    fn test_large_counts_stay_finite() {
        // 100! overflows nothing in log space.
        let p = pmf(&[100, 170, 500], 40.0).unwrap();
        assert!(p.iter().all(|v| v.is_finite() && *v >= 0.0));
        assert!(p[0] > 0.0);
    }

    #[test]
    fn test_truncated_sum_near_one() {
        let counts: Vec<u64> = (0..100).collect();
        let total: f64 = pmf(&counts, 20.0).unwrap().iter().sum();
        assert!(total >= 0.999, "total={}", total);
        assert!(total <= 1.0 + 1e-12);
    }

    #[test]
    fn test_model_moments() {
        let m = Poisson::new(10.0).unwrap();
        assert_eq!(m.mean(), 10.0);
        assert_eq!(m.variance(), 10.0);
        assert_relative_eq!(m.fano_factor(), 1.0);
        assert_relative_eq!(m.pmf(0).unwrap(), (-10.0f64).exp(), epsilon = 1e-15);
    }
}
