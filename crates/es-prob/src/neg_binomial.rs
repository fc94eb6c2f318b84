//! Negative binomial distribution utilities (bursty expression).

use es_core::{CountModel, Error, Result};

use crate::math::{ln_factorial, ln_multiset_coeff, require_positive};

/// Log-PMF of a Negative Binomial parameterized by mean `mu` and dispersion `r`.
///
/// - `mu > 0`
/// - `r > 0` (real-valued; smaller `r` means burstier)
/// - `Var(Y) = mu * (1 + mu / r)`
///
/// `ln p` and `ln(1-p)` are taken straight from `mu` and `r` rather than from a
/// rounded `p = r / (r + mu)`, which collapses to 1.0 for large `r`. The result
/// tends to the Poisson log-PMF as `r -> inf`.
pub fn logpmf_mean_disp(k: u64, mu: f64, r: f64) -> Result<f64> {
    require_positive("mu", mu)?;
    require_positive("r", r)?;

    let kf = k as f64;
    let ln_1p_mu_r = (mu / r).ln_1p();
    if r > kf {
        // Π_{j<k} (r + j) * (mu / (r + mu))^k = mu^k * Π_{j<k} (1 + j/r) / (1 + mu/r)^k
        let rising: f64 = (0..k).map(|j| (j as f64 / r).ln_1p()).sum();
        Ok(rising + kf * mu.ln() - (kf + r) * ln_1p_mu_r - ln_factorial(k))
    } else {
        let ln_q = (mu / (r + mu)).ln();
        Ok(ln_multiset_coeff(k, r) - r * ln_1p_mu_r + kf * ln_q)
    }
}

/// Log-PMF of a Negative Binomial distribution parameterized by `r` and `p`.
///
/// PMF (counting failures `k` before `r` successes):
/// `P(K=k) = C(k+r-1, k) * (1-p)^k * p^r`
///
/// - `r > 0`
/// - `0 < p < 1`
pub fn logpmf_r_p(k: u64, r: f64, p: f64) -> Result<f64> {
    require_positive("r", r)?;
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return Err(Error::InvalidParameter(format!(
            "p must be finite and in (0,1), got {}",
            p
        )));
    }

    let kf = k as f64;
    // Exact for the p given; a p already rounded near 1 cannot be recovered here.
    Ok(ln_multiset_coeff(k, r) + r * p.ln() + kf * (-p).ln_1p())
}

/// Negative Binomial PMF with mean `mu` and dispersion `r` at every count in `counts`.
pub fn pmf(counts: &[u64], mu: f64, r: f64) -> Result<Vec<f64>> {
    require_positive("mu", mu)?;
    require_positive("r", r)?;
    counts.iter().map(|&k| logpmf_mean_disp(k, mu, r).map(f64::exp)).collect()
}

/// `Var(Y) = mu + mu^2 / r`.
pub fn variance(mu: f64, r: f64) -> f64 {
    mu + mu * mu / r
}

/// `Var(Y) / E(Y) = 1 + mu / r`.
pub fn variance_to_mean(mu: f64, r: f64) -> f64 {
    1.0 + mu / r
}

/// A Negative Binomial count model in mean/dispersion form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeBinomial {
    mu: f64,
    r: f64,
}

impl NegativeBinomial {
    /// Create a model; both `mu` and `r` must be finite and > 0.
    pub fn new(mu: f64, r: f64) -> Result<Self> {
        require_positive("mu", mu)?;
        require_positive("r", r)?;
        Ok(Self { mu, r })
    }

    /// Mean.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Dispersion.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Success probability `r / (r + mu)`.
    pub fn p(&self) -> f64 {
        self.r / (self.r + self.mu)
    }
}

impl CountModel for NegativeBinomial {
    fn logpmf(&self, k: u64) -> Result<f64> {
        logpmf_mean_disp(k, self.mu, self.r)
    }

    fn mean(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        variance(self.mu, self.r)
    }

    fn name(&self) -> &str {
        "negative_binomial"
    }
}
