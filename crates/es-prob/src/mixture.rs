//! Finite Poisson mixtures (ON/OFF promoter switching).
//!
//! The observed count distribution is the weighted superposition of per-state
//! Poisson distributions. Weights are validated, never renormalized: a weight
//! vector that does not sum to one is rejected with [`Error::ShapeMismatch`].

use es_core::{CountModel, Error, Result};

use crate::math::{log_sum_exp, require_non_negative, require_positive};

/// Allowed deviation of `sum(weights)` from 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights `[1 - p_on, p_on]` for a two-state `[mu_off, mu_on]` switch.
pub fn on_off_weights(p_on: f64) -> Result<[f64; 2]> {
    if !p_on.is_finite() || !(0.0..=1.0).contains(&p_on) {
        return Err(Error::InvalidParameter(format!(
            "p_on must be finite and in [0,1], got {}",
            p_on
        )));
    }
    Ok([1.0 - p_on, p_on])
}

/// Single mixture component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    /// Poisson mean of this state.
    pub mu: f64,
    /// Probability of being in this state.
    pub weight: f64,
}

/// Weighted mixture of Poisson components.
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonMixture {
    components: Vec<Component>,
}

impl PoissonMixture {
    /// Build a mixture from parallel `means` / `weights` slices.
    pub fn new(means: &[f64], weights: &[f64]) -> Result<Self> {
        if means.len() != weights.len() {
            return Err(Error::ShapeMismatch(format!(
                "mixture has {} means but {} weights",
                means.len(),
                weights.len()
            )));
        }
        if means.is_empty() {
            return Err(Error::InvalidParameter(
                "mixture must have at least one component".to_string(),
            ));
        }

        let mut components = Vec::with_capacity(means.len());
        for (i, (&mu, &weight)) in means.iter().zip(weights).enumerate() {
            require_positive(&format!("means[{}]", i), mu)?;
            require_non_negative(&format!("weights[{}]", i), weight)?;
            components.push(Component { mu, weight });
        }

        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::ShapeMismatch(format!(
                "mixture weights must sum to 1 (tolerance {:e}), got {}",
                WEIGHT_SUM_TOLERANCE, total
            )));
        }

        Ok(Self { components })
    }

    /// Two-state ON/OFF switch with probability `p_on` of the ON state.
    pub fn on_off(mu_off: f64, mu_on: f64, p_on: f64) -> Result<Self> {
        let w = on_off_weights(p_on)?;
        Self::new(&[mu_off, mu_on], &w)
    }

    /// Components in construction order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// `sum_i w_i * Poisson(k; mu_i)`, accumulated in probability space.
    pub fn pmf_at(&self, k: u64) -> Result<f64> {
        let mut acc = 0.0;
        for c in &self.components {
            acc += c.weight * crate::poisson::logpmf(k, c.mu)?.exp();
        }
        Ok(acc)
    }
}

impl CountModel for PoissonMixture {
    fn logpmf(&self, k: u64) -> Result<f64> {
        let mut terms = Vec::with_capacity(self.components.len());
        for c in &self.components {
            // ln(0) = -inf drops zero-weight states from the sum.
            terms.push(c.weight.ln() + crate::poisson::logpmf(k, c.mu)?);
        }
        Ok(log_sum_exp(&terms))
    }

    fn pmf(&self, k: u64) -> Result<f64> {
        self.pmf_at(k)
    }

    fn mean(&self) -> f64 {
        self.components.iter().map(|c| c.weight * c.mu).sum()
    }

    /// Law of total variance: `E[Var] + Var[E] = sum w mu + sum w mu^2 - mean^2`.
    fn variance(&self) -> f64 {
        let m = self.mean();
        let second: f64 = self.components.iter().map(|c| c.weight * (c.mu + c.mu * c.mu)).sum();
        second - m * m
    }

    fn name(&self) -> &str {
        "poisson_mixture"
    }
}

/// Poisson mixture PMF at every count in `counts`.
pub fn pmf(counts: &[u64], means: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
    let mix = PoissonMixture::new(means, weights)?;
    counts.iter().map(|&k| mix.pmf_at(k)).collect()
}
