//! Michaelis-Menten rate to Poisson mean mapping.
//!
//! Steady-state product count for a single enzyme species:
//!
//! `lambda = k_cat * n_e_tot * S / (delta_p * (K_m + S))`
//!
//! The product count is then Poisson with mean `lambda`.

use es_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::math::{require_non_negative, require_positive};

/// Fixed kinetic constants of the enzyme/product system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticParams {
    /// Catalytic rate constant (s^-1).
    pub k_cat: f64,
    /// Substrate concentration (M).
    pub substrate: f64,
    /// Product degradation/dilution rate (s^-1).
    pub delta_p: f64,
    /// Michaelis constant (M).
    pub k_m: f64,
}

impl Default for KineticParams {
    fn default() -> Self {
        Self { k_cat: 100.0, substrate: 1e-4, delta_p: 0.1, k_m: 5e-5 }
    }
}

impl KineticParams {
    /// Validated constructor.
    pub fn new(k_cat: f64, substrate: f64, delta_p: f64, k_m: f64) -> Result<Self> {
        let p = Self { k_cat, substrate, delta_p, k_m };
        p.validate()?;
        Ok(p)
    }

    /// Check `k_cat > 0`, `S >= 0`, `delta_p > 0`, `K_m >= 0` and `K_m + S > 0`.
    pub fn validate(&self) -> Result<()> {
        require_positive("k_cat", self.k_cat)?;
        require_non_negative("substrate", self.substrate)?;
        require_positive("delta_p", self.delta_p)?;
        require_non_negative("k_m", self.k_m)?;
        if self.k_m + self.substrate <= 0.0 {
            return Err(Error::InvalidParameter(
                "k_m + substrate must be > 0 (saturation term is 0/0)".to_string(),
            ));
        }
        Ok(())
    }

    /// Products per unit enzyme: `k_cat * S / (delta_p * (K_m + S))`.
    pub fn gain(&self) -> f64 {
        self.k_cat * self.substrate / (self.delta_p * (self.k_m + self.substrate))
    }

    /// Poisson mean `lambda` for total enzyme `n_e_tot >= 0`.
    pub fn mean_products(&self, n_e_tot: f64) -> Result<f64> {
        require_non_negative("n_e_tot", n_e_tot)?;
        Ok(self.k_cat * n_e_tot * self.substrate / (self.delta_p * (self.k_m + self.substrate)))
    }

    /// Enzyme load at which `lambda == n_p`, i.e. where `P(n_p)` peaks.
    ///
    /// `None` when the gain is zero (no substrate), since `lambda` is then
    /// identically zero.
    pub fn peak_enzyme(&self, n_p: u64) -> Option<f64> {
        let g = self.gain();
        if g > 0.0 { Some(n_p as f64 / g) } else { None }
    }
}

/// Probability of exactly `n_p` products at every enzyme load in `n_e_tot`.
pub fn pmf_sweep(n_e_tot: &[f64], params: &KineticParams, n_p: u64) -> Result<Vec<f64>> {
    params.validate()?;
    n_e_tot
        .iter()
        .map(|&e| {
            params
                .mean_products(e)
                .and_then(|lambda| crate::poisson::logpmf(n_p, lambda))
                .map(f64::exp)
        })
        .collect()
}
