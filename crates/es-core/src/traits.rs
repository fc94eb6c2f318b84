//! Core traits for ExprStat
//!
//! Count models are evaluated pointwise in log space; the trait supplies the
//! elementwise map over a support so that every model shares one code path.

use crate::{PmfResult, Result, Support};

/// A discrete distribution over product counts.
pub trait CountModel {
    /// Log-probability of observing exactly `k` products.
    fn logpmf(&self, k: u64) -> Result<f64>;

    /// Expected count.
    fn mean(&self) -> f64;

    /// Count variance.
    fn variance(&self) -> f64;

    /// Model name used in logs and artifact labels (e.g. "poisson").
    fn name(&self) -> &str;

    /// Probability of observing exactly `k` products.
    fn pmf(&self, k: u64) -> Result<f64> {
        Ok(self.logpmf(k)?.exp())
    }

    /// Evaluate the PMF at every point of `counts`.
    fn pmf_over(&self, counts: &[u64]) -> Result<Vec<f64>> {
        counts.iter().map(|&k| self.pmf(k)).collect()
    }

    /// Evaluate the PMF over a validated [`Support`].
    fn evaluate(&self, support: &Support) -> Result<PmfResult> {
        Ok(PmfResult::new(self.pmf_over(support.counts())?))
    }

    /// Variance-to-mean (Fano) ratio; 1 for Poisson, above 1 when overdispersed.
    fn fano_factor(&self) -> f64 {
        self.variance() / self.mean()
    }
}
