//! Common value types for ExprStat

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Ordered product-count domain a PMF is evaluated over.
///
/// Invariant: strictly increasing (and non-negative by type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Support {
    counts: Vec<u64>,
}

impl Support {
    /// Build a support from explicit counts, rejecting unordered or repeated values.
    pub fn new(counts: Vec<u64>) -> Result<Self> {
        if let Some(w) = counts.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::InvalidParameter(format!(
                "support must be strictly increasing, got {} followed by {}",
                w[0], w[1]
            )));
        }
        Ok(Self { counts })
    }

    /// Half-open range `[start, end)`.
    pub fn range(start: u64, end: u64) -> Self {
        Self { counts: (start..end).collect() }
    }

    /// Counts as a slice.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Counts converted to `f64` (x-values for plotting).
    pub fn as_f64(&self) -> Vec<f64> {
        self.counts.iter().map(|&k| k as f64).collect()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the support is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl TryFrom<Vec<u64>> for Support {
    type Error = Error;

    fn try_from(counts: Vec<u64>) -> Result<Self> {
        Self::new(counts)
    }
}

impl From<Support> for Vec<u64> {
    fn from(s: Support) -> Self {
        s.counts
    }
}

/// Probabilities aligned index-for-index with a [`Support`] (or an enzyme sweep).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmfResult {
    /// Probability per point.
    pub values: Vec<f64>,
}

impl PmfResult {
    /// Wrap computed probabilities.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Total mass. Close to 1 only when the support covers the whole distribution.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Index of the largest probability (first one on ties). `None` when empty.
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &v) in self.values.iter().enumerate() {
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((i, v)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Mean of the (truncated, unnormalized) mass over `support`.
    pub fn mean(&self, support: &Support) -> Result<f64> {
        self.check_aligned(support)?;
        Ok(support.counts().iter().zip(&self.values).map(|(&k, &p)| k as f64 * p).sum())
    }

    /// Variance of the (truncated, unnormalized) mass over `support`.
    pub fn variance(&self, support: &Support) -> Result<f64> {
        let m = self.mean(support)?;
        Ok(support
            .counts()
            .iter()
            .zip(&self.values)
            .map(|(&k, &p)| {
                let d = k as f64 - m;
                d * d * p
            })
            .sum())
    }

    fn check_aligned(&self, support: &Support) -> Result<()> {
        if support.len() != self.values.len() {
            return Err(Error::ShapeMismatch(format!(
                "support has {} points but result has {}",
                support.len(),
                self.values.len()
            )));
        }
        Ok(())
    }
}
