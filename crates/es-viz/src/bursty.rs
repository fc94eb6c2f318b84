//! Bursty enzyme expression: Negative Binomial at a fixed mean, varying dispersion.

use es_core::{Result, Support};
use serde::{Deserialize, Serialize};

use crate::artifact::{FigureSize, PmfPlotArtifact};
use crate::style::StyleConfig;
use crate::{COUNT_X_LABEL, COUNT_Y_LABEL};

/// Negative Binomial PMFs at one mean, one curve per dispersion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurstyExpression {
    /// Counts are evaluated over `[0, support_end)`.
    pub support_end: u64,
    /// Fixed mean product count.
    pub mu: f64,
    /// Burstiness levels; smaller is burstier.
    pub dispersions: Vec<f64>,
}

impl Default for BurstyExpression {
    fn default() -> Self {
        Self { support_end: 100, mu: 20.0, dispersions: vec![1.0, 5.0, 20.0] }
    }
}

impl BurstyExpression {
    /// Build the artifact.
    pub fn artifact(&self, style: &StyleConfig) -> Result<PmfPlotArtifact> {
        let support = Support::range(0, self.support_end);
        let mut art = PmfPlotArtifact::new(
            "bursty",
            "Bursty Enzyme Expression \u{2192} Negative Binomial(\u{03BC}, r)",
            COUNT_X_LABEL,
            COUNT_Y_LABEL,
            FigureSize::inches(8.0, 6.0),
            style,
        );
        for &r in &self.dispersions {
            let y = es_prob::negative_binomial_pmf(support.counts(), self.mu, r)?;
            art.push_series(format!("\u{03BC}={}, r={}", self.mu, r), support.as_f64(), y);
        }
        Ok(art)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_artifact() {
        let art = BurstyExpression::default().artifact(&StyleConfig::default()).unwrap();
        assert_eq!(art.series.len(), 3);
        assert_eq!(art.series[0].label, "\u{03BC}=20, r=1");
        assert_eq!(art.series[0].x.len(), 100);
        // r=1 is geometric: monotone decreasing from n=0.
        let y = &art.series[0].y;
        assert!(y.windows(2).all(|w| w[1] < w[0]));
        // Burstier curves leak more mass past the truncation.
        assert!(art.series[0].total < art.series[1].total);
        assert!(art.series[1].total < art.series[2].total);
    }
}
