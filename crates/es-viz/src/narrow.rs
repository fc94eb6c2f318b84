//! Narrow enzyme distribution: Poisson curves for several means.

use es_core::{Result, Support};
use serde::{Deserialize, Serialize};

use crate::artifact::{FigureSize, PmfPlotArtifact};
use crate::style::StyleConfig;
use crate::{COUNT_X_LABEL, COUNT_Y_LABEL};

/// Poisson PMFs, one curve per mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrowExpression {
    /// Counts are evaluated over `[0, support_end)`.
    pub support_end: u64,
    /// Poisson means, each > 0.
    pub means: Vec<f64>,
}

impl Default for NarrowExpression {
    fn default() -> Self {
        Self { support_end: 80, means: vec![10.0, 20.0, 40.0] }
    }
}

impl NarrowExpression {
    /// Build the artifact; any invalid mean is an error.
    pub fn artifact(&self, style: &StyleConfig) -> Result<PmfPlotArtifact> {
        let support = Support::range(0, self.support_end);
        let mut art = PmfPlotArtifact::new(
            "narrow",
            "Narrow Enzyme Distribution \u{2192} Poisson(\u{03BC})",
            COUNT_X_LABEL,
            COUNT_Y_LABEL,
            FigureSize::inches(8.0, 6.0),
            style,
        );
        for &mu in &self.means {
            let y = es_prob::poisson_pmf(support.counts(), mu)?;
            art.push_series(format!("\u{03BC}={}", mu), support.as_f64(), y);
        }
        Ok(art)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_artifact_shape() {
        let art = NarrowExpression::default().artifact(&StyleConfig::default()).unwrap();
        assert_eq!(art.scenario, "narrow");
        assert_eq!(art.series.len(), 3);
        assert_eq!(art.series[0].label, "\u{03BC}=10");
        for s in &art.series {
            assert_eq!(s.x.len(), 80);
            assert_eq!(s.y.len(), 80);
            assert!(s.total <= 1.0 + 1e-12);
        }
        // mu=10 and mu=20 are essentially complete on [0, 80).
        assert!(art.series[0].total > 0.999_999);
        assert!(art.series[1].total > 0.999_999);
        assert_eq!(art.figure.width, 576.0);
        assert_ne!(art.series[0].color, art.series[1].color);
    }

    #[test]
    fn test_invalid_mean_is_error() {
        let bad = NarrowExpression { support_end: 10, means: vec![5.0, -1.0] };
        assert!(bad.artifact(&StyleConfig::default()).is_err());
    }
}
