//! ON/OFF switching: two-state Poisson mixtures for several ON probabilities.

use es_core::{Result, Support};
use es_prob::mixture::on_off_weights;
use serde::{Deserialize, Serialize};

use crate::artifact::{FigureSize, PmfPlotArtifact};
use crate::style::StyleConfig;
use crate::{COUNT_X_LABEL, COUNT_Y_LABEL};

/// Two-state Poisson mixtures, one curve per ON probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchingExpression {
    /// Counts are evaluated over `[0, support_end)`.
    pub support_end: u64,
    /// Poisson mean in the OFF state.
    pub mu_off: f64,
    /// Poisson mean in the ON state.
    pub mu_on: f64,
    /// Probabilities of the ON state, one curve each.
    pub p_on_values: Vec<f64>,
}

impl Default for SwitchingExpression {
    fn default() -> Self {
        Self { support_end: 80, mu_off: 2.0, mu_on: 30.0, p_on_values: vec![0.2, 0.5, 0.8] }
    }
}

impl SwitchingExpression {
    /// Build the artifact; each `p_on` must lie in `[0, 1]`.
    pub fn artifact(&self, style: &StyleConfig) -> Result<PmfPlotArtifact> {
        let support = Support::range(0, self.support_end);
        let mut art = PmfPlotArtifact::new(
            "switching",
            "ON/OFF Switching \u{2192} Mixture of Poissons",
            COUNT_X_LABEL,
            COUNT_Y_LABEL,
            FigureSize::inches(8.0, 5.0),
            style,
        );
        art.legend_title = Some("ON-State Probability".to_string());

        let means = [self.mu_off, self.mu_on];
        for &p_on in &self.p_on_values {
            let weights = on_off_weights(p_on)?;
            let y = es_prob::poisson_mixture_pmf(support.counts(), &means, &weights)?;
            art.push_series(format!("p_ON={}", p_on), support.as_f64(), y);
        }
        Ok(art)
    }
}
