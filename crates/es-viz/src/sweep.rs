//! Probability of a fixed product count versus total enzyme concentration.

use es_core::Result;
use es_prob::KineticParams;
use es_prob::math::linspace;
use serde::{Deserialize, Serialize};

use crate::artifact::{Annotation, FigureSize, PmfPlotArtifact};
use crate::style::StyleConfig;

/// `P(n_p)` over a linear grid of total enzyme loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnzymeSweep {
    /// Kinetic constants, flattened into the same object.
    #[serde(flatten)]
    pub kinetics: KineticParams,
    /// Sweep start (M).
    pub start: f64,
    /// Sweep stop (M), inclusive.
    pub stop: f64,
    /// Grid size; 0 gives an empty series, 1 just `start`.
    pub points: usize,
    /// Product count whose probability is tracked.
    pub n_p: u64,
}

impl Default for EnzymeSweep {
    fn default() -> Self {
        Self { kinetics: KineticParams::default(), start: 0.0, stop: 1e-7, points: 500, n_p: 5 }
    }
}

impl EnzymeSweep {
    /// Build the artifact with a parameter box in the upper right.
    pub fn artifact(&self, style: &StyleConfig) -> Result<PmfPlotArtifact> {
        let KineticParams { k_cat, substrate, delta_p, k_m } = self.kinetics;
        let n_e_tot = linspace(self.start, self.stop, self.points)?;
        let y = es_prob::kinetic_pmf_sweep(&n_e_tot, k_cat, substrate, delta_p, k_m, self.n_p)?;

        let mut art = PmfPlotArtifact::new(
            "sweep",
            "Probability P(n_p) vs. Total Enzyme Concentration n_e^tot",
            "Total Enzyme Concentration, n_e^tot (M)",
            &format!("Probability, P(n_p = {})", self.n_p),
            FigureSize::inches(10.0, 6.0),
            style,
        );
        art.annotation = Some(Annotation {
            text: parameter_text(&self.kinetics, self.n_p),
            x: 0.7,
            y: 0.95,
            font_size: style.font.annotation_size,
        });
        art.push_series(format!("P(n_p = {})", self.n_p), n_e_tot, y);
        Ok(art)
    }
}

fn parameter_text(k: &KineticParams, n_p: u64) -> String {
    format!(
        "k_cat = {} s^-1\nS = {:.1e} M\nK_m = {:.1e} M\n\u{03B4}_p = {} s^-1\nn_p = {}",
        k.k_cat, k.substrate, k.k_m, k.delta_p, n_p
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_artifact() {
        let art = EnzymeSweep::default().artifact(&StyleConfig::default()).unwrap();
        assert_eq!(art.series.len(), 1);
        let s = &art.series[0];
        assert_eq!(s.x.len(), 500);
        assert_eq!(s.x[0], 0.0);
        assert_eq!(s.y[0], 0.0);
        assert_eq!(art.y_label, "Probability, P(n_p = 5)");
    }

    #[test]
    fn test_annotation_text() {
        let text = parameter_text(&KineticParams::default(), 5);
        assert_eq!(text, "k_cat = 100 s^-1\nS = 1.0e-4 M\nK_m = 5.0e-5 M\n\u{03B4}_p = 0.1 s^-1\nn_p = 5");
    }

    #[test]
    fn test_wide_sweep_peaks_at_lambda_eq_np() {
        let base = EnzymeSweep::default();
        let peak = base.kinetics.peak_enzyme(5).unwrap();
        let sweep = EnzymeSweep { stop: 2.0 * peak, points: 201, ..base };
        let art = sweep.artifact(&StyleConfig::default()).unwrap();
        let y = art.series[0].y.clone();
        assert_eq!(es_core::PmfResult::new(y).argmax(), Some(100));
    }

    #[test]
    fn test_single_point_sweep() {
        let base = EnzymeSweep::default();
        let peak = base.kinetics.peak_enzyme(5).unwrap();
        let art = EnzymeSweep { start: peak, points: 1, ..base }
            .artifact(&StyleConfig::default())
            .unwrap();
        assert_eq!(art.series[0].x, vec![peak]);
        assert_eq!(art.series[0].y.len(), 1);
        assert!(art.series[0].y[0] > 0.17);
    }

    #[test]
    fn test_invalid_kinetics() {
        let bad = EnzymeSweep {
            kinetics: KineticParams { delta_p: 0.0, ..KineticParams::default() },
            ..EnzymeSweep::default()
        };
        assert!(bad.artifact(&StyleConfig::default()).is_err());
    }
}
