//! Tagged PMF parameter sets.
//!
//! [`PmfParams`] is the serializable description of "which distribution, with
//! which constants". Evaluating it dispatches to the per-distribution modules.

use es_core::{CountModel, Error, PmfResult, Result, Support};
use serde::{Deserialize, Serialize};

use crate::kinetics::KineticParams;
use crate::mixture::PoissonMixture;
use crate::neg_binomial::NegativeBinomial;
use crate::poisson::Poisson;

/// Total enzyme concentration: one value or an ordered sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnzymeLoad {
    /// Single concentration.
    Scalar(f64),
    /// Ordered sequence of concentrations.
    Sweep(Vec<f64>),
}

impl EnzymeLoad {
    fn values(&self) -> Vec<f64> {
        match self {
            Self::Scalar(x) => vec![*x],
            Self::Sweep(xs) => xs.clone(),
        }
    }
}

/// Parameters of one of the supported count models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PmfParams {
    /// Poisson with mean `mu > 0`.
    Poisson {
        /// Mean.
        mu: f64,
    },
    /// Negative Binomial with mean `mu > 0` and dispersion `r > 0`.
    NegativeBinomial {
        /// Mean.
        mu: f64,
        /// Dispersion.
        r: f64,
    },
    /// Poisson mixture given as `(mu_i, w_i)` pairs.
    Mixture {
        /// Components as `(mean, weight)`.
        components: Vec<(f64, f64)>,
    },
    /// Poisson whose mean comes from kinetic constants and an enzyme load.
    KineticRate {
        /// Fixed constants.
        #[serde(flatten)]
        kinetics: KineticParams,
        /// Total enzyme concentration(s).
        n_e_tot: EnzymeLoad,
    },
}

impl PmfParams {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Poisson { .. } => "poisson",
            Self::NegativeBinomial { .. } => "negative_binomial",
            Self::Mixture { .. } => "mixture",
            Self::KineticRate { .. } => "kinetic_rate",
        }
    }

    /// Build the count model for the distribution-over-counts variants.
    ///
    /// A sweep has no single count model; a scalar enzyme load maps to the
    /// Poisson with the derived mean.
    pub fn model(&self) -> Result<Box<dyn CountModel>> {
        Ok(match self {
            Self::Poisson { mu } => Box::new(Poisson::new(*mu)?),
            Self::NegativeBinomial { mu, r } => Box::new(NegativeBinomial::new(*mu, *r)?),
            Self::Mixture { components } => {
                let (means, weights): (Vec<f64>, Vec<f64>) = components.iter().copied().unzip();
                Box::new(PoissonMixture::new(&means, &weights)?)
            }
            Self::KineticRate { kinetics, n_e_tot: EnzymeLoad::Scalar(e) } => {
                kinetics.validate()?;
                Box::new(Poisson::new(kinetics.mean_products(*e)?)?)
            }
            Self::KineticRate { n_e_tot: EnzymeLoad::Sweep(_), .. } => {
                return Err(Error::InvalidParameter(
                    "an enzyme sweep is evaluated with `evaluate_sweep`, not over counts"
                        .to_string(),
                ));
            }
        })
    }

    /// Evaluate over a count support.
    pub fn evaluate(&self, support: &Support) -> Result<PmfResult> {
        let model = self.model()?;
        tracing::debug!(kind = self.kind(), points = support.len(), "evaluating pmf");
        model.evaluate(support)
    }

    /// Evaluate `P(n_p)` across the enzyme load of a `KineticRate` variant.
    ///
    /// The result is aligned with the enzyme values, not with counts.
    pub fn evaluate_sweep(&self, n_p: u64) -> Result<PmfResult> {
        match self {
            Self::KineticRate { kinetics, n_e_tot } => {
                let loads = n_e_tot.values();
                tracing::debug!(points = loads.len(), n_p, "evaluating kinetic sweep");
                Ok(PmfResult::new(crate::kinetics::pmf_sweep(&loads, kinetics, n_p)?))
            }
            other => Err(Error::InvalidParameter(format!(
                "{} parameters have no enzyme sweep",
                other.kind()
            ))),
        }
    }
}
