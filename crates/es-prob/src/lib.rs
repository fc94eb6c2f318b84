//! Count-distribution building blocks for ExprStat.
//!
//! This crate hosts the PMF math behind the expression scenarios:
//! - Poisson (narrow, constant-rate expression)
//! - Negative Binomial in mean/dispersion form (bursty expression)
//! - Poisson mixtures (ON/OFF switching)
//! - Michaelis-Menten rate to Poisson mean mapping (enzyme sweeps)
//!
//! Everything is evaluated in log space with `lnΓ` and exponentiated at the end.

pub mod distributions;
pub mod kinetics;
pub mod math;
pub mod mixture;
pub mod model;
pub mod neg_binomial;
pub mod poisson;

pub use distributions::{
    kinetic_pmf_sweep, negative_binomial_pmf, poisson_mixture_pmf, poisson_pmf,
};
pub use kinetics::KineticParams;
pub use model::{EnzymeLoad, PmfParams};
