//! # es-viz
//!
//! Visualization data artifacts for ExprStat.
//!
//! Each expression scenario is emitted as a plot-friendly JSON structure
//! (labelled `x`/`y` arrays plus explicit style options). Drawing is left to
//! whichever renderer consumes the artifact.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod bursty;
pub mod narrow;
pub mod style;
pub mod sweep;
pub mod switching;

pub use artifact::{Annotation, FigureSize, PmfPlotArtifact, Series};
pub use bursty::BurstyExpression;
pub use narrow::NarrowExpression;
pub use style::{BuiltinTheme, StyleConfig, resolve_style};
pub use sweep::EnzymeSweep;
pub use switching::SwitchingExpression;

pub(crate) const COUNT_X_LABEL: &str = "Product count (n_p)";
pub(crate) const COUNT_Y_LABEL: &str = "Probability [P(n_p)]";
