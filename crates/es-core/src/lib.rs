//! # es-core
//!
//! Core types and traits for ExprStat.
//!
//! Everything downstream (PMF math, artifacts, CLI) shares the error type,
//! the count-support value types and the [`CountModel`] trait defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::CountModel;
pub use types::{PmfResult, Support};
