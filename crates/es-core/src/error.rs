//! Error types for ExprStat

use thiserror::Error;

/// ExprStat error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A mean, dispersion, weight, concentration or support outside its domain
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Mixture means/weights that do not line up (length or normalization)
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Presentation config could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
