//! Error types for planar-angle

use thiserror::Error;

/// Result type for fallible angle operations
pub type Result<T> = std::result::Result<T, AngleError>;

/// Errors that can occur when normalising, parsing or configuring angles
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AngleError {
    /// A NaN or infinite value cannot be mapped onto a full turn
    #[error("Cannot normalise non-finite angle: {0}")]
    NonFinite(f64),

    /// Malformed angle, range or unit text
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration could not be read or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}
