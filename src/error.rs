//! Error types for the orbital engine.
//!
//! Only construction-time failures are reported. Degenerate pairwise state
//! (coincident centers) is absorbed by the force law and never surfaces here.

use thiserror::Error;

/// Errors reported when bodies or configuration are rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("mass must be strictly positive, got {0}")]
    NonPositiveMass(f64),
    #[error("radius must be strictly positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("body capacity of {max} reached")]
    CapacityExceeded { max: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenient Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Rejects NaN and infinities for the named field.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::NonFinite { field, value })
    }
}
