//! Crate-level error types shared by every spinodal crate.

use thiserror::Error;

use crate::Scalar;

/// Rejected configuration, surfaced before any stepping occurs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid resolution must be positive (got n = 0)")]
    ZeroResolution,

    #[error("time step must be positive (got dt = {dt})")]
    NonPositiveDt { dt: Scalar },

    #[error("interface-width coefficient must be positive (got a = {a})")]
    NonPositiveA { a: Scalar },

    #[error("skip_frame must be at least 1")]
    ZeroSkipFrame,

    #[error("parameter {name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: Scalar },
}

/// Failures raised while evaluating or stepping a field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("field shape mismatch: expected {expected}x{expected}, found {}x{}", .found.0, .found.1)]
    ShapeMismatch { expected: usize, found: (usize, usize) },

    #[error("numerical instability at step {step}: {non_finite} non-finite value(s)")]
    NumericalInstability { step: u64, non_finite: usize },
}
