//! Run parameters and the serializable configuration a front-end hands to the solver.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::Scalar;

/// Numerical parameters of the Cahn-Hilliard integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    a: Scalar,
    dt: Scalar,
}

#[inline]
fn finite(name: &'static str, value: Scalar) -> Result<Scalar, ConfigError> {
    if value.is_finite() { Ok(value) } else { Err(ConfigError::NonFinite { name, value }) }
}

impl Parameters {
    /// Validate `a > 0` and `dt > 0` (both finite).
    pub fn new(a: Scalar, dt: Scalar) -> Result<Self, ConfigError> {
        if finite("a", a)? <= 0.0 {
            return Err(ConfigError::NonPositiveA { a });
        }
        if finite("dt", dt)? <= 0.0 {
            return Err(ConfigError::NonPositiveDt { dt });
        }
        Ok(Self { a, dt })
    }

    /// Interface-width coefficient.
    #[inline]
    pub fn a(&self) -> Scalar { self.a }

    /// Time-step size.
    #[inline]
    pub fn dt(&self) -> Scalar { self.dt }
}

impl Default for Parameters {
    fn default() -> Self {
        Self { a: DEFAULT_A, dt: DEFAULT_DT }
    }
}

/// Consumer-side pacing: total elementary steps and steps per visible frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunPlan {
    n_step: u64,
    skip_frame: u64,
}

impl RunPlan {
    pub fn new(n_step: u64, skip_frame: u64) -> Result<Self, ConfigError> {
        if skip_frame == 0 {
            return Err(ConfigError::ZeroSkipFrame);
        }
        Ok(Self { n_step, skip_frame })
    }

    #[inline]
    pub fn n_step(&self) -> u64 { self.n_step }

    #[inline]
    pub fn skip_frame(&self) -> u64 { self.skip_frame }

    /// Number of whole frames in the run, `n_step / skip_frame`.
    #[inline]
    pub fn frame_count(&self) -> u64 { self.n_step / self.skip_frame }
}

impl Default for RunPlan {
    fn default() -> Self {
        Self { n_step: DEFAULT_N_STEP, skip_frame: DEFAULT_SKIP_FRAME }
    }
}

pub const DEFAULT_N: usize = 128;
pub const DEFAULT_A: Scalar = 1e-2;
pub const DEFAULT_DT: Scalar = 1e-6 / 4.0;
pub const DEFAULT_N_STEP: u64 = 12_000 * 4;
pub const DEFAULT_SKIP_FRAME: u64 = 10;

/// Flat, serde-friendly configuration. Missing fields take the reference-run defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub n: usize,
    pub a: Scalar,
    pub dt: Scalar,
    pub n_step: u64,
    pub skip_frame: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            a: DEFAULT_A,
            dt: DEFAULT_DT,
            n_step: DEFAULT_N_STEP,
            skip_frame: DEFAULT_SKIP_FRAME,
        }
    }
}

impl SimulationConfig {
    /// Check every field and split into the typed pieces; the first violation wins.
    pub fn validate(&self) -> Result<(Grid, Parameters, RunPlan), ConfigError> {
        let grid = Grid::new(self.n)?;
        let params = Parameters::new(self.a, self.dt)?;
        let plan = RunPlan::new(self.n_step, self.skip_frame)?;
        Ok((grid, params, plan))
    }
}
