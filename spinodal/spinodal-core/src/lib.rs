#![doc = r#"
spinodal-core: deterministic building blocks for a pseudo-spectral Cahn-Hilliard solver

This crate provides:
- `Scalar`, the floating-point type used throughout
- `Grid`: resolution and spacing of the doubly-periodic unit square
- `WavenumberTable`: real-to-complex Fourier multipliers, including the Laplacian symbol `k_deriv`
- `Field2D`: an owned `n × n` order-parameter field
- `Parameters`, `RunPlan`, `SimulationConfig`: validated run configuration
- `ConfigError`, `SolverError`: the error taxonomy shared by every spinodal crate

Nothing here allocates FFT plans or draws random numbers; see `spinodal-spectral`
and `spinodal-init` for those.
"#]

pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod wavenumber;

pub type Scalar = f64;

pub use config::{Parameters, RunPlan, SimulationConfig};
pub use error::{ConfigError, SolverError};
pub use field::Field2D;
pub use grid::{Grid, DOMAIN_LENGTH};
pub use wavenumber::{signed_frequency, WavenumberTable};
