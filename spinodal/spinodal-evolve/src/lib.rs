#![doc = r#"Cahn-Hilliard time stepping on the periodic unit square.

Provides:
- `Evolver<S>` trait: one fixed-size step from a state to a fresh state.
- `RightHandSide` / `CahnHilliard`: `f(c) = Δ(c³ − c − a²Δc)` via the spectral Laplacian.
- `Rk4`: classical four-stage Runge-Kutta over any right-hand side.
- `Integrator`: pull-based cursor over `c₀, c₁, …` with `advance(skip)` and a `frames` stream.
- `rk4_dt_limit`: advisory explicit-stability bound for a grid and `a`.
- `conserved_mean`: helper to check mass conservation across steps.

```rust
use spinodal_core::{Field2D, Grid, Parameters};
use spinodal_evolve::{conserved_mean, Integrator};
use std::f64::consts::PI;

let grid = Grid::new(16).unwrap();
let params = Parameters::new(0.05, 1e-6).unwrap();
let c0 = Field2D::from_fn(&grid, |x, y| 0.01 * (2.0 * PI * x).sin() * (2.0 * PI * y).sin());

let mut it = Integrator::new(&grid, &params, c0.clone()).unwrap();
assert_eq!(it.pull().unwrap(), c0);
let c10 = it.advance(9).unwrap();
assert_eq!(it.steps(), 10);
assert!(conserved_mean(&c0, &c10, 1e-10));
```
"#]
use spinodal_core::{Field2D, Scalar, SolverError};

pub mod integrator;
pub mod rhs;
pub mod rk4;
pub mod stability;

pub use integrator::{Frame, Frames, Integrator};
pub use rhs::{CahnHilliard, RightHandSide};
pub use rk4::Rk4;
pub use stability::{rk4_dt_limit, RK4_REAL_AXIS_LIMIT};

/// A fixed-step evolution scheme. Steps never mutate their input.
pub trait Evolver<S> {
    fn step(&self, state: &S, dt: Scalar) -> Result<S, SolverError>;
}

/// Check conservation of the spatial mean between two fields within a relative tolerance.
///
/// Returns true iff:
/// |mean(next) - mean(prev)| ≤ tol * max(1.0, |mean(prev)|)
#[inline]
pub fn conserved_mean(prev: &Field2D, next: &Field2D, tol: Scalar) -> bool {
    let mp = prev.mean();
    let mn = next.mean();
    let diff = (mn - mp).abs();
    let denom = 1.0_f64.max(mp.abs());
    diff <= tol * denom
}
