#![doc = r#"Initial conditions for spinodal fields.

- `InitialCondition`: draws a starting field for a grid.
- `SeededUniform`: independent uniform draws in `[low, high)` per cell from a reproducible RNG
  (the classic quench from a disordered mixture uses `[-1, 1)`).
- `Mode`: a single separable sine mode `amplitude·sin(2πp x)·sin(2πq y)`.
- `uniform_random`, `uniform_random_with`, `sinusoid`: one-shot helpers.

Notes:
- Deterministic users depend only on spinodal-core; rand is introduced only here.
"#]
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spinodal_core::{Field2D, Grid, Scalar};
use std::f64::consts::PI;

/// Source of starting fields.
pub trait InitialCondition {
    fn sample(&mut self, grid: &Grid) -> Field2D;
}

/// Fill a grid with `low + (high - low)·U[0, 1)` drawn cell by cell in row-major order.
pub fn uniform_random_with<R: Rng>(grid: &Grid, rng: &mut R, low: Scalar, high: Scalar) -> Field2D {
    let n = grid.n();
    let span = high - low;
    let data = Array2::from_shape_simple_fn((n, n), || low + span * rng.gen::<Scalar>());
    Field2D::from_array(data)
}

/// `2·U[0, 1) − 1` per cell from `StdRng::seed_from_u64(seed)`.
///
/// ```
/// use spinodal_core::Grid;
/// use spinodal_init::uniform_random;
///
/// let grid = Grid::new(8).unwrap();
/// let a = uniform_random(&grid, 7);
/// assert_eq!(a, uniform_random(&grid, 7));
/// assert!(a.min() >= -1.0 && a.max() < 1.0);
/// ```
pub fn uniform_random(grid: &Grid, seed: u64) -> Field2D {
    SeededUniform::new_seeded(seed).sample(grid)
}

/// `amplitude·sin(2πp x)·sin(2πq y)`.
pub fn sinusoid(grid: &Grid, amplitude: Scalar, p: i32, q: i32) -> Field2D {
    Mode { amplitude, p, q }.sample(grid)
}

/// Seeded uniform noise: owns a reproducible RNG, so successive samples differ
/// but the whole sequence is fixed by the seed.
#[derive(Clone, Debug)]
pub struct SeededUniform {
    rng: StdRng,
    low: Scalar,
    high: Scalar,
}

impl SeededUniform {
    /// Uniform in `[-1, 1)`.
    pub fn new_seeded(seed: u64) -> Self {
        Self::with_range(seed, -1.0, 1.0)
    }

    pub fn with_range(seed: u64, low: Scalar, high: Scalar) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), low, high }
    }
}

impl InitialCondition for SeededUniform {
    #[inline]
    fn sample(&mut self, grid: &Grid) -> Field2D {
        uniform_random_with(grid, &mut self.rng, self.low, self.high)
    }
}

/// Single separable sine mode with integer wavenumbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mode {
    pub amplitude: Scalar,
    pub p: i32,
    pub q: i32,
}

impl InitialCondition for Mode {
    fn sample(&mut self, grid: &Grid) -> Field2D {
        let (kp, kq) = (2.0 * PI * self.p as Scalar, 2.0 * PI * self.q as Scalar);
        Field2D::from_fn(grid, |x, y| self.amplitude * (kp * x).sin() * (kq * y).sin())
    }
}
