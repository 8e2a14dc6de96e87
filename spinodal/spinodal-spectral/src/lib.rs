#![doc = r#"Periodic spectral Laplacian on the unit square.

Provides:
- [`SpectralLaplacian`]: planned forward/inverse FFTs plus the `k_deriv` multiplier of a [`Grid`].
- [`SpectralLaplacian::forward`] / [`SpectralLaplacian::inverse`]: the real-to-complex 2D pair
  (`rfft2` / `irfft2` layout: rows carry the full signed spectrum, columns the `n/2 + 1`
  non-negative half).
- [`SpectralLaplacian::apply`]: `Δc = irfft2(k_deriv · rfft2(c))`.

The transform is exact for band-limited periodic fields, so a sinusoid with integer
wavenumbers `(p, q)` comes back scaled by `-(2π)²(p² + q²)` to round-off.

```rust
use spinodal_core::{Field2D, Grid};
use spinodal_spectral::SpectralLaplacian;
use std::f64::consts::PI;

let grid = Grid::new(16).unwrap();
let lap = SpectralLaplacian::new(&grid);
let c = Field2D::from_fn(&grid, |x, _y| (2.0 * PI * x).cos());
let d = lap.apply(&c).unwrap();
let want = -(2.0 * PI) * (2.0 * PI);
assert!((d.data[[3, 0]] - want).abs() < 1e-9);
```
"#]
use ndarray::Array2;
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use spinodal_core::{Field2D, Grid, Scalar, SolverError, WavenumberTable};
use std::fmt;
use std::sync::Arc;

/// A 2D complex half-spectrum, shape `(n, n/2 + 1)`.
pub type Spectrum = Array2<Complex64>;

/// The periodic Laplacian of one grid, with its FFT plans and multiplier built once.
#[derive(Clone)]
pub struct SpectralLaplacian {
    grid: Grid,
    table: WavenumberTable,
    fft: Arc<dyn Fft<Scalar>>,
    ifft: Arc<dyn Fft<Scalar>>,
}

impl fmt::Debug for SpectralLaplacian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectralLaplacian")
            .field("grid", &self.grid)
            .field("spectrum_shape", &self.grid.spectrum_shape())
            .finish_non_exhaustive()
    }
}

impl SpectralLaplacian {
    pub fn new(grid: &Grid) -> Self {
        let n = grid.n();
        let mut planner = FftPlanner::<Scalar>::new();
        let fft = planner.plan_fft_forward(n);
        let ifft = planner.plan_fft_inverse(n);
        tracing::debug!(n, spectrum = ?grid.spectrum_shape(), "planned spectral laplacian");
        Self { grid: *grid, table: WavenumberTable::new(grid), fft, ifft }
    }

    #[inline]
    pub fn grid(&self) -> &Grid { &self.grid }

    #[inline]
    pub fn table(&self) -> &WavenumberTable { &self.table }

    fn check_field(&self, field: &Field2D) -> Result<(), SolverError> {
        let n = self.grid.n();
        if field.dim() != (n, n) {
            return Err(SolverError::ShapeMismatch { expected: n, found: field.dim() });
        }
        Ok(())
    }

    /// Forward real-to-complex 2D transform (unnormalized).
    ///
    /// Rows are transformed first and truncated to the non-negative half, then
    /// the surviving columns get a full complex transform.
    pub fn forward(&self, field: &Field2D) -> Result<Spectrum, SolverError> {
        self.check_field(field)?;
        let n = self.grid.n();
        let zero = Complex64::new(0.0, 0.0);
        let mut spectrum = Array2::from_elem(self.grid.spectrum_shape(), zero);
        let mut buf = vec![zero; n];

        for (src, mut dst) in field.data.rows().into_iter().zip(spectrum.rows_mut()) {
            for (b, &v) in buf.iter_mut().zip(src.iter()) {
                *b = Complex64::new(v, 0.0);
            }
            self.fft.process(&mut buf);
            // zip stops at n/2 + 1; the dropped bins are conjugates of kept ones
            for (d, b) in dst.iter_mut().zip(buf.iter()) {
                *d = *b;
            }
        }

        for mut col in spectrum.columns_mut() {
            for (b, v) in buf.iter_mut().zip(col.iter()) {
                *b = *v;
            }
            self.fft.process(&mut buf);
            for (v, b) in col.iter_mut().zip(buf.iter()) {
                *v = *b;
            }
        }
        Ok(spectrum)
    }

    /// Inverse of [`forward`](Self::forward), normalized by `1 / n²`.
    ///
    /// Each row's missing negative frequencies are rebuilt from Hermitian symmetry
    /// and only the real part of the result is kept, which discards round-off residue
    /// and any imaginary part left on the zero/Nyquist bins.
    pub fn inverse(&self, mut spectrum: Spectrum) -> Result<Field2D, SolverError> {
        let n = self.grid.n();
        let half = self.grid.half_spectrum_len();
        if spectrum.dim() != self.grid.spectrum_shape() {
            return Err(SolverError::ShapeMismatch { expected: n, found: spectrum.dim() });
        }
        let zero = Complex64::new(0.0, 0.0);
        let mut buf = vec![zero; n];

        for mut col in spectrum.columns_mut() {
            for (b, v) in buf.iter_mut().zip(col.iter()) {
                *b = *v;
            }
            self.ifft.process(&mut buf);
            for (v, b) in col.iter_mut().zip(buf.iter()) {
                *v = *b;
            }
        }

        let norm = 1.0 / (n * n) as Scalar;
        let mut out = Array2::<Scalar>::zeros((n, n));
        for (src, mut dst) in spectrum.rows().into_iter().zip(out.rows_mut()) {
            for (b, v) in buf.iter_mut().zip(src.iter()) {
                *b = *v;
            }
            for j in half..n {
                buf[j] = src[n - j].conj();
            }
            self.ifft.process(&mut buf);
            for (d, b) in dst.iter_mut().zip(buf.iter()) {
                *d = b.re * norm;
            }
        }
        Ok(Field2D::from_array(out))
    }

    /// Periodic Laplacian of `field`.
    pub fn apply(&self, field: &Field2D) -> Result<Field2D, SolverError> {
        let mut spectrum = self.forward(field)?;
        spectrum.zip_mut_with(self.table.k_deriv(), |s, &k| *s *= k);
        self.inverse(spectrum)
    }
}
