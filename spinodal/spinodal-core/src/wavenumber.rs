use ndarray::{Array1, Array2};
use std::f64::consts::PI;

use crate::grid::Grid;
use crate::Scalar;

/// Signed integer frequency of FFT bin `i` in the wrap-around layout
/// `[0, 1, …, ⌈n/2⌉-1, -⌊n/2⌋, …, -1]`.
///
/// `n` must be positive (a validated [`Grid`] always is).
#[inline]
pub fn signed_frequency(i: usize, n: usize) -> i64 {
    debug_assert!(n > 0, "signed_frequency needs n > 0");
    if i <= (n - 1) / 2 { i as i64 } else { i as i64 - n as i64 }
}

/// Fourier differentiation multipliers for the real-to-complex 2D spectrum of a [`Grid`].
///
/// The spectrum has shape `(n, n/2 + 1)`: rows are indexed by the full signed
/// frequency `ky`, columns by the non-negative half-spectrum frequency `kx`.
/// `k_deriv[[i, j]] = -(kx[j]² + ky[i]²)` is the Laplacian symbol; its
/// zero-frequency entry is exactly `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct WavenumberTable {
    kx: Array1<Scalar>,
    ky: Array1<Scalar>,
    k_deriv: Array2<Scalar>,
}

impl WavenumberTable {
    pub fn new(grid: &Grid) -> Self {
        let n = grid.n();
        // Bin spacing of fftfreq(n, h / 2π) is 2π / (n h) = 2π / L.
        let scale = 2.0 * PI / grid.length();

        let kx = Array1::from_shape_fn(grid.half_spectrum_len(), |j| j as Scalar * scale);
        let ky = Array1::from_shape_fn(n, |i| signed_frequency(i, n) as Scalar * scale);
        let k_deriv = Array2::from_shape_fn(grid.spectrum_shape(), |(i, j)| {
            -(kx[j] * kx[j] + ky[i] * ky[i])
        });

        Self { kx, ky, k_deriv }
    }

    /// Non-negative wavenumbers along the half-spectrum (column) axis, length `n/2 + 1`.
    #[inline]
    pub fn kx(&self) -> &Array1<Scalar> { &self.kx }

    /// Signed wavenumbers along the full (row) axis, length `n`.
    #[inline]
    pub fn ky(&self) -> &Array1<Scalar> { &self.ky }

    /// Laplacian multiplier, shape `(n, n/2 + 1)`.
    #[inline]
    pub fn k_deriv(&self) -> &Array2<Scalar> { &self.k_deriv }

    /// Largest `|k|²` present in the spectrum.
    pub fn max_k_squared(&self) -> Scalar {
        self.k_deriv.iter().fold(0.0, |acc: Scalar, &k| acc.max(-k))
    }
}
