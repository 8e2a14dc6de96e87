use ndarray::{Array2, ArrayView2};
use std::ops::Neg;

use crate::grid::Grid;
use crate::Scalar;

/// A real scalar field (the order parameter `c`) sampled on an `n × n` grid.
///
/// Indexing is `data[[row, col]] = c(x = col·h, y = row·h)`, so the last axis
/// is the one halved by the real-to-complex transform. Fields are values:
/// stepping always produces a new `Field2D` and never aliases an earlier one.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2D {
    pub data: Array2<Scalar>,
}

impl Field2D {
    pub fn from_array(data: Array2<Scalar>) -> Self { Self { data } }

    pub fn zeros(grid: &Grid) -> Self { Self::constant(grid, 0.0) }

    /// A spatially uniform field.
    pub fn constant(grid: &Grid, value: Scalar) -> Self {
        Self { data: Array2::from_elem((grid.n(), grid.n()), value) }
    }

    /// Sample `f(x, y)` at every grid point.
    pub fn from_fn<F>(grid: &Grid, mut f: F) -> Self
    where
        F: FnMut(Scalar, Scalar) -> Scalar,
    {
        let n = grid.n();
        Self {
            data: Array2::from_shape_fn((n, n), |(row, col)| f(grid.coord(col), grid.coord(row))),
        }
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dim(&self) -> (usize, usize) { self.data.dim() }

    #[inline]
    pub fn len(&self) -> usize { self.data.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    #[inline]
    pub fn view(&self) -> ArrayView2<'_, Scalar> { self.data.view() }

    pub fn into_inner(self) -> Array2<Scalar> { self.data }

    #[inline]
    pub fn sum(&self) -> Scalar { self.data.sum() }

    /// Spatial mean; `0.0` for an empty field.
    #[inline]
    pub fn mean(&self) -> Scalar {
        if self.data.is_empty() { 0.0 } else { self.sum() / self.len() as Scalar }
    }

    pub fn min(&self) -> Scalar {
        self.data.iter().copied().fold(Scalar::INFINITY, Scalar::min)
    }

    pub fn max(&self) -> Scalar {
        self.data.iter().copied().fold(Scalar::NEG_INFINITY, Scalar::max)
    }

    /// Largest absolute value.
    pub fn max_abs(&self) -> Scalar {
        self.data.iter().fold(0.0, |acc: Scalar, v| acc.max(v.abs()))
    }

    /// Number of NaN or infinite cells.
    pub fn non_finite_count(&self) -> usize {
        self.data.iter().filter(|v| !v.is_finite()).count()
    }

    #[inline]
    pub fn is_finite(&self) -> bool { self.data.iter().all(|v| v.is_finite()) }
}

impl Neg for Field2D {
    type Output = Field2D;

    fn neg(self) -> Field2D {
        Field2D { data: self.data.mapv_into(|v| -v) }
    }
}

impl Neg for &Field2D {
    type Output = Field2D;

    fn neg(self) -> Field2D {
        Field2D { data: self.data.mapv(|v| -v) }
    }
}
