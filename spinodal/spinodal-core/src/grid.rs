use crate::error::ConfigError;
use crate::Scalar;

/// Side length of the periodic unit domain.
pub const DOMAIN_LENGTH: Scalar = 1.0;

/// A square, doubly-periodic grid of `n × n` cells over the unit domain.
///
/// Sample points sit at `i·h` for `i in 0..n` on both axes (the right end
/// point is the periodic image of the left one and is not stored).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    n: usize,
    h: Scalar,
}

impl Grid {
    /// Build a grid with `n` cells per axis.
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        Ok(Self { n, h: DOMAIN_LENGTH / n as Scalar })
    }

    /// Cells per axis.
    #[inline]
    pub fn n(&self) -> usize { self.n }

    /// Grid spacing `L / n`.
    #[inline]
    pub fn h(&self) -> Scalar { self.h }

    #[inline]
    pub fn length(&self) -> Scalar { DOMAIN_LENGTH }

    /// Total number of cells, `n²`.
    #[inline]
    pub fn cells(&self) -> usize { self.n * self.n }

    /// Coordinate of sample `i` along either axis.
    #[inline]
    pub fn coord(&self, i: usize) -> Scalar { i as Scalar * self.h }

    /// All sample coordinates along one axis (`linspace(0, L, n, endpoint=false)`).
    pub fn coords(&self) -> Vec<Scalar> {
        (0..self.n).map(|i| self.coord(i)).collect()
    }

    /// Length of the half-spectrum axis produced by a real-to-complex transform.
    #[inline]
    pub fn half_spectrum_len(&self) -> usize { self.n / 2 + 1 }

    /// Shape `(rows, cols)` of the 2D real-to-complex spectrum: the last axis is halved.
    #[inline]
    pub fn spectrum_shape(&self) -> (usize, usize) { (self.n, self.half_spectrum_len()) }
}
