use spinodal_core::{Field2D, Grid, Parameters, Scalar, SolverError};
use spinodal_spectral::SpectralLaplacian;

/// Time derivative `dc/dt = f(c)` of an autonomous field equation.
pub trait RightHandSide {
    fn eval(&self, c: &Field2D) -> Result<Field2D, SolverError>;
}

/// Cahn-Hilliard right-hand side `f(c) = Δ(c³ − c − a²Δc)`.
///
/// Every term passes through at least one spectral Laplacian, so `f(c)` has zero
/// mean (mass is conserved) and `f(−c) = −f(c)`. No stability check is made
/// here; see [`rk4_dt_limit`](crate::rk4_dt_limit).
#[derive(Clone, Debug)]
pub struct CahnHilliard {
    laplacian: SpectralLaplacian,
    a: Scalar,
}

impl CahnHilliard {
    pub fn new(grid: &Grid, params: &Parameters) -> Self {
        Self::with_laplacian(SpectralLaplacian::new(grid), params)
    }

    /// Reuse an already planned Laplacian.
    pub fn with_laplacian(laplacian: SpectralLaplacian, params: &Parameters) -> Self {
        Self { laplacian, a: params.a() }
    }

    #[inline]
    pub fn a(&self) -> Scalar { self.a }

    #[inline]
    pub fn laplacian(&self) -> &SpectralLaplacian { &self.laplacian }
}

impl RightHandSide for CahnHilliard {
    fn eval(&self, c: &Field2D) -> Result<Field2D, SolverError> {
        let lap_c = self.laplacian.apply(c)?;
        let mut mu = c.data.mapv(|v| v * v * v - v);
        mu.scaled_add(-self.a * self.a, &lap_c.data);
        self.laplacian.apply(&Field2D::from_array(mu))
    }
}
