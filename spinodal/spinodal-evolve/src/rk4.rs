use spinodal_core::{Field2D, Scalar, SolverError};

use crate::rhs::RightHandSide;
use crate::Evolver;

/// Classical four-stage Runge-Kutta over a [`RightHandSide`].
///
/// k1 = f(c), k2 = f(c + dt/2·k1), k3 = f(c + dt/2·k2), k4 = f(c + dt·k3)
/// c' = c + dt/6·(k1 + 2k2 + 2k3 + k4)
#[derive(Clone, Debug)]
pub struct Rk4<R> {
    rhs: R,
}

impl<R> Rk4<R> {
    pub fn new(rhs: R) -> Self { Self { rhs } }

    #[inline]
    pub fn rhs(&self) -> &R { &self.rhs }
}

/// `c + s·k` as a new field.
#[inline]
fn offset(c: &Field2D, s: Scalar, k: &Field2D) -> Field2D {
    let mut data = c.data.clone();
    data.scaled_add(s, &k.data);
    Field2D::from_array(data)
}

impl<R: RightHandSide> Evolver<Field2D> for Rk4<R> {
    fn step(&self, c: &Field2D, dt: Scalar) -> Result<Field2D, SolverError> {
        let k1 = self.rhs.eval(c)?;
        let k2 = self.rhs.eval(&offset(c, dt / 2.0, &k1))?;
        let k3 = self.rhs.eval(&offset(c, dt / 2.0, &k2))?;
        let k4 = self.rhs.eval(&offset(c, dt, &k3))?;

        let mut next = c.data.clone();
        next.scaled_add(dt / 6.0, &k1.data);
        next.scaled_add(dt / 3.0, &k2.data);
        next.scaled_add(dt / 3.0, &k3.data);
        next.scaled_add(dt / 6.0, &k4.data);
        Ok(Field2D::from_array(next))
    }
}
