use spinodal_core::{Scalar, WavenumberTable};

/// Half-width of the classical RK4 stability region on the negative real axis.
pub const RK4_REAL_AXIS_LIMIT: Scalar = 2.785_293_563_405_282;

/// Largest stable RK4 time step for Cahn-Hilliard on this spectrum (advisory).
///
/// Linearising `f` about a field with `|c| ≤ 1` gives per-mode rates of magnitude
/// at most `2|k|² + a²|k|⁴`; the stiffest mode must stay inside the real-axis
/// stability interval. Returns `+∞` for a grid with no non-zero mode.
pub fn rk4_dt_limit(table: &WavenumberTable, a: Scalar) -> Scalar {
    let k2 = table.max_k_squared();
    let rate = 2.0 * k2 + a * a * k2 * k2;
    if rate > 0.0 { RK4_REAL_AXIS_LIMIT / rate } else { Scalar::INFINITY }
}
