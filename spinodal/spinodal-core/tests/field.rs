use spinodal_core::*;
use std::f64::consts::PI;

#[test]
fn constant_field_statistics() {
    let grid = Grid::new(16).unwrap();
    let f = Field2D::constant(&grid, 0.25);
    assert_eq!(f.dim(), (16, 16));
    assert!((f.mean() - 0.25).abs() < 1e-15);
    assert!((f.sum() - 0.25 * 256.0).abs() < 1e-12);
    assert_eq!(f.min(), 0.25);
    assert_eq!(f.max(), 0.25);
    assert!(f.is_finite());
}

#[test]
fn from_fn_puts_x_on_columns() {
    let grid = Grid::new(4).unwrap();
    let f = Field2D::from_fn(&grid, |x, y| x + 10.0 * y);
    // row = y index, col = x index
    assert!((f.data[[0, 1]] - 0.25).abs() < 1e-15);
    assert!((f.data[[1, 0]] - 2.5).abs() < 1e-15);
    assert!((f.data[[3, 2]] - (0.5 + 7.5)).abs() < 1e-15);
}

#[test]
fn sinusoid_has_zero_mean() {
    let grid = Grid::new(32).unwrap();
    let f = Field2D::from_fn(&grid, |x, y| (2.0 * PI * x).sin() * (2.0 * PI * y).sin());
    assert!(f.mean().abs() < 1e-14, "mean={}", f.mean());
    assert!(f.max_abs() <= 1.0);
}

#[test]
fn negation_is_pointwise() {
    let grid = Grid::new(8).unwrap();
    let f = Field2D::from_fn(&grid, |x, y| x - y * y);
    let g = -&f;
    for (a, b) in f.data.iter().zip(g.data.iter()) {
        assert_eq!(*a, -*b);
    }
    assert_eq!(-g, f);
}

#[test]
fn non_finite_cells_are_counted() {
    let grid = Grid::new(4).unwrap();
    let mut f = Field2D::zeros(&grid);
    assert_eq!(f.non_finite_count(), 0);
    f.data[[1, 2]] = f64::NAN;
    f.data[[3, 3]] = f64::INFINITY;
    assert_eq!(f.non_finite_count(), 2);
    assert!(!f.is_finite());
}
