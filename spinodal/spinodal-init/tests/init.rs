#![allow(unused_doc_comments)]
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spinodal_core::Grid;
use spinodal_init::*;

#[test]
fn seeded_draws_are_reproducible() {
    let grid = Grid::new(32).unwrap();
    let a = uniform_random(&grid, 0xC0FFEE);
    let b = uniform_random(&grid, 0xC0FFEE);
    assert_eq!(a, b);
    assert_ne!(a, uniform_random(&grid, 0xC0FFEF));
}

#[test]
fn seeded_source_advances_between_samples() {
    let grid = Grid::new(8).unwrap();
    let mut src = SeededUniform::new_seeded(3);
    let first = src.sample(&grid);
    let second = src.sample(&grid);
    assert_ne!(first, second);
    assert_eq!(first, uniform_random(&grid, 3));
}

#[test]
fn uniform_noise_is_roughly_centered() {
    // 128² draws of U[-1, 1): sample mean has std ≈ 0.0045.
    let grid = Grid::new(128).unwrap();
    let f = uniform_random(&grid, 42);
    assert!(f.mean().abs() < 0.03, "mean={}", f.mean());
    assert!(f.min() >= -1.0 && f.max() < 1.0);
    assert!(f.max() - f.min() > 1.9, "range too narrow: [{}, {}]", f.min(), f.max());
}

#[test]
fn custom_range_and_rng() {
    let grid = Grid::new(16).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let f = uniform_random_with(&grid, &mut rng, 0.2, 0.3);
    assert!(f.min() >= 0.2 && f.max() < 0.3);
    assert_eq!(f, SeededUniform::with_range(9, 0.2, 0.3).sample(&grid));
}

#[test]
fn sinusoid_values() {
    let grid = Grid::new(32).unwrap();
    let f = sinusoid(&grid, 0.01, 1, 1);
    // x = 8h = 0.25, y = 8h = 0.25 → peak
    assert!((f.data[[8, 8]] - 0.01).abs() < 1e-15);
    assert!((f.data[[24, 8]] + 0.01).abs() < 1e-15);
    assert_eq!(f.data[[0, 5]], 0.0);
    assert!(f.mean().abs() < 1e-16);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32, .. ProptestConfig::default()
    })]

    /// Every draw lands in [-1, 1) with the grid's shape.
    #[test]
    fn draws_stay_in_range(seed in any::<u64>(), n in 1usize..40) {
        let grid = Grid::new(n).unwrap();
        let f = uniform_random(&grid, seed);
        prop_assert_eq!(f.dim(), (n, n));
        prop_assert!(f.min() >= -1.0 && f.max() < 1.0);
    }

    /// Negated wavenumbers flip the sign of a mode.
    #[test]
    fn mode_parity(p in -8i32..=8, q in -8i32..=8, amp in 0.001f64..1.0) {
        let grid = Grid::new(16).unwrap();
        let f = sinusoid(&grid, amp, p, q);
        let g = sinusoid(&grid, amp, -p, q);
        for (a, b) in f.data.iter().zip(g.data.iter()) {
            prop_assert!((a + b).abs() < 1e-14);
        }
    }
}
