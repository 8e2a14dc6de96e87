#![allow(unused_doc_comments)]
use spinodal_core::*;
use proptest::prelude::*;
use std::f64::consts::PI;

#[test]
fn zero_resolution_is_rejected() {
    assert_eq!(Grid::new(0), Err(ConfigError::ZeroResolution));
}

// Golden: reference-run grid spacing and coordinates.
#[test]
fn golden_spacing_and_coords() {
    let grid = Grid::new(128).unwrap();
    assert_eq!(grid.n(), 128);
    assert_eq!(grid.cells(), 128 * 128);
    assert!((grid.h() - 1.0 / 128.0).abs() < 1e-15);
    let xs = grid.coords();
    assert_eq!(xs.len(), 128);
    assert_eq!(xs[0], 0.0);
    assert!((xs[127] - 127.0 / 128.0).abs() < 1e-15, "last coord excludes the periodic end point");
}

#[test]
fn signed_frequency_layout_matches_fftfreq() {
    let even: Vec<i64> = (0..8).map(|i| signed_frequency(i, 8)).collect();
    assert_eq!(even, vec![0, 1, 2, 3, -4, -3, -2, -1]);
    let odd: Vec<i64> = (0..7).map(|i| signed_frequency(i, 7)).collect();
    assert_eq!(odd, vec![0, 1, 2, 3, -3, -2, -1]);
    assert_eq!(signed_frequency(0, 1), 0);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "n > 0")]
fn signed_frequency_rejects_empty_axis() {
    signed_frequency(0, 0);
}

// Bin spacing comes from the domain length, not n·h (which rounds for n = 49).
#[test]
fn wavenumber_spacing_uses_domain_length() {
    let grid = Grid::new(49).unwrap();
    assert_eq!(grid.length(), DOMAIN_LENGTH);
    assert_eq!(grid.length(), 1.0);

    let table = WavenumberTable::new(&grid);
    assert_eq!(table.kx()[1], 2.0 * PI);
    assert_eq!(table.ky()[48], -2.0 * PI);
    assert_eq!(table.kx()[24], 24.0 * (2.0 * PI));
}

// Golden: n = 8 table against hand-computed rfftfreq/fftfreq scaled by 2π.
#[test]
fn golden_wavenumbers_n8() {
    let grid = Grid::new(8).unwrap();
    let table = WavenumberTable::new(&grid);
    let two_pi = 2.0 * PI;

    let kx: Vec<f64> = table.kx().iter().map(|k| k / two_pi).collect();
    let ky: Vec<f64> = table.ky().iter().map(|k| k / two_pi).collect();
    let expect_kx = [0.0, 1.0, 2.0, 3.0, 4.0];
    let expect_ky = [0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0];
    for (got, want) in kx.iter().zip(expect_kx) {
        assert!((got - want).abs() < 1e-12, "kx: got={got}, want={want}");
    }
    for (got, want) in ky.iter().zip(expect_ky) {
        assert!((got - want).abs() < 1e-12, "ky: got={got}, want={want}");
    }

    let kd = table.k_deriv();
    let want = -(two_pi * two_pi) * (3.0_f64 * 3.0 + 2.0 * 2.0);
    assert!((kd[[6, 3]] - want).abs() < 1e-9 * want.abs(), "k_deriv[6,3]={}, want={want}", kd[[6, 3]]);
    assert!((table.max_k_squared() - two_pi * two_pi * 32.0).abs() < 1e-9);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, .. ProptestConfig::default()
    })]

    /// Shape of k_deriv matches the real-to-complex spectrum; DC entry is exactly zero; all entries ≤ 0.
    #[test]
    fn k_deriv_shape_and_sign(n in 1usize..70) {
        let grid = Grid::new(n).unwrap();
        let table = WavenumberTable::new(&grid);
        prop_assert_eq!(table.k_deriv().dim(), (n, n / 2 + 1));
        prop_assert_eq!(table.kx().len(), n / 2 + 1);
        prop_assert_eq!(table.ky().len(), n);
        prop_assert_eq!(table.k_deriv()[[0, 0]], 0.0);
        prop_assert!(table.k_deriv().iter().all(|&k| k <= 0.0));
    }
}
