#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use mvar_rs::prelude::*;
use nalgebra::{dmatrix, DMatrix};

fn a() -> Mvar<f64> {
    Mvar::from_cov(&[1.0, 2.0], &dmatrix![2.0, 0.5; 0.5, 1.0]).unwrap()
}

fn b() -> Mvar<f64> {
    Mvar::from_cov(&[3.0, 3.0], &dmatrix![2.0, 0.0; 0.0, 2.0]).unwrap()
}

fn m() -> DMatrix<f64> {
    dmatrix![2.0, 1.0; 0.0, 1.0]
}

// ============================================================================
// Binary operators
// ============================================================================

#[test]
fn test_add_and_sub_operators() {
    let (a, b) = (a(), b());
    assert!((&a + &b).approx_eq(&a.checked_add(&b).unwrap()));
    assert!((a.clone() + b.clone()).approx_eq(&a.checked_add(&b).unwrap()));
    assert!((&a - &b).approx_eq(&a.checked_sub(&b).unwrap()));
    assert!((&(&a - &b) + &b).approx_eq(&a));
}

#[test]
fn test_neg_is_additive_inverse() {
    let a = a();
    let neg = -&a;
    assert!(!neg.is_semidefinite());
    assert_relative_eq!(neg.cov(), -a.cov(), epsilon = 1e-10);
    assert!((-neg).approx_eq(&a));
}

#[test]
fn test_scalar_on_either_side() {
    let a = a();
    let right = &a * 2.0;
    let left = 2.0 * &a;
    let owned = 2.0 * a.clone();
    assert!(right.approx_eq(&left));
    assert!(right.approx_eq(&owned));
    assert!(right.approx_eq(&(a.clone() * 2.0)));
    assert_relative_eq!(right.cov(), a.cov() * 2.0, epsilon = 1e-10);
}

#[test]
fn test_matrix_products() {
    let (a, b, m) = (a(), b(), m());
    assert!((&a * &m).approx_eq(&a.transform(&m).unwrap()));
    assert!((a.clone() * m.clone()).approx_eq(&a.transform(&m).unwrap()));

    let left: DMatrix<f64> = &m * &a;
    assert_relative_eq!(left, &m * a.sqrt_cov(), epsilon = 1e-12);
    let owned: DMatrix<f64> = m.clone() * a.clone();
    assert_relative_eq!(owned, left, epsilon = 1e-12);

    assert!((&a * &b).approx_eq(&a.checked_mul(&b).unwrap()));
}

#[test]
fn test_division_operators() {
    let (a, b, m) = (a(), b(), m());
    assert!((&a / 2.0).approx_eq(&(&a * 0.5)));
    assert!((a.clone() / 2.0).approx_eq(&(&a * 0.5)));
    assert!((&a / &m).approx_eq(&a.checked_div(&m).unwrap()));
    assert!((&a / &b).approx_eq(&a.checked_div(&b).unwrap()));
    assert!((a.clone() / b.clone()).approx_eq(&a.checked_div(&b).unwrap()));
}

#[test]
fn test_blend_operator() {
    let (a, b) = (a(), b());
    let fused = &a & &b;
    assert!(fused.approx_eq(&Mvar::blend(&[&a, &b]).unwrap()));
    assert!((a.clone() & b.clone()).approx_eq(&fused));
}

// ============================================================================
// In-place operators
// ============================================================================

#[test]
fn test_assign_operators_replace_value() {
    let (a, b, m) = (a(), b(), m());

    let mut c = a.clone();
    c += &b;
    c -= &b;
    assert!(c.approx_eq(&a));

    c *= 4.0;
    c /= 4.0;
    assert!(c.approx_eq(&a));

    c *= &m;
    c /= &m;
    assert!(c.approx_eq(&a));

    c += b.clone();
    assert!(c.approx_eq(&(&a + &b)));

    let mut d = a.clone();
    d &= &b;
    assert!(d.approx_eq(&(&a & &b)));
}

// ============================================================================
// Panics
// ============================================================================

#[test]
#[should_panic(expected = "Dimension mismatch")]
fn test_add_mismatched_dimensions_panics() {
    let one = Mvar::from_cov(&[0.0], &dmatrix![1.0]).unwrap();
    let _ = &a() + &one;
}

#[test]
#[should_panic(expected = "Matrix is singular")]
fn test_divide_by_singular_matrix_panics() {
    let singular = dmatrix![1.0, 2.0; 2.0, 4.0];
    let _ = &a() / &singular;
}

#[test]
fn test_scalar_and_matrix_divided_by_gaussian() {
    let (a, m) = (a(), m());

    let scalar = 2.0 / &a;
    assert!(scalar.approx_eq(&(&a.inverse() * 2.0)));
    assert!((2.0 / a.clone()).approx_eq(&scalar));

    let matrix: DMatrix<f64> = &m / &a;
    assert_relative_eq!(matrix, &m * a.inverse().sqrt_cov(), epsilon = 1e-10);
    let owned: DMatrix<f64> = m.clone() / a.clone();
    assert_relative_eq!(owned, matrix, epsilon = 1e-12);
}
