#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use core::f64::consts::FRAC_PI_2;
use mvar_rs::prelude::*;
use nalgebra::{dmatrix, dvector, DMatrix, RowDVector};

fn row(values: &[f64]) -> RowDVector<f64> {
    RowDVector::from_row_slice(values)
}

// ============================================================================
// Moment-based factories
// ============================================================================

#[test]
fn test_from_cov_round_trips() {
    let cov = dmatrix![2.0, 0.6; 0.6, 1.0];
    let a = Mvar::from_cov(&[1.0, -1.0], &cov).unwrap();

    assert_eq!(a.ndim(), 2);
    assert_eq!(a.rank(), 2);
    assert!(a.is_semidefinite());
    assert_relative_eq!(a.cov(), cov, epsilon = 1e-12);
    assert_relative_eq!(*a.mean(), row(&[1.0, -1.0]), epsilon = 1e-12);
}

#[test]
fn test_from_cov_rotation_is_orthonormal() {
    let cov = dmatrix![
        4.0, 1.0, 0.5;
        1.0, 3.0, 0.2;
        0.5, 0.2, 2.0
    ];
    let a = Mvar::from_cov(&[0.0, 0.0, 0.0], &cov).unwrap();
    let r = a.rotation();
    assert_relative_eq!(r * r.transpose(), DMatrix::identity(3, 3), epsilon = 1e-10);

    let s = a.scale_values();
    assert!(s[0] >= s[1] && s[1] >= s[2]);
}

#[test]
fn test_from_cov_drops_null_directions() {
    let a = Mvar::from_cov(&[0.0, 0.0], &dmatrix![1.0, 1.0; 1.0, 1.0]).unwrap();
    assert_eq!(a.rank(), 1);
    assert_eq!(a.ndim(), 2);
    assert!(!a.is_full_rank());
    assert_relative_eq!(a.scale_values()[0], 2.0f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_from_cov_rejects_bad_shapes() {
    assert_eq!(
        Mvar::from_cov(&[0.0, 0.0], &dmatrix![1.0, 0.0, 0.0; 0.0, 1.0, 0.0]),
        Err(MvarError::DimensionMismatch {
            expected: 2,
            got: 3
        })
    );
    assert_eq!(
        Mvar::from_cov(&[0.0], &dmatrix![1.0, 0.0; 0.0, 1.0]),
        Err(MvarError::DimensionMismatch {
            expected: 1,
            got: 2
        })
    );
}

#[test]
fn test_from_cov_rejects_non_finite() {
    let result = Mvar::from_cov(&[0.0, f64::NAN], &dmatrix![1.0, 0.0; 0.0, 1.0]);
    assert!(matches!(result, Err(MvarError::InvalidNumericValue(_))));
}

#[test]
fn test_from_mean_vectors_squares_skewed_rows() {
    let vectors = dmatrix![1.0, 1.0; 0.0, 1.0];
    let a = Mvar::from_mean_vectors(&[0.0, 0.0], &vectors).unwrap();
    assert_relative_eq!(a.cov(), vectors.transpose() * &vectors, epsilon = 1e-12);
}

// ============================================================================
// Roto-scale
// ============================================================================

#[test]
fn test_from_roto_scale_angle() {
    let a: Mvar<f64> = Mvar::from_roto_scale(None, FRAC_PI_2, &[2.0, 1.0]).unwrap();
    assert_eq!(a.ndim(), 2);
    assert_relative_eq!(*a.mean(), row(&[0.0, 0.0]), epsilon = 1e-12);
    assert_relative_eq!(a.cov(), dmatrix![1.0, 0.0; 0.0, 4.0], epsilon = 1e-12);
    assert_relative_eq!(*a.scale_values(), dvector![2.0, 1.0], epsilon = 1e-12);
}

#[test]
fn test_from_roto_scale_matrix() {
    let a: Mvar<f64> = Mvar::from_roto_scale(
        Some(&[1.0, 2.0, 3.0][..]),
        DMatrix::identity(3, 3),
        &[1.0, 2.0, 3.0],
    )
    .unwrap();
    assert_relative_eq!(
        a.cov(),
        dmatrix![1.0, 0.0, 0.0; 0.0, 4.0, 0.0; 0.0, 0.0, 9.0],
        epsilon = 1e-12
    );
    assert_relative_eq!(*a.mean(), row(&[1.0, 2.0, 3.0]), epsilon = 1e-12);
}

#[test]
fn test_from_roto_scale_fewer_axes_than_dimensions() {
    let rotation = dmatrix![0.6, 0.8];
    let a: Mvar<f64> = Mvar::from_roto_scale(None, rotation, &[5.0]).unwrap();
    assert_eq!(a.ndim(), 2);
    assert_eq!(a.rank(), 1);
    assert_relative_eq!(
        a.cov(),
        dmatrix![9.0, 12.0; 12.0, 16.0],
        epsilon = 1e-10
    );
}

#[test]
fn test_from_roto_scale_errors() {
    assert_eq!(
        Mvar::from_roto_scale(Some(&[0.0, 0.0][..]), DMatrix::<f64>::identity(3, 3), &[1.0; 3]),
        Err(MvarError::DimensionMismatch {
            expected: 2,
            got: 3
        })
    );
    assert_eq!(
        Mvar::from_roto_scale(Some(&[0.0, 0.0, 0.0][..]), 0.5f64, &[1.0, 1.0]),
        Err(MvarError::NotTwoDimensional(3))
    );
    assert_eq!(
        Mvar::from_roto_scale(None, DMatrix::<f64>::identity(2, 2), &[1.0]),
        Err(MvarError::DimensionMismatch {
            expected: 2,
            got: 1
        })
    );
}

// ============================================================================
// Data-based factories
// ============================================================================

fn square_corners() -> DMatrix<f64> {
    dmatrix![
        0.0, 0.0;
        2.0, 0.0;
        0.0, 2.0;
        2.0, 2.0
    ]
}

#[test]
fn test_from_data_unbiased_and_biased() {
    let unbiased = Mvar::from_data(&square_corners(), false).unwrap();
    assert_relative_eq!(*unbiased.mean(), row(&[1.0, 1.0]), epsilon = 1e-12);
    assert_relative_eq!(
        unbiased.cov(),
        dmatrix![4.0 / 3.0, 0.0; 0.0, 4.0 / 3.0],
        epsilon = 1e-12
    );

    let biased = Mvar::from_data(&square_corners(), true).unwrap();
    assert_relative_eq!(biased.cov(), DMatrix::identity(2, 2), epsilon = 1e-12);
}

#[test]
fn test_from_weighted_data_unit_weights_match_unweighted() {
    let weighted = Mvar::from_weighted_data(&square_corners(), &[1.0; 4], true).unwrap();
    let plain = Mvar::from_data(&square_corners(), true).unwrap();
    assert!(weighted.approx_eq(&plain));
}

#[test]
fn test_from_weighted_data_zero_weight_ignores_row() {
    let data = dmatrix![0.0; 2.0; 100.0];
    let a = Mvar::from_weighted_data(&data, &[1.0, 1.0, 0.0], true).unwrap();
    assert_relative_eq!(a.mean()[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(a.cov()[(0, 0)], 1.0, epsilon = 1e-12);
}

#[test]
fn test_from_data_errors() {
    assert_eq!(
        Mvar::from_data(&DMatrix::<f64>::zeros(0, 2), false),
        Err(MvarError::EmptyInput)
    );
    assert_eq!(
        Mvar::from_data(&dmatrix![1.0, 2.0], false),
        Err(MvarError::TooFewPoints { got: 1, min: 2 })
    );
    assert!(matches!(
        Mvar::from_weighted_data(&square_corners(), &[1.0, -1.0, 1.0, 1.0], true),
        Err(MvarError::InvalidWeights(_))
    ));
}

// ============================================================================
// Structural factories
// ============================================================================

#[test]
fn test_from_affine_orthogonal_rows() {
    let affine = dmatrix![
        2.0, 0.0, 0.0;
        0.0, 1.0, 0.0;
        3.0, 4.0, 1.0
    ];
    let a = Mvar::from_affine(&affine).unwrap();
    assert_relative_eq!(*a.mean(), row(&[3.0, 4.0]), epsilon = 1e-12);
    assert_relative_eq!(*a.scale_values(), dvector![2.0, 1.0], epsilon = 1e-12);
    assert_relative_eq!(*a.rotation(), DMatrix::identity(2, 2), epsilon = 1e-12);
}

#[test]
fn test_from_affine_keeps_row_signs() {
    let affine = dmatrix![
        -2.0, 0.0, 0.0;
        0.0, 0.0, 1.0
    ];
    let a = Mvar::from_affine(&affine).unwrap();
    assert_eq!(a.rank(), 1);
    assert!(!a.is_semidefinite());
    assert_relative_eq!(*a.rotation(), dmatrix![-1.0, 0.0], epsilon = 1e-12);
    assert_relative_eq!(a.cov(), dmatrix![-4.0, 0.0; 0.0, 0.0], epsilon = 1e-12);
}

#[test]
fn test_from_affine_skewed_rows() {
    let affine = dmatrix![
        1.0, 1.0, 0.0;
        0.0, 1.0, 0.0;
        0.0, 0.0, 1.0
    ];
    let a = Mvar::from_affine(&affine).unwrap();
    assert_relative_eq!(a.cov(), dmatrix![1.0, 1.0; 1.0, 2.0], epsilon = 1e-12);
    let r = a.rotation();
    assert_relative_eq!(r * r.transpose(), DMatrix::identity(2, 2), epsilon = 1e-10);
}

#[test]
fn test_affine_round_trip() {
    let a = Mvar::from_cov(&[1.0, 2.0], &dmatrix![2.0, 0.6; 0.6, 1.0]).unwrap();
    let affine = a.affine();
    assert_eq!(affine.shape(), (3, 3));
    assert_relative_eq!(affine[(2, 2)], 1.0);
    assert_relative_eq!(affine[(0, 2)], 0.0);

    let b = Mvar::from_affine(&affine).unwrap();
    assert!(a.approx_eq(&b));
}

#[test]
fn test_affine_round_trip_indefinite() {
    let a = Mvar::from_cov(&[1.0, 2.0], &dmatrix![1.0, 2.0; 2.0, 1.0]).unwrap();
    assert!(!a.is_semidefinite());

    let b = Mvar::from_affine(&a.affine()).unwrap();
    assert_relative_eq!(b.cov(), dmatrix![1.0, 2.0; 2.0, 1.0], epsilon = 1e-10);
    assert_eq!(b.decomposition().signature(), a.decomposition().signature());
    assert!(a.approx_eq(&b));

    let negated = -&a;
    let c = Mvar::from_affine(&negated.affine()).unwrap();
    assert!(c.approx_eq(&negated));
}

#[test]
fn test_from_affine_empty() {
    assert_eq!(
        Mvar::from_affine(&DMatrix::<f64>::zeros(0, 0)),
        Err(MvarError::EmptyInput)
    );
}

#[test]
fn test_stack_independent_parts() {
    let a = Mvar::from_cov(&[1.0], &dmatrix![1.0]).unwrap();
    let b = Mvar::from_cov(&[2.0], &dmatrix![4.0]).unwrap();
    let c = Mvar::stack(&[&a, &b]).unwrap();

    assert_eq!(c.ndim(), 2);
    assert_relative_eq!(*c.mean(), row(&[1.0, 2.0]), epsilon = 1e-12);
    assert_relative_eq!(c.cov(), dmatrix![1.0, 0.0; 0.0, 4.0], epsilon = 1e-12);
    assert_relative_eq!(*c.scale_values(), dvector![2.0, 1.0], epsilon = 1e-12);
}

#[test]
fn test_stack_keeps_flat_parts_flat() {
    let point = Mvar::builder().mean(&[5.0]).build().unwrap();
    let b = Mvar::from_cov(&[0.0, 0.0], &dmatrix![1.0, 0.0; 0.0, 1.0]).unwrap();
    let c = Mvar::stack(&[&point, &b]).unwrap();

    assert_eq!(c.ndim(), 3);
    assert_eq!(c.rank(), 2);
    assert_relative_eq!(*c.mean(), row(&[5.0, 0.0, 0.0]), epsilon = 1e-12);
}

#[test]
fn test_stack_empty() {
    assert_eq!(Mvar::<f64>::stack(&[]), Err(MvarError::EmptyInput));
}

// ============================================================================
// Re-canonicalization
// ============================================================================

#[test]
fn test_canonicalize_is_idempotent() {
    let a = Mvar::from_cov(&[0.0, 1.0], &dmatrix![3.0, 1.0; 1.0, 2.0]).unwrap();
    let b = a.canonicalize();
    assert!(a.approx_eq(&b));
    assert_relative_eq!(*a.scale_values(), *b.scale_values(), epsilon = 1e-12);
    assert_relative_eq!(*a.rotation(), *b.rotation(), epsilon = 1e-10);
}

#[test]
fn test_with_tolerance_drops_small_axes() {
    let a = Mvar::from_cov(&[0.0, 0.0], &dmatrix![1.0, 0.0; 0.0, 1e-4]).unwrap();
    assert_eq!(a.rank(), 2);

    let loose = a.with_tolerance(Tolerance::new(0.05, 0.0)).unwrap();
    assert_eq!(loose.rank(), 1);
    assert_relative_eq!(loose.tolerance().rtol, 0.05);
}

#[test]
fn test_with_tolerance_rejects_invalid() {
    let a = Mvar::from_cov(&[0.0], &dmatrix![1.0]).unwrap();
    assert_eq!(
        a.with_tolerance(Tolerance::new(-1.0, 0.0)),
        Err(MvarError::InvalidTolerance(-1.0))
    );
}

#[test]
fn test_marginal_selects_in_order() {
    let cov = dmatrix![
        4.0, 1.0, 0.0;
        1.0, 2.0, 0.5;
        0.0, 0.5, 1.0
    ];
    let a = Mvar::from_cov(&[1.0, 2.0, 3.0], &cov).unwrap();

    let m = a.marginal(&[2, 0]).unwrap();
    assert_relative_eq!(*m.mean(), row(&[3.0, 1.0]), epsilon = 1e-12);
    assert_relative_eq!(m.cov(), dmatrix![1.0, 0.0; 0.0, 4.0], epsilon = 1e-10);

    let pair = a.marginal(&[0, 1]).unwrap();
    assert_relative_eq!(pair.cov(), dmatrix![4.0, 1.0; 1.0, 2.0], epsilon = 1e-10);
}

#[test]
fn test_marginal_errors() {
    let a = Mvar::from_cov(&[0.0, 0.0], &dmatrix![1.0, 0.0; 0.0, 1.0]).unwrap();
    assert_eq!(a.marginal(&[]), Err(MvarError::EmptyInput));
    assert_eq!(
        a.marginal(&[0, 2]),
        Err(MvarError::DimensionMismatch {
            expected: 2,
            got: 3
        })
    );
}
