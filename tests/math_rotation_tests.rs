#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use core::f64::consts::FRAC_PI_2;
use mvar_rs::internals::math::rotation::{givens, rotation_2d, RotationSpec};
use mvar_rs::internals::primitives::errors::MvarError;
use nalgebra::{dmatrix, DMatrix};

#[test]
fn test_rotation_2d_quarter_turn() {
    let r = rotation_2d(FRAC_PI_2);
    // Rows are axes: the first axis points along +y.
    assert_relative_eq!(r, dmatrix![0.0, 1.0; -1.0, 0.0], epsilon = 1e-12);
}

#[test]
fn test_rotation_2d_is_orthonormal() {
    let r = rotation_2d(0.7);
    assert_relative_eq!(
        &r * r.transpose(),
        DMatrix::identity(2, 2),
        epsilon = 1e-12
    );
}

#[test]
fn test_givens_embeds_plane_rotation() {
    let g = givens(3, 0, 2, FRAC_PI_2).unwrap();
    assert_relative_eq!(
        g,
        dmatrix![
            0.0, 0.0, 1.0;
            0.0, 1.0, 0.0;
            -1.0, 0.0, 0.0
        ],
        epsilon = 1e-12
    );
}

#[test]
fn test_givens_rejects_bad_plane() {
    assert!(matches!(
        givens::<f64>(2, 0, 2, 0.1),
        Err(MvarError::DimensionMismatch { expected: 2, got: 3 })
    ));
    assert!(givens::<f64>(3, 1, 1, 0.1).is_err());
}

#[test]
fn test_rotation_spec_resolve() {
    let spec = RotationSpec::Angle(0.0_f64);
    assert_eq!(spec.resolve(2).unwrap(), DMatrix::identity(2, 2));

    let spec = RotationSpec::Angle(0.0_f64);
    assert_eq!(spec.resolve(3), Err(MvarError::NotTwoDimensional(3)));

    let spec: RotationSpec<f64> = DMatrix::identity(3, 3).into();
    assert_eq!(
        spec.resolve(2),
        Err(MvarError::DimensionMismatch {
            expected: 2,
            got: 3
        })
    );
}
