#![cfg(feature = "dev")]

use mvar_rs::internals::primitives::errors::{MvarError, OperandKind};

#[test]
fn test_mvar_error_display() {
    let err = MvarError::SizeInference("no inputs");
    assert_eq!(format!("{}", err), "Cannot infer size: no inputs");

    let err = MvarError::DimensionMismatch {
        expected: 3,
        got: 2,
    };
    assert_eq!(format!("{}", err), "Dimension mismatch: expected 3, got 2");

    let err = MvarError::UnsupportedOperand {
        op: "*",
        lhs: OperandKind::Scalar,
        rhs: OperandKind::Matrix,
    };
    assert_eq!(
        format!("{}", err),
        "Operation `*` not supported between scalar and matrix"
    );

    let err = MvarError::NotTwoDimensional(3);
    assert_eq!(
        format!("{}", err),
        "Operation requires 2 dimensions, value has 3"
    );

    let err = MvarError::EmptyInput;
    assert_eq!(format!("{}", err), "Input data is empty");

    let err = MvarError::TooFewPoints { got: 1, min: 2 };
    assert_eq!(
        format!("{}", err),
        "Too few observations: got 1, need at least 2"
    );

    let err = MvarError::InvalidNumericValue("cov[3]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: cov[3]=NaN");

    let err = MvarError::InvalidTolerance(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: -1 (must be >= 0 and finite)"
    );

    let err = MvarError::InvalidWeights("weights sum to zero".to_string());
    assert_eq!(format!("{}", err), "Invalid weights: weights sum to zero");

    let err = MvarError::SingularMatrix;
    assert_eq!(format!("{}", err), "Matrix is singular");

    let err = MvarError::Degenerate { rank: 1, ndim: 2 };
    assert_eq!(
        format!("{}", err),
        "Degenerate distribution: rank 1 in 2 dimensions"
    );

    let err = MvarError::Indefinite(1);
    assert_eq!(
        format!("{}", err),
        "Indefinite covariance: 1 axes carry negative variance"
    );

    let err = MvarError::ConflictingParameters("cov and vectors".to_string());
    assert_eq!(format!("{}", err), "Conflicting parameters: cov and vectors");

    let err = MvarError::DuplicateParameter("mean");
    assert_eq!(format!("{}", err), "Parameter `mean` set more than once");
}

#[test]
fn test_operand_kind_display() {
    assert_eq!(OperandKind::Gaussian.to_string(), "Gaussian");
    assert_eq!(OperandKind::Matrix.to_string(), "matrix");
    assert_eq!(OperandKind::Scalar.to_string(), "scalar");
}

#[test]
fn test_mvar_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&MvarError::EmptyInput);
}

#[test]
fn test_mvar_error_equality() {
    assert_eq!(MvarError::SingularMatrix, MvarError::SingularMatrix);
    assert_ne!(
        MvarError::NotTwoDimensional(1),
        MvarError::NotTwoDimensional(3)
    );
}
