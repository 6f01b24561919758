//! Error types for Gaussian-value construction and algebra.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! factory, checked operator, and evaluation routine in the crate.
//!
//! ## Design notes
//!
//! * **Flat taxonomy**: One enum, one variant per failure class. Callers match
//!   on the variant rather than parsing messages.
//! * **Numerically total algebra**: Near-singular covariance is never an
//!   error. Canonicalization absorbs it by dropping degenerate axes; only
//!   operations that genuinely need an inverse or a proper density report
//!   `SingularMatrix`, `Degenerate` or `Indefinite`.
//!
//! ## Non-goals
//!
//! * This module does not recover from errors; all failures surface to the caller.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;
use thiserror::Error;

// ============================================================================
// Operand Classification
// ============================================================================

/// Classification of a binary-operator operand.
///
/// Used to report unsupported operand combinations without carrying the
/// operand values themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// A Gaussian value (`Mvar`).
    Gaussian,

    /// An ordinary numeric matrix.
    Matrix,

    /// A numeric scalar.
    Scalar,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Gaussian => write!(f, "Gaussian"),
            OperandKind::Matrix => write!(f, "matrix"),
            OperandKind::Scalar => write!(f, "scalar"),
        }
    }
}

// ============================================================================
// MvarError
// ============================================================================

/// Errors raised by Gaussian-value operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MvarError {
    /// No sizing input was supplied, so the ambient dimension is unknown.
    #[error("Cannot infer size: {0}")]
    SizeInference(&'static str),

    /// Operand shapes are incompatible for the requested operation.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Size required by the left operand or the operation.
        expected: usize,
        /// Size actually supplied.
        got: usize,
    },

    /// A binary operator received an operand combination it does not define.
    #[error("Operation `{op}` not supported between {lhs} and {rhs}")]
    UnsupportedOperand {
        /// Operator symbol.
        op: &'static str,
        /// Kind of the left operand.
        lhs: OperandKind,
        /// Kind of the right operand.
        rhs: OperandKind,
    },

    /// The operation is only defined for 2-dimensional values.
    #[error("Operation requires 2 dimensions, value has {0}")]
    NotTwoDimensional(usize),

    /// Input data contains no observations.
    #[error("Input data is empty")]
    EmptyInput,

    /// Not enough observations for the requested normalization.
    #[error("Too few observations: got {got}, need at least {min}")]
    TooFewPoints {
        /// Number of observations supplied.
        got: usize,
        /// Minimum number required.
        min: usize,
    },

    /// Input contains NaN or infinite values.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Tolerance is negative or non-finite.
    #[error("Invalid tolerance: {0} (must be >= 0 and finite)")]
    InvalidTolerance(f64),

    /// Observation weights are negative or sum to zero.
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// A matrix inverse was required but the matrix is singular.
    #[error("Matrix is singular")]
    SingularMatrix,

    /// The operation requires a full-rank distribution.
    #[error("Degenerate distribution: rank {rank} in {ndim} dimensions")]
    Degenerate {
        /// Number of retained principal axes.
        rank: usize,
        /// Ambient dimension.
        ndim: usize,
    },

    /// The operation requires a positive semidefinite covariance.
    #[error("Indefinite covariance: {0} axes carry negative variance")]
    Indefinite(usize),

    /// Builder parameters describe the distribution in incompatible ways.
    #[error("Conflicting parameters: {0}")]
    ConflictingParameters(String),

    /// A builder parameter was set more than once.
    #[error("Parameter `{0}` set more than once")]
    DuplicateParameter(&'static str),
}
