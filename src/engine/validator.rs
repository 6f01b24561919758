//! Input validation for Gaussian-value construction.
//!
//! ## Purpose
//!
//! This module provides validation functions for factory inputs and builder
//! configuration. It checks requirements such as finite values, matching
//! dimensions, square covariances, and tolerance bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap (shapes) to expensive (finiteness).
//! * **Generics**: Validation is generic over `FloatLinalg` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective shape and numeric constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check covariance positive-semidefiniteness;
//!   canonicalization absorbs small negative eigenvalues.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

use nalgebra::{Dim, Matrix, Storage};

use crate::math::linalg::{to_f64, FloatLinalg};
use crate::primitives::errors::MvarError;
use crate::primitives::tolerance::Tolerance;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for Gaussian-value inputs.
///
/// Provides static methods that return `Result<(), MvarError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Numeric Validation
    // ========================================================================

    /// Validate that every entry of a matrix is finite.
    pub fn validate_finite<T, R, C, S>(values: &Matrix<T, R, C, S>, name: &str) -> Result<(), MvarError>
    where
        T: FloatLinalg,
        R: Dim,
        C: Dim,
        S: Storage<T, R, C>,
    {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(MvarError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    to_f64(val)
                )));
            }
        }
        Ok(())
    }

    /// Validate that every entry of a slice is finite.
    pub fn validate_slice<T: FloatLinalg>(values: &[T], name: &str) -> Result<(), MvarError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(MvarError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    to_f64(val)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Validate that two ambient dimensions agree.
    #[inline]
    pub fn validate_ndim(expected: usize, got: usize) -> Result<(), MvarError> {
        if expected != got {
            return Err(MvarError::DimensionMismatch { expected, got });
        }
        Ok(())
    }

    /// Validate that a matrix is square.
    pub fn validate_square<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> Result<(), MvarError>
    where
        T: FloatLinalg,
        R: Dim,
        C: Dim,
        S: Storage<T, R, C>,
    {
        let (rows, cols) = matrix.shape();
        Self::validate_ndim(rows, cols)
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a tolerance pair: both entries finite and non-negative.
    pub fn validate_tolerance<T: FloatLinalg>(tolerance: &Tolerance<T>) -> Result<(), MvarError> {
        for value in [tolerance.rtol, tolerance.atol] {
            if !value.is_finite() || value < T::zero() {
                return Err(MvarError::InvalidTolerance(to_f64(value)));
            }
        }
        Ok(())
    }

    /// Validate that no builder parameter was set twice.
    #[inline]
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), MvarError> {
        match duplicate {
            Some(name) => Err(MvarError::DuplicateParameter(name)),
            None => Ok(()),
        }
    }
}
