//! Linear algebra backend abstraction for Gaussian values.
//!
//! ## Purpose
//!
//! This module bridges the crate's generic float type to the nalgebra
//! routines the algebra relies on: symmetric eigendecomposition, matrix
//! inversion, and standard-normal draws.
//!
//! ## Design notes
//!
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//! * Per-precision default tolerances live here so that f32 values are not
//!   held to f64 accuracy.
//! * Eigenvectors are returned as columns, exactly as nalgebra produces them;
//!   the row-axis convention is applied by the canonicalization layer.

use nalgebra::{DMatrix, DVector, RealField};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::primitives::tolerance::Tolerance;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic float types to the nalgebra backend.
pub trait FloatLinalg: RealField + Copy {
    /// Default relative tolerance for this precision.
    fn default_rtol() -> Self;

    /// Default absolute tolerance for this precision.
    fn default_atol() -> Self;

    /// Eigendecomposition of a symmetric matrix.
    ///
    /// Returns `(eigenvalues, eigenvectors)` with eigenvectors as columns.
    fn symmetric_eigen(matrix: DMatrix<Self>) -> (DVector<Self>, DMatrix<Self>);

    /// Inverse of a square matrix, `None` when singular.
    fn invert(matrix: &DMatrix<Self>) -> Option<DMatrix<Self>>;

    /// Draw one standard-normal variate.
    fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl FloatLinalg for f64 {
    #[inline]
    fn default_rtol() -> Self {
        1e-5
    }
    #[inline]
    fn default_atol() -> Self {
        1e-8
    }
    #[inline]
    fn symmetric_eigen(matrix: DMatrix<Self>) -> (DVector<Self>, DMatrix<Self>) {
        nalgebra_backend::symmetric_eigen(matrix)
    }
    #[inline]
    fn invert(matrix: &DMatrix<Self>) -> Option<DMatrix<Self>> {
        nalgebra_backend::invert(matrix)
    }
    #[inline]
    fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn default_rtol() -> Self {
        1e-4
    }
    #[inline]
    fn default_atol() -> Self {
        1e-6
    }
    #[inline]
    fn symmetric_eigen(matrix: DMatrix<Self>) -> (DVector<Self>, DMatrix<Self>) {
        nalgebra_backend::symmetric_eigen(matrix)
    }
    #[inline]
    fn invert(matrix: &DMatrix<Self>) -> Option<DMatrix<Self>> {
        nalgebra_backend::invert(matrix)
    }
    #[inline]
    fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl<T: FloatLinalg> Default for Tolerance<T> {
    fn default() -> Self {
        Tolerance::new(T::default_rtol(), T::default_atol())
    }
}

/// Convert an `f64` constant into the working precision.
#[inline]
pub fn lit<T: FloatLinalg>(value: f64) -> T {
    nalgebra::convert(value)
}

/// Widen a working-precision value to `f64` for error reporting.
#[inline]
pub fn to_f64<T: FloatLinalg>(value: T) -> f64 {
    nalgebra::try_convert(value).unwrap_or(f64::NAN)
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;

    /// Symmetric eigendecomposition, eigenvectors as columns.
    pub fn symmetric_eigen<T: RealField + Copy>(matrix: DMatrix<T>) -> (DVector<T>, DMatrix<T>) {
        if matrix.is_empty() {
            return (DVector::zeros(0), DMatrix::zeros(0, 0));
        }
        let eigen = matrix.symmetric_eigen();
        (eigen.eigenvalues, eigen.eigenvectors)
    }

    /// Matrix inverse via LU with partial pivoting.
    pub fn invert<T: RealField + Copy>(matrix: &DMatrix<T>) -> Option<DMatrix<T>> {
        if !matrix.is_square() {
            return None;
        }
        matrix.clone().try_inverse()
    }
}
