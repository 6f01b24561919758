//! Relative/absolute tolerance pair for approximate comparisons.
//!
//! ## Purpose
//!
//! Every Gaussian value carries a `Tolerance` that decides when two numbers
//! are "the same" and when a principal axis is small enough to be treated as
//! degenerate. The comparison follows the usual `allclose` rule:
//!
//! ```text
//! |a - b| <= atol + rtol * |b|
//! ```
//!
//! ## Invariants
//!
//! * `rtol >= 0` and `atol >= 0`, both finite (checked by the validator).
//! * The test is asymmetric in `b`, which is the reference value.

use nalgebra::{DMatrix, Dim, Matrix, RealField, Storage};

// ============================================================================
// Tolerance
// ============================================================================

/// Relative and absolute tolerance pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    /// Relative tolerance, scaled by the magnitude of the reference value.
    pub rtol: T,

    /// Absolute tolerance floor.
    pub atol: T,
}

impl<T: RealField + Copy> Tolerance<T> {
    /// Create a tolerance pair.
    pub fn new(rtol: T, atol: T) -> Self {
        Self { rtol, atol }
    }

    /// `true` when `a` is within tolerance of the reference `b`.
    #[inline]
    pub fn approx(&self, a: T, b: T) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }

    /// `true` when `value` is negligible compared with `reference`.
    ///
    /// Used by rank reduction with `reference` set to the largest scale.
    #[inline]
    pub fn negligible(&self, value: T, reference: T) -> bool {
        value.abs() <= self.atol + self.rtol * reference.abs()
    }

    /// Element-wise `approx` over two equally shaped matrices.
    ///
    /// Returns `false` when the shapes differ.
    pub fn allclose<R1, C1, S1, R2, C2, S2>(
        &self,
        a: &Matrix<T, R1, C1, S1>,
        b: &Matrix<T, R2, C2, S2>,
    ) -> bool
    where
        R1: Dim,
        C1: Dim,
        S1: Storage<T, R1, C1>,
        R2: Dim,
        C2: Dim,
        S2: Storage<T, R2, C2>,
    {
        if a.shape() != b.shape() {
            return false;
        }
        a.iter().zip(b.iter()).all(|(&x, &y)| self.approx(x, y))
    }

    /// `true` when the rows of `axes` are mutually orthogonal and of unit length.
    pub fn is_orthonormal(&self, axes: &DMatrix<T>) -> bool {
        let gram = axes * axes.transpose();
        let identity = DMatrix::identity(axes.nrows(), axes.nrows());
        self.allclose(&gram, &identity)
    }
}
