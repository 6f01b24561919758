//! Canonical factorization of a covariance into scale and rotation.
//!
//! ## Purpose
//!
//! Any operation that pushes principal axes through a general linear map
//! leaves them skewed: no longer orthogonal, no longer unit length. This
//! module restores the canonical form of the same covariance.
//!
//! ## Design notes
//!
//! * **Square**: form the Gram matrix `Vᵀ·V` of the raw axis rows `V` and
//!   eigendecompose it. Scales are the square roots of the absolute
//!   eigenvalues; each eigenvector becomes one rotation row.
//! * **Sign fix**: each row is first oriented so that its largest-magnitude
//!   component is positive, then negated when its eigenvalue is negative.
//!   The sign of a row's largest-magnitude component (its pivot) therefore
//!   records the sign of its eigenvalue, and the covariance stays signed:
//!   `cov = rotationᵀ · diag(signature · scale²) · rotation`. Negative
//!   eigenvalues arise from subtracting a larger covariance or from a
//!   negative scalar factor, and are carried rather than raised.
//! * **Compress**: axes are sorted by descending scale and any axis with
//!   `scale <= atol + rtol * max_scale` is dropped. This is lossy and
//!   irreversible.
//!
//! ## Invariants
//!
//! * Rotation rows are orthonormal to tolerance after `square`.
//! * Negating a row flips its signature and nothing else.
//! * Scales are non-negative and sorted in descending order after `compress`.
//! * The ambient dimension (rotation column count) never changes.
//!
//! ## Non-goals
//!
//! * This module does not touch the mean.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::cmp::Ordering;
use nalgebra::{DMatrix, DVector, RowDVector};

use crate::math::linalg::{lit, FloatLinalg};
use crate::primitives::tolerance::Tolerance;

// ============================================================================
// Decomposition
// ============================================================================

/// Scale/rotation factorization of a covariance.
///
/// `scale` holds one entry per retained axis; `rotation` holds the matching
/// unit axes as rows, so `rotation` is `rank x ndim`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition<T: FloatLinalg> {
    /// Principal-axis magnitudes.
    pub scale: DVector<T>,

    /// Unit principal axes, one per row.
    pub rotation: DMatrix<T>,
}

impl<T: FloatLinalg> Decomposition<T> {
    /// Number of retained axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.scale.len()
    }

    /// Ambient dimension.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.rotation.ncols()
    }

    /// `+1` per ordinary axis, `-1` per axis carrying a negative eigenvalue.
    pub fn signature(&self) -> DVector<T> {
        DVector::from_iterator(
            self.rank(),
            self.rotation.row_iter().map(|row| {
                if pivot(row.iter().copied()) < T::zero() {
                    -T::one()
                } else {
                    T::one()
                }
            }),
        )
    }

    /// `true` when no axis carries a negative eigenvalue.
    pub fn is_semidefinite(&self) -> bool {
        self.signature().iter().all(|&sign| sign > T::zero())
    }

    /// Scaled axes `diag(scale) · rotation`.
    ///
    /// Row signs follow the rotation, so the signature survives; the Gram
    /// matrix `vectorsᵀ · vectors` is the covariance only for semidefinite
    /// values.
    pub fn vectors(&self) -> DMatrix<T> {
        let mut out = self.rotation.clone();
        for (i, mut row) in out.row_iter_mut().enumerate() {
            row *= self.scale[i];
        }
        out
    }

    /// Signed covariance `rotationᵀ · diag(signature · scale²) · rotation`.
    pub fn cov(&self) -> DMatrix<T> {
        let n = self.ndim();
        if self.rank() == 0 {
            return DMatrix::zeros(n, n);
        }
        let weights = self.signature().component_mul(&self.scale.map(|s| s * s));
        self.rotation.transpose() * DMatrix::from_diagonal(&weights) * &self.rotation
    }

    /// `rotationᵀ · diag(f(scale)) · rotation`.
    ///
    /// With `f` the identity this is the square root of the covariance; with
    /// `f(s) = s^(p-1)` it is the stretch applied to the mean by a power.
    pub fn spectral<F: Fn(T) -> T>(&self, f: F) -> DMatrix<T> {
        let n = self.ndim();
        if self.rank() == 0 {
            return DMatrix::zeros(n, n);
        }
        let diag = DMatrix::from_diagonal(&self.scale.map(f));
        self.rotation.transpose() * diag * &self.rotation
    }
}

// ============================================================================
// Square
// ============================================================================

/// Canonicalize a set of (possibly skewed) axis rows.
pub fn square<T: FloatLinalg>(vectors: &DMatrix<T>, tolerance: &Tolerance<T>) -> Decomposition<T> {
    decompose(vectors.transpose() * vectors, tolerance)
}

/// Factor a symmetric (Gram or covariance) matrix.
///
/// The input is symmetrized first so that round-off asymmetry does not leak
/// into the eigenvectors.
pub fn decompose<T: FloatLinalg>(gram: DMatrix<T>, tolerance: &Tolerance<T>) -> Decomposition<T> {
    let n = gram.nrows();
    let symmetric = (&gram + gram.transpose()) * lit::<T>(0.5);
    let (values, columns) = T::symmetric_eigen(symmetric);

    let mut scale = DVector::zeros(n);
    let mut rotation = DMatrix::zeros(n, n);
    for (i, &lambda) in values.iter().enumerate() {
        let mut axis: RowDVector<T> = columns.column(i).transpose();
        orient(&mut axis);
        if lambda < T::zero() {
            axis.neg_mut();
        }
        scale[i] = lambda.abs().sqrt();
        rotation.set_row(i, &axis);
    }

    compress(scale, rotation, tolerance)
}

/// First largest-magnitude component.
fn pivot<T: FloatLinalg>(values: impl Iterator<Item = T>) -> T {
    values.fold(T::zero(), |best, x| if x.abs() > best.abs() { x } else { best })
}

/// Make the largest-magnitude component of `axis` positive.
pub(crate) fn orient<T: FloatLinalg>(axis: &mut RowDVector<T>) {
    if pivot(axis.iter().copied()) < T::zero() {
        axis.neg_mut();
    }
}

// ============================================================================
// Compress
// ============================================================================

/// Sort axes by descending scale and drop the negligible ones.
///
/// Rows are kept as they are; no re-orthogonalization happens here.
pub fn compress<T: FloatLinalg>(
    scale: DVector<T>,
    rotation: DMatrix<T>,
    tolerance: &Tolerance<T>,
) -> Decomposition<T> {
    let largest = scale.iter().fold(T::zero(), |m, &s| m.max(s.abs()));

    let mut keep: Vec<usize> = (0..scale.len())
        .filter(|&i| !tolerance.negligible(scale[i], largest))
        .collect();
    keep.sort_by(|&a, &b| {
        scale[b]
            .abs()
            .partial_cmp(&scale[a].abs())
            .unwrap_or(Ordering::Equal)
    });

    let dropped = scale.len() - keep.len();
    if dropped > 0 {
        log::debug!(
            "rank reduction dropped {} of {} axes (ndim {})",
            dropped,
            scale.len(),
            rotation.ncols()
        );
    }

    Decomposition {
        scale: scale.select_rows(keep.iter()).map(|s| s.abs()),
        rotation: rotation.select_rows(keep.iter()),
    }
}
