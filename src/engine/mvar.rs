//! The Gaussian value type and its derived attributes.
//!
//! ## Purpose
//!
//! `Mvar` is a multivariate normal distribution packaged to behave like a
//! vector: it can be added, scaled, transformed, raised to powers, and
//! blended. This module defines the stored representation and the read-only
//! views derived from it.
//!
//! ## Design notes
//!
//! * **Stored**: the mean row, the canonical `(scale, rotation)` factorization,
//!   and the tolerance pair. Nothing else is cached.
//! * **Derived**: `vectors = diag(scale) · rotation`, the signed covariance
//!   `cov = rotationᵀ · diag(signature · scale²) · rotation` (equal to
//!   `vectorsᵀ · vectors` when no axis is negative), and the
//!   `(rank+1) x (ndim+1)` affine block
//!
//!   ```text
//!   [ vectors  0 ]
//!   [ mean     1 ]
//!   ```
//!
//! * **Immutable in effect**: every operator returns a fresh value. The
//!   in-place operators assign a whole new value, so a receiver is never
//!   observed half-updated.
//!
//! ## Invariants
//!
//! * `rotation · rotationᵀ ≈ I` within the value's tolerance.
//! * `scale` is non-negative, sorted descending, with no negligible entries.
//! * `rotation.ncols() == mean.len()` (the ambient dimension).

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{DMatrix, DVector, RowDVector};

use crate::algorithms::canonical::Decomposition;
use crate::evaluation::density;
use crate::math::linalg::FloatLinalg;
use crate::math::stacking::diagstack;
use crate::primitives::errors::MvarError;
use crate::primitives::tolerance::Tolerance;

// ============================================================================
// Mvar
// ============================================================================

/// A multivariate normal distribution in canonical factorized form.
#[derive(Debug, Clone, PartialEq)]
pub struct Mvar<T: FloatLinalg> {
    pub(crate) mean: RowDVector<T>,
    pub(crate) parts: Decomposition<T>,
    pub(crate) tolerance: Tolerance<T>,
}

impl<T: FloatLinalg> Mvar<T> {
    /// Assemble a value from an already canonical factorization.
    pub(crate) fn from_parts(
        mean: RowDVector<T>,
        parts: Decomposition<T>,
        tolerance: Tolerance<T>,
    ) -> Self {
        debug_assert_eq!(mean.len(), parts.ndim());
        Self {
            mean,
            parts,
            tolerance,
        }
    }

    // ========================================================================
    // Stored attributes
    // ========================================================================

    /// Mean row vector.
    #[inline]
    pub fn mean(&self) -> &RowDVector<T> {
        &self.mean
    }

    /// Unit principal axes as rows (`rank x ndim`).
    #[inline]
    pub fn rotation(&self) -> &DMatrix<T> {
        &self.parts.rotation
    }

    /// Principal-axis magnitudes, largest first.
    #[inline]
    pub fn scale_values(&self) -> &DVector<T> {
        &self.parts.scale
    }

    /// Tolerance pair used for comparisons and rank reduction.
    #[inline]
    pub fn tolerance(&self) -> &Tolerance<T> {
        &self.tolerance
    }

    /// Canonical factorization.
    #[inline]
    pub fn decomposition(&self) -> &Decomposition<T> {
        &self.parts
    }

    /// Ambient dimension.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.mean.len()
    }

    /// Number of retained principal axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.parts.rank()
    }

    /// `true` when no axis carries negative variance.
    #[inline]
    pub fn is_semidefinite(&self) -> bool {
        self.parts.is_semidefinite()
    }

    /// `true` when no axis has been dropped by rank reduction.
    #[inline]
    pub fn is_full_rank(&self) -> bool {
        self.rank() == self.ndim()
    }

    // ========================================================================
    // Derived attributes
    // ========================================================================

    /// Scale as a diagonal matrix.
    pub fn scale(&self) -> DMatrix<T> {
        DMatrix::from_diagonal(&self.parts.scale)
    }

    /// Scaled axes `scale · rotation`.
    pub fn vectors(&self) -> DMatrix<T> {
        self.parts.vectors()
    }

    /// Covariance matrix.
    ///
    /// Negative eigenvalues left by subtraction or a negative scalar are
    /// kept, so this may be indefinite.
    pub fn cov(&self) -> DMatrix<T> {
        self.parts.cov()
    }

    /// Square root of the covariance, `rotationᵀ · scale · rotation`.
    ///
    /// Built from axis magnitudes, so it ignores the signature.
    ///
    /// This is what a Gaussian collapses to when it appears on the right of
    /// a multiplication.
    pub fn sqrt_cov(&self) -> DMatrix<T> {
        self.parts.spectral(|s| s)
    }

    /// Affine block: `vectors` over `mean`, homogeneous column `[0, …, 0, 1]ᵀ`.
    pub fn affine(&self) -> DMatrix<T> {
        let one = DMatrix::from_element(1, 1, T::one());
        let mut affine = diagstack(&[&self.vectors(), &one]);
        affine
            .view_mut((self.rank(), 0), (1, self.ndim()))
            .copy_from(&self.mean);
        affine
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Approximate equality of mean and covariance under this value's tolerance.
    pub fn approx_eq(&self, other: &Mvar<T>) -> bool {
        self.ndim() == other.ndim()
            && self.tolerance.allclose(&self.mean, &other.mean)
            && self.tolerance.allclose(&self.cov(), &other.cov())
    }

    // ========================================================================
    // Density
    // ========================================================================

    /// Density at each row of `points`. Requires full rank.
    pub fn density(&self, points: &DMatrix<T>) -> Result<DVector<T>, MvarError> {
        density::density(&self.mean, &self.parts, points)
    }

    /// Log-density at each row of `points`. Requires full rank.
    pub fn log_density(&self, points: &DMatrix<T>) -> Result<DVector<T>, MvarError> {
        density::log_density(&self.mean, &self.parts, points)
    }

    /// Mahalanobis distance of each row of `points`. Requires full rank.
    pub fn mahalanobis(&self, points: &DMatrix<T>) -> Result<DVector<T>, MvarError> {
        density::mahalanobis(&self.mean, &self.parts, points)
    }
}

// ============================================================================
// approx integration
// ============================================================================

impl<T: FloatLinalg> AbsDiffEq for Mvar<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.ndim() == other.ndim()
            && self.mean.abs_diff_eq(&other.mean, epsilon)
            && self.cov().abs_diff_eq(&other.cov(), epsilon)
    }
}

impl<T: FloatLinalg> RelativeEq for Mvar<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.ndim() == other.ndim()
            && self.mean.relative_eq(&other.mean, epsilon, max_relative)
            && self.cov().relative_eq(&other.cov(), epsilon, max_relative)
    }
}
