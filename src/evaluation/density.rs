//! Probability density of points under a full-rank Gaussian.
//!
//! ## Purpose
//!
//! This module evaluates densities and Mahalanobis distances directly from
//! the canonical factorization, without forming or inverting a covariance.
//!
//! ## Design notes
//!
//! * **Whitening**: a point `x` maps to `z = (x − μ) · rotationᵀ · diag(1/scale)`;
//!   `|z|` is the Mahalanobis distance.
//! * **Log space**: densities are computed as `exp(log_density)` so that
//!   high-dimensional values do not underflow before the final step.
//!
//! ## Invariants
//!
//! * Only full-rank factorizations (rank == ndim) have a density; anything
//!   else is `Degenerate`. Axes with negative variance are `Indefinite`.

use nalgebra::{DMatrix, DVector, RowDVector};

use crate::algorithms::canonical::Decomposition;
use crate::math::linalg::{lit, FloatLinalg};
use crate::primitives::errors::MvarError;

// ============================================================================
// Whitening
// ============================================================================

fn require_full_rank<T: FloatLinalg>(parts: &Decomposition<T>) -> Result<(), MvarError> {
    if parts.rank() != parts.ndim() {
        return Err(MvarError::Degenerate {
            rank: parts.rank(),
            ndim: parts.ndim(),
        });
    }
    let negative = parts.signature().iter().filter(|&&s| s < T::zero()).count();
    if negative > 0 {
        return Err(MvarError::Indefinite(negative));
    }
    Ok(())
}

/// Whiten each row of `points`; returns an `n x rank` matrix.
fn whiten<T: FloatLinalg>(
    mean: &RowDVector<T>,
    parts: &Decomposition<T>,
    points: &DMatrix<T>,
) -> Result<DMatrix<T>, MvarError> {
    if points.ncols() != mean.len() {
        return Err(MvarError::DimensionMismatch {
            expected: mean.len(),
            got: points.ncols(),
        });
    }

    let centered = DMatrix::from_fn(points.nrows(), points.ncols(), |i, j| {
        points[(i, j)] - mean[j]
    });
    let mut z = centered * parts.rotation.transpose();
    for (j, mut column) in z.column_iter_mut().enumerate() {
        column /= parts.scale[j];
    }
    Ok(z)
}

// ============================================================================
// Public evaluation
// ============================================================================

/// Mahalanobis distance of each row of `points` from the mean.
pub fn mahalanobis<T: FloatLinalg>(
    mean: &RowDVector<T>,
    parts: &Decomposition<T>,
    points: &DMatrix<T>,
) -> Result<DVector<T>, MvarError> {
    require_full_rank(parts)?;
    let z = whiten(mean, parts, points)?;
    Ok(DVector::from_iterator(
        z.nrows(),
        z.row_iter().map(|row| row.norm()),
    ))
}

/// Natural log of the density at each row of `points`.
pub fn log_density<T: FloatLinalg>(
    mean: &RowDVector<T>,
    parts: &Decomposition<T>,
    points: &DMatrix<T>,
) -> Result<DVector<T>, MvarError> {
    require_full_rank(parts)?;
    let z = whiten(mean, parts, points)?;

    let half = lit::<T>(0.5);
    let ndim: T = lit(parts.ndim() as f64);
    let log_det = parts.scale.iter().fold(T::zero(), |acc, &s| acc + s.ln());
    let norm = half * ndim * T::two_pi().ln() + log_det;

    Ok(DVector::from_iterator(
        z.nrows(),
        z.row_iter().map(|row| -half * row.norm_squared() - norm),
    ))
}

/// Density at each row of `points`.
pub fn density<T: FloatLinalg>(
    mean: &RowDVector<T>,
    parts: &Decomposition<T>,
    points: &DMatrix<T>,
) -> Result<DVector<T>, MvarError> {
    Ok(log_density(mean, parts, points)?.map(|v| v.exp()))
}
