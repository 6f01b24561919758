//! Textbook Kalman measurement update.
//!
//! The engine fuses estimates in information form (`(A⁻¹ + B⁻¹)⁻¹`). This
//! module is the direct gain-form update it must agree with:
//!
//! ```text
//! S = P + R
//! K = P · S⁻¹
//! μ = μp + (μm − μp) · Kᵀ
//! Σ = (I − K) · P
//! ```
//!
//! Mean vectors are rows.

use nalgebra::{DMatrix, RowDVector};

use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::MvarError;

/// Gain-form update of a prior `(mean, cov)` by a measurement `(mean, cov)`.
///
/// Fails with `SingularMatrix` when `P + R` cannot be inverted.
pub fn gain_update<T: FloatLinalg>(
    prior_mean: &RowDVector<T>,
    prior_cov: &DMatrix<T>,
    measured_mean: &RowDVector<T>,
    measured_cov: &DMatrix<T>,
) -> Result<(RowDVector<T>, DMatrix<T>), MvarError> {
    let n = prior_mean.len();
    for got in [prior_cov.nrows(), measured_mean.len(), measured_cov.nrows()] {
        if got != n {
            return Err(MvarError::DimensionMismatch { expected: n, got });
        }
    }

    let innovation_cov = prior_cov + measured_cov;
    let inverse = T::invert(&innovation_cov).ok_or(MvarError::SingularMatrix)?;
    let gain = prior_cov * inverse;

    let innovation = measured_mean - prior_mean;
    let mean = prior_mean + innovation * gain.transpose();
    let cov = (DMatrix::identity(n, n) - &gain) * prior_cov;

    Ok((mean, cov))
}
