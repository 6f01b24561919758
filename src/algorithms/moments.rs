//! Sample mean and covariance of observation rows.
//!
//! ## Purpose
//!
//! This module computes the first two moments of a data matrix whose rows
//! are observations and whose columns are dimensions, optionally weighting
//! each observation.
//!
//! ## Design notes
//!
//! * **Normalization**: with `bias` the covariance is divided by `Σw`;
//!   without it by `Σw − Σw²/Σw`, which reduces to `n − 1` for unit weights.
//! * **Weights**: treated as reliability weights. Only their ratios matter.
//!
//! ## Invariants
//!
//! * The returned covariance is symmetric and `ncols x ncols`.
//!
//! ## Non-goals
//!
//! * Streaming or incremental accumulation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

use nalgebra::{DMatrix, RowDVector};

use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::MvarError;

/// Mean row and covariance of `data`.
///
/// `weights`, when given, must hold one non-negative entry per row.
pub fn sample_moments<T: FloatLinalg>(
    data: &DMatrix<T>,
    weights: Option<&[T]>,
    bias: bool,
) -> Result<(RowDVector<T>, DMatrix<T>), MvarError> {
    let (n, ndim) = data.shape();
    if n == 0 || ndim == 0 {
        return Err(MvarError::EmptyInput);
    }

    let weights: Vec<T> = match weights {
        Some(w) if w.len() != n => {
            return Err(MvarError::DimensionMismatch {
                expected: n,
                got: w.len(),
            })
        }
        Some(w) => w.to_vec(),
        None => vec![T::one(); n],
    };
    if let Some(i) = weights.iter().position(|&w| !(w >= T::zero())) {
        return Err(MvarError::InvalidWeights(format!(
            "weight[{}] is negative or not a number",
            i
        )));
    }

    let v1 = weights.iter().fold(T::zero(), |acc, &w| acc + w);
    let v2 = weights.iter().fold(T::zero(), |acc, &w| acc + w * w);
    if v1 <= T::zero() {
        return Err(MvarError::InvalidWeights("weights sum to zero".into()));
    }

    let divisor = if bias { v1 } else { v1 - v2 / v1 };
    if divisor <= T::zero() {
        return Err(MvarError::TooFewPoints { got: n, min: 2 });
    }

    let mut mean = RowDVector::zeros(ndim);
    for (i, row) in data.row_iter().enumerate() {
        mean += row * weights[i];
    }
    mean /= v1;

    let centered = DMatrix::from_fn(n, ndim, |i, j| data[(i, j)] - mean[j]);
    let weighted = DMatrix::from_fn(n, ndim, |i, j| centered[(i, j)] * weights[i]);
    let cov = (centered.transpose() * weighted) / divisor;

    log::trace!(
        "sample moments over {} observations in {} dimensions (divisor {:?})",
        n,
        ndim,
        divisor
    );

    Ok((mean, cov))
}
