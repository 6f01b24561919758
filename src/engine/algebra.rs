//! Operator semantics for Gaussian values.
//!
//! ## Purpose
//!
//! This module defines what each algebraic operation means when one or
//! both sides are Gaussian values, and dispatches mixed operands through an
//! explicit table.
//!
//! ## Design notes
//!
//! * **Sum**: `A ± B` adds or subtracts covariances and means, as for
//!   independent variables. Subtraction may leave negative eigenvalues,
//!   which the canonical form carries as a per-axis sign so that
//!   `(B - A) + A == B`.
//! * **Linear map**: `A · M` maps the mean to `μ·M` and the covariance to
//!   `Mᵀ·Σ·M`.
//! * **Collapse**: a Gaussian on the right of a product collapses to its
//!   covariance square root, so `A · B == A · sqrt_cov(B)` and
//!   `M · A == M · sqrt_cov(A)` (a plain matrix).
//! * **Power**: scales are raised element-wise, rotation unchanged; the
//!   mean follows `mean · sqrt_cov^(p-1)` on the retained subspace and is
//!   left alone along dropped axes.
//! * **Division**: `X / Y == X · Y⁻¹`, with `Y⁻¹` the reciprocal scalar, the
//!   matrix inverse, or `Y ** -1`. Division reuses the product table, so a
//!   scalar or matrix may be divided by a Gaussian.
//! * **Blend**: `(Σ Aᵢ⁻¹)⁻¹`, the information-form fusion of estimates;
//!   flat estimates are folded through the gain-form update.
//!
//! ## Key concepts
//!
//! ```text
//!   lhs \ rhs │ Gaussian      Matrix        Scalar
//!   ──────────┼─────────────────────────────────────────
//!   Gaussian  │ A·sqrt(B)     A·M           scale
//!   Matrix    │ M·sqrt(A)     x             x
//!   Scalar    │ scale         x             x
//! ```
//!
//! Cells marked `x` are `UnsupportedOperand`.
//!
//! ## Invariants
//!
//! * Results are canonical and carry the Gaussian operand's tolerance
//!   (the left one when both are Gaussian).
//!
//! ## Non-goals
//!
//! * Scalar multiplication by a negative number is not an error: both mean
//!   and covariance scale by `k`, giving a negative-definite value. `-A` is
//!   the additive inverse of `A`, not the distribution of `-x`; use
//!   `A * (-I)` for that.

use nalgebra::{DMatrix, RowDVector};

use crate::algorithms::canonical::{compress, decompose};
use crate::algorithms::kalman::gain_update;
use crate::engine::mvar::Mvar;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::{MvarError, OperandKind};

// ============================================================================
// Operand
// ============================================================================

/// One side of a mixed-type operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<T: FloatLinalg> {
    /// A Gaussian value.
    Gaussian(Mvar<T>),

    /// A plain matrix.
    Matrix(DMatrix<T>),

    /// A plain scalar.
    Scalar(T),
}

impl<T: FloatLinalg> Operand<T> {
    /// Kind tag used in error reports.
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Gaussian(_) => OperandKind::Gaussian,
            Operand::Matrix(_) => OperandKind::Matrix,
            Operand::Scalar(_) => OperandKind::Scalar,
        }
    }

    /// Multiplicative inverse of the operand.
    pub fn reciprocal(self) -> Result<Self, MvarError> {
        match self {
            Operand::Gaussian(a) => Ok(Operand::Gaussian(a.inverse())),
            Operand::Matrix(m) => {
                Validator::validate_square(&m)?;
                T::invert(&m)
                    .map(Operand::Matrix)
                    .ok_or(MvarError::SingularMatrix)
            }
            Operand::Scalar(k) => Ok(Operand::Scalar(T::one() / k)),
        }
    }
}

impl<T: FloatLinalg> From<Mvar<T>> for Operand<T> {
    fn from(value: Mvar<T>) -> Self {
        Operand::Gaussian(value)
    }
}

impl<T: FloatLinalg> From<&Mvar<T>> for Operand<T> {
    fn from(value: &Mvar<T>) -> Self {
        Operand::Gaussian(value.clone())
    }
}

impl<T: FloatLinalg> From<DMatrix<T>> for Operand<T> {
    fn from(value: DMatrix<T>) -> Self {
        Operand::Matrix(value)
    }
}

impl<T: FloatLinalg> From<&DMatrix<T>> for Operand<T> {
    fn from(value: &DMatrix<T>) -> Self {
        Operand::Matrix(value.clone())
    }
}

impl<T: FloatLinalg> From<T> for Operand<T> {
    fn from(value: T) -> Self {
        Operand::Scalar(value)
    }
}

// ============================================================================
// Dispatch
// ============================================================================

fn unsupported<T: FloatLinalg>(op: &'static str, lhs: &Operand<T>, rhs: &Operand<T>) -> MvarError {
    MvarError::UnsupportedOperand {
        op,
        lhs: lhs.kind(),
        rhs: rhs.kind(),
    }
}

/// Multiply two operands according to the dispatch table.
pub fn multiply<T: FloatLinalg>(lhs: Operand<T>, rhs: Operand<T>) -> Result<Operand<T>, MvarError> {
    match (&lhs, &rhs) {
        (Operand::Gaussian(a), Operand::Gaussian(b)) => {
            a.transform(&b.sqrt_cov()).map(Operand::Gaussian)
        }
        (Operand::Gaussian(a), Operand::Matrix(m)) => a.transform(m).map(Operand::Gaussian),
        (Operand::Gaussian(a), Operand::Scalar(k)) | (Operand::Scalar(k), Operand::Gaussian(a)) => {
            Ok(Operand::Gaussian(a.scaled(*k)))
        }
        (Operand::Matrix(m), Operand::Gaussian(a)) => a.left_multiply(m).map(Operand::Matrix),
        _ => Err(unsupported("*", &lhs, &rhs)),
    }
}

/// Divide `lhs` by `rhs`, i.e. multiply by the reciprocal of `rhs`.
///
/// At least one side must be Gaussian: `K / A == K · A⁻¹` and
/// `M / A == M · A⁻¹` follow the scalar and matrix rows of the table.
pub fn divide<T: FloatLinalg>(lhs: Operand<T>, rhs: Operand<T>) -> Result<Operand<T>, MvarError> {
    let is_gaussian = |o: &Operand<T>| matches!(o, Operand::Gaussian(_));
    if !is_gaussian(&lhs) && !is_gaussian(&rhs) {
        return Err(unsupported("/", &lhs, &rhs));
    }
    multiply(lhs, rhs.reciprocal()?)
}

/// Add two operands. Only Gaussian + Gaussian is defined.
pub fn add<T: FloatLinalg>(lhs: Operand<T>, rhs: Operand<T>) -> Result<Operand<T>, MvarError> {
    match (&lhs, &rhs) {
        (Operand::Gaussian(a), Operand::Gaussian(b)) => a.checked_add(b).map(Operand::Gaussian),
        _ => Err(unsupported("+", &lhs, &rhs)),
    }
}

/// Subtract two operands. Only Gaussian − Gaussian is defined.
pub fn subtract<T: FloatLinalg>(lhs: Operand<T>, rhs: Operand<T>) -> Result<Operand<T>, MvarError> {
    match (&lhs, &rhs) {
        (Operand::Gaussian(a), Operand::Gaussian(b)) => a.checked_sub(b).map(Operand::Gaussian),
        _ => Err(unsupported("-", &lhs, &rhs)),
    }
}

/// Unwrap a dispatch result that must be Gaussian.
fn gaussian<T: FloatLinalg>(op: &'static str, result: Operand<T>, rhs: OperandKind) -> Result<Mvar<T>, MvarError> {
    match result {
        Operand::Gaussian(value) => Ok(value),
        other => Err(MvarError::UnsupportedOperand {
            op,
            lhs: other.kind(),
            rhs,
        }),
    }
}

// ============================================================================
// Gaussian arithmetic
// ============================================================================

impl<T: FloatLinalg> Mvar<T> {
    fn combine(&self, other: &Mvar<T>, sign: T) -> Result<Mvar<T>, MvarError> {
        Validator::validate_ndim(self.ndim(), other.ndim())?;
        let mean = &self.mean + &other.mean * sign;
        let cov = self.cov() + other.cov() * sign;
        Ok(Mvar::from_parts(mean, decompose(cov, &self.tolerance), self.tolerance))
    }

    /// Sum of independent Gaussians: means and covariances add.
    pub fn checked_add(&self, other: &Mvar<T>) -> Result<Mvar<T>, MvarError> {
        self.combine(other, T::one())
    }

    /// Difference: means and covariances subtract.
    ///
    /// Undoes `checked_add` up to tolerance.
    pub fn checked_sub(&self, other: &Mvar<T>) -> Result<Mvar<T>, MvarError> {
        self.combine(other, -T::one())
    }

    /// Multiply by a scalar: mean and covariance both scale by `k`.
    pub fn scaled(&self, k: T) -> Mvar<T> {
        let mean = &self.mean * k;
        let cov = self.cov() * k;
        Mvar::from_parts(mean, decompose(cov, &self.tolerance), self.tolerance)
    }

    /// Push the value through a linear map, `A · M`.
    ///
    /// `M` must have `ndim` rows; the result lives in `M.ncols()` dimensions.
    pub fn transform(&self, matrix: &DMatrix<T>) -> Result<Mvar<T>, MvarError> {
        Validator::validate_ndim(self.ndim(), matrix.nrows())?;
        let mean: RowDVector<T> = &self.mean * matrix;
        let cov = matrix.transpose() * self.cov() * matrix;
        Ok(Mvar::from_parts(
            mean,
            decompose(cov, &self.tolerance),
            self.tolerance,
        ))
    }

    /// Matrix on the left, `M · A == M · sqrt_cov(A)`.
    ///
    /// The result is a plain matrix, not a Gaussian.
    pub fn left_multiply(&self, matrix: &DMatrix<T>) -> Result<DMatrix<T>, MvarError> {
        Validator::validate_ndim(self.ndim(), matrix.ncols())?;
        Ok(matrix * self.sqrt_cov())
    }

    /// Raise to a real power.
    ///
    /// Scales become `scale^p` with the rotation unchanged. The mean becomes
    /// `mean · (rotationᵀ · diag(scale^(p-1)) · rotation + I − rotationᵀ · rotation)`:
    /// it is stretched along the retained axes and passes through unchanged
    /// along dropped ones. `p == 1` is the identity, `p == -1` the
    /// information form, and `p == 0` a unit-scale value on the retained
    /// subspace. Axis signs are kept as they are.
    pub fn pow(&self, power: T) -> Mvar<T> {
        let rotation = &self.parts.rotation;
        let complement = DMatrix::identity(self.ndim(), self.ndim()) - rotation.transpose() * rotation;
        let stretch = self.parts.spectral(|s| s.powf(power - T::one())) + complement;
        let mean = &self.mean * stretch;
        let scale = self.parts.scale.map(|s| s.powf(power));
        let parts = compress(scale, rotation.clone(), &self.tolerance);
        Mvar::from_parts(mean, parts, self.tolerance)
    }

    /// `self ** -1`.
    pub fn inverse(&self) -> Mvar<T> {
        self.pow(-T::one())
    }

    /// Multiply by any operand on the right.
    ///
    /// Fails with `UnsupportedOperand` for combinations that do not produce
    /// a Gaussian.
    pub fn checked_mul(&self, rhs: impl Into<Operand<T>>) -> Result<Mvar<T>, MvarError> {
        let rhs = rhs.into();
        let kind = rhs.kind();
        let result = multiply(Operand::Gaussian(self.clone()), rhs)?;
        gaussian("*", result, kind)
    }

    /// Divide by any operand on the right.
    pub fn checked_div(&self, rhs: impl Into<Operand<T>>) -> Result<Mvar<T>, MvarError> {
        let rhs = rhs.into();
        let kind = rhs.kind();
        let result = divide(Operand::Gaussian(self.clone()), rhs)?;
        gaussian("/", result, kind)
    }

    // ========================================================================
    // Fusion
    // ========================================================================

    /// Fuse independent estimates of the same quantity: `(Σ Aᵢ⁻¹)⁻¹`.
    ///
    /// A flat (rank-reduced) estimate has zero variance along its dropped
    /// axes, an exact constraint that has no information form. When any
    /// operand is flat the estimates are folded through the gain-form
    /// update instead, which keeps those directions pinned. Contradictory
    /// constraints (flat along a shared direction) are `SingularMatrix`.
    pub fn blend(values: &[&Mvar<T>]) -> Result<Mvar<T>, MvarError> {
        let (first, rest) = values.split_first().ok_or(MvarError::EmptyInput)?;
        log::debug!("blending {} estimates in {} dimensions", values.len(), first.ndim());

        if rest.is_empty() {
            return Ok((*first).clone());
        }
        for value in rest {
            Validator::validate_ndim(first.ndim(), value.ndim())?;
        }

        if values.iter().all(|v| v.is_full_rank()) {
            let mut information = first.inverse();
            for value in rest {
                information = information.checked_add(&value.inverse())?;
            }
            return Ok(information.inverse());
        }

        let mut fused = (*first).clone();
        for value in rest {
            fused = Mvar::kalman_update(&fused, value)?;
        }
        Ok(fused)
    }

    /// Blend with one other estimate, `self & other`.
    pub fn checked_blend(&self, other: &Mvar<T>) -> Result<Mvar<T>, MvarError> {
        Mvar::blend(&[self, other])
    }

    /// Gain-form measurement update of `prior` by `measurement`.
    ///
    /// Agrees with `blend`. Flat directions of either input stay exact.
    pub fn kalman_update(prior: &Mvar<T>, measurement: &Mvar<T>) -> Result<Mvar<T>, MvarError> {
        let (mean, cov) = gain_update(
            &prior.mean,
            &prior.cov(),
            &measurement.mean,
            &measurement.cov(),
        )?;
        Ok(Mvar::from_parts(
            mean,
            decompose(cov, &prior.tolerance),
            prior.tolerance,
        ))
    }
}
