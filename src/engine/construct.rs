//! Factories that produce canonical Gaussian values.
//!
//! ## Purpose
//!
//! Every way of describing a Gaussian (mean and covariance, mean and raw
//! axes, rotation and scale, observations, an affine block, independent
//! parts) funnels through here and comes out canonicalized.
//!
//! ## Design notes
//!
//! * **Validate, then factor**: shapes and finiteness are checked up front via
//!   `Validator`; the factorization itself cannot fail.
//! * **Default tolerance**: factories use the precision's default tolerance.
//!   Call `with_tolerance` afterwards to pick a different pair.
//!
//! ## Invariants
//!
//! * Every returned value satisfies the canonical-form invariants.
//! * The ambient dimension is fixed by the inputs, never by the rank.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use nalgebra::{DMatrix, DVector, RowDVector};

use crate::algorithms::canonical::{compress, decompose, square, Decomposition};
use crate::algorithms::moments::sample_moments;
use crate::engine::mvar::Mvar;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::math::rotation::RotationSpec;
use crate::math::stacking::{diagstack, hstack};
use crate::primitives::errors::MvarError;
use crate::primitives::tolerance::Tolerance;

impl<T: FloatLinalg> Mvar<T> {
    // ========================================================================
    // Moment-based factories
    // ========================================================================

    /// Build from a mean and a covariance.
    ///
    /// The covariance need not be exactly symmetric or positive definite;
    /// it is symmetrized and small negative eigenvalues are absorbed.
    pub fn from_cov(mean: &[T], cov: &DMatrix<T>) -> Result<Self, MvarError> {
        Validator::validate_square(cov)?;
        Validator::validate_ndim(mean.len(), cov.nrows())?;
        Validator::validate_slice(mean, "mean")?;
        Validator::validate_finite(cov, "cov")?;

        let tolerance = Tolerance::default();
        let parts = decompose(cov.clone(), &tolerance);
        Ok(Self::from_parts(
            RowDVector::from_row_slice(mean),
            parts,
            tolerance,
        ))
    }

    /// Build from a mean and raw (possibly skewed or redundant) axis rows.
    pub fn from_mean_vectors(mean: &[T], vectors: &DMatrix<T>) -> Result<Self, MvarError> {
        Validator::validate_ndim(mean.len(), vectors.ncols())?;
        Validator::validate_slice(mean, "mean")?;
        Validator::validate_finite(vectors, "vectors")?;

        let tolerance = Tolerance::default();
        let parts = square(vectors, &tolerance);
        Ok(Self::from_parts(
            RowDVector::from_row_slice(mean),
            parts,
            tolerance,
        ))
    }

    /// Build from a rotation and per-axis scales.
    ///
    /// `rotation` may be a matrix whose rows are axes, or an angle in radians
    /// when the value is two-dimensional. The ambient dimension comes from
    /// `mean` when given, else from the rotation matrix, else from `scale`.
    /// A missing mean is the zero vector.
    pub fn from_roto_scale(
        mean: Option<&[T]>,
        rotation: impl Into<RotationSpec<T>>,
        scale: &[T],
    ) -> Result<Self, MvarError> {
        let rotation = rotation.into();
        let ndim = match (mean, &rotation) {
            (Some(m), _) => m.len(),
            (None, RotationSpec::Matrix(r)) => r.ncols(),
            (None, RotationSpec::Angle(_)) => scale.len(),
        };
        let rotation = rotation.resolve(ndim)?;
        Validator::validate_ndim(rotation.nrows(), scale.len())?;
        Validator::validate_slice(scale, "scale")?;
        Validator::validate_finite(&rotation, "rotation")?;

        let mean = match mean {
            Some(m) => {
                Validator::validate_slice(m, "mean")?;
                RowDVector::from_row_slice(m)
            }
            None => RowDVector::zeros(ndim),
        };

        let tolerance = Tolerance::default();
        let vectors = DMatrix::from_diagonal(&DVector::from_row_slice(scale)) * rotation;
        Ok(Self::from_parts(mean, square(&vectors, &tolerance), tolerance))
    }

    // ========================================================================
    // Data-based factories
    // ========================================================================

    /// Estimate from observations, one per row.
    ///
    /// With `bias == false` the covariance divides by `n - 1`, otherwise by `n`.
    pub fn from_data(data: &DMatrix<T>, bias: bool) -> Result<Self, MvarError> {
        Validator::validate_finite(data, "data")?;
        let (mean, cov) = sample_moments(data, None, bias)?;
        let tolerance = Tolerance::default();
        Ok(Self::from_parts(mean, decompose(cov, &tolerance), tolerance))
    }

    /// Estimate from weighted observations, one weight per row.
    ///
    /// Weights are reliability weights: the biased divisor is `Σw`, the
    /// unbiased one `Σw − Σw²/Σw`.
    pub fn from_weighted_data(
        data: &DMatrix<T>,
        weights: &[T],
        bias: bool,
    ) -> Result<Self, MvarError> {
        Validator::validate_finite(data, "data")?;
        let (mean, cov) = sample_moments(data, Some(weights), bias)?;
        let tolerance = Tolerance::default();
        Ok(Self::from_parts(mean, decompose(cov, &tolerance), tolerance))
    }

    // ========================================================================
    // Structural factories
    // ========================================================================

    /// Unpack an affine block `[[vectors, 0], [mean, 1]]`.
    ///
    /// The last column is ignored. When the vector rows are already mutually
    /// orthogonal the row norms are taken as scales directly and each row's
    /// pivot sign is kept as its signature, so `from_affine(&a.affine())`
    /// reproduces `a` even when some axis carries negative variance.
    /// Skewed rows are squared into canonical form, which is semidefinite.
    pub fn from_affine(affine: &DMatrix<T>) -> Result<Self, MvarError> {
        let (rows, cols) = affine.shape();
        if rows == 0 || cols == 0 {
            return Err(MvarError::EmptyInput);
        }
        Validator::validate_finite(affine, "affine")?;

        let (rank, ndim) = (rows - 1, cols - 1);
        let mean: RowDVector<T> = affine.row(rank).columns(0, ndim).into_owned();
        let vectors: DMatrix<T> = affine.view((0, 0), (rank, ndim)).into_owned();

        let tolerance = Tolerance::default();
        let parts = Self::orthogonal_parts(&vectors, &tolerance)
            .unwrap_or_else(|| square(&vectors, &tolerance));
        Ok(Self::from_parts(mean, parts, tolerance))
    }

    /// Row norms and unit rows, signs untouched, if the rows are already orthogonal.
    fn orthogonal_parts(vectors: &DMatrix<T>, tolerance: &Tolerance<T>) -> Option<Decomposition<T>> {
        let norms = DVector::from_iterator(vectors.nrows(), vectors.row_iter().map(|r| r.norm()));
        let mut rotation = vectors.clone();
        for (i, norm) in norms.iter().enumerate() {
            if *norm > T::zero() {
                let axis: RowDVector<T> = rotation.row(i) / *norm;
                rotation.set_row(i, &axis);
            }
        }

        let parts = compress(norms, rotation, tolerance);
        tolerance.is_orthonormal(&parts.rotation).then_some(parts)
    }

    /// Join independent values into one value over the concatenated dimensions.
    ///
    /// The result's tolerance is taken from the first part.
    pub fn stack(parts: &[&Mvar<T>]) -> Result<Self, MvarError> {
        let first = parts.first().ok_or(MvarError::EmptyInput)?;

        let means: Vec<DMatrix<T>> = parts
            .iter()
            .map(|p| DMatrix::from_row_slice(1, p.ndim(), p.mean.as_slice()))
            .collect();
        let joined = hstack(&means.iter().collect::<Vec<_>>())?;
        let mean = RowDVector::from_row_slice(joined.as_slice());

        let rotations: Vec<&DMatrix<T>> = parts.iter().map(|p| &p.parts.rotation).collect();
        let rotation = diagstack(&rotations);
        let scale = DVector::from_iterator(
            rotation.nrows(),
            parts.iter().flat_map(|p| p.parts.scale.iter().copied()),
        );

        let tolerance = first.tolerance;
        Ok(Self::from_parts(
            mean,
            compress(scale, rotation, &tolerance),
            tolerance,
        ))
    }

    // ========================================================================
    // Re-canonicalization
    // ========================================================================

    /// Recompute the canonical form from the current covariance.
    ///
    /// A value already in canonical form comes back unchanged up to
    /// tolerance.
    pub fn canonicalize(&self) -> Self {
        let parts = decompose(self.cov(), &self.tolerance);
        Self::from_parts(self.mean.clone(), parts, self.tolerance)
    }

    /// Replace the tolerance pair and re-apply rank reduction under it.
    pub fn with_tolerance(self, tolerance: Tolerance<T>) -> Result<Self, MvarError> {
        Validator::validate_tolerance(&tolerance)?;
        let parts = compress(self.parts.scale, self.parts.rotation, &tolerance);
        Ok(Self::from_parts(self.mean, parts, tolerance))
    }

    /// Marginal distribution over the given coordinates, in the order given.
    pub fn marginal(&self, indices: &[usize]) -> Result<Self, MvarError> {
        if indices.is_empty() {
            return Err(MvarError::EmptyInput);
        }
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.ndim()) {
            return Err(MvarError::DimensionMismatch {
                expected: self.ndim(),
                got: bad + 1,
            });
        }

        let mean = self.mean.select_columns(indices.iter());
        let cov = self
            .cov()
            .select_rows(indices.iter())
            .select_columns(indices.iter());
        let parts = decompose(cov, &self.tolerance);
        Ok(Self::from_parts(mean, parts, self.tolerance))
    }
}
