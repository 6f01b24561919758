//! High-level API for building Gaussian values.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder that accepts any one of the supported descriptions of a
//! Gaussian, plus an optional tolerance pair, and validates the combination
//! once at `.build()`.
//!
//! ## Design notes
//!
//! * **Ergonomic**: every parameter is optional; missing pieces take the
//!   neutral default (zero mean, zero covariance, identity rotation, unit
//!   scale).
//! * **Validated**: shapes, finiteness, tolerances and parameter conflicts
//!   are all checked when `.build()` is called.
//! * **Type-Safe**: generic over `FloatLinalg` types for flexible precision.
//!
//! ## Key concepts
//!
//! A value can be described in exactly one *form*:
//!
//! * **Covariance**: `.cov()`
//! * **Vectors**: `.vectors()`, raw axis rows
//! * **Roto-scale**: `.rotation()` and/or `.scale()`
//!
//! `.mean()` combines with any form. Mixing two forms is
//! `ConflictingParameters`; setting a parameter twice is `DuplicateParameter`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MvarBuilder`] via `Mvar::builder()` or `MvarBuilder::new()`.
//! 2. Chain description and tolerance methods.
//! 3. Call `.build()` to get a canonical [`Mvar`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

use nalgebra::{DMatrix, DVector, RowDVector};

// Internal dependencies
use crate::algorithms::canonical::{decompose, square, Decomposition};
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::adapters::ellipse::{Ellipse, DEFAULT_NSTD};
pub use crate::engine::algebra::Operand;
pub use crate::engine::mvar::Mvar;
pub use crate::math::rotation::{givens, rotation_2d, RotationSpec};
pub use crate::math::stacking::{autostack, diagstack, Block};
pub use crate::primitives::errors::{MvarError, OperandKind};
pub use crate::primitives::tolerance::Tolerance;

/// Fluent builder for Gaussian values.
#[derive(Debug, Clone)]
pub struct MvarBuilder<T: FloatLinalg> {
    /// Mean row.
    pub mean: Option<RowDVector<T>>,

    /// Covariance (covariance form).
    pub cov: Option<DMatrix<T>>,

    /// Raw axis rows (vectors form).
    pub vectors: Option<DMatrix<T>>,

    /// Per-axis scales (roto-scale form).
    pub scale: Option<DVector<T>>,

    /// Rotation (roto-scale form).
    pub rotation: Option<RotationSpec<T>>,

    /// Relative tolerance.
    pub rtol: Option<T>,

    /// Absolute tolerance.
    pub atol: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for MvarBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> Mvar<T> {
    /// Start a fluent builder.
    pub fn builder() -> MvarBuilder<T> {
        MvarBuilder::new()
    }
}

impl<T: FloatLinalg> MvarBuilder<T> {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self {
            mean: None,
            cov: None,
            vectors: None,
            scale: None,
            rotation: None,
            rtol: None,
            atol: None,
            duplicate_param: None,
        }
    }

    /// Set the mean.
    pub fn mean(mut self, mean: &[T]) -> Self {
        if self.mean.is_some() {
            self.duplicate_param = Some("mean");
        }
        self.mean = Some(RowDVector::from_row_slice(mean));
        self
    }

    /// Set the covariance.
    pub fn cov(mut self, cov: DMatrix<T>) -> Self {
        if self.cov.is_some() {
            self.duplicate_param = Some("cov");
        }
        self.cov = Some(cov);
        self
    }

    /// Set raw axis rows; they need not be orthogonal.
    pub fn vectors(mut self, vectors: DMatrix<T>) -> Self {
        if self.vectors.is_some() {
            self.duplicate_param = Some("vectors");
        }
        self.vectors = Some(vectors);
        self
    }

    /// Set per-axis scales.
    pub fn scale(mut self, scale: &[T]) -> Self {
        if self.scale.is_some() {
            self.duplicate_param = Some("scale");
        }
        self.scale = Some(DVector::from_row_slice(scale));
        self
    }

    /// Set the rotation: a matrix of axis rows, or an angle for 2-D values.
    pub fn rotation(mut self, rotation: impl Into<RotationSpec<T>>) -> Self {
        if self.rotation.is_some() {
            self.duplicate_param = Some("rotation");
        }
        self.rotation = Some(rotation.into());
        self
    }

    /// Set the 2-D rotation angle in radians.
    pub fn angle(self, angle: T) -> Self {
        self.rotation(RotationSpec::Angle(angle))
    }

    /// Set the relative tolerance.
    pub fn rtol(mut self, rtol: T) -> Self {
        if self.rtol.is_some() {
            self.duplicate_param = Some("rtol");
        }
        self.rtol = Some(rtol);
        self
    }

    /// Set the absolute tolerance.
    pub fn atol(mut self, atol: T) -> Self {
        if self.atol.is_some() {
            self.duplicate_param = Some("atol");
        }
        self.atol = Some(atol);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate the configuration and produce a canonical value.
    pub fn build(self) -> Result<Mvar<T>, MvarError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tolerance = Tolerance::new(
            self.rtol.unwrap_or_else(T::default_rtol),
            self.atol.unwrap_or_else(T::default_atol),
        );
        Validator::validate_tolerance(&tolerance)?;

        let roto_scale = self.scale.is_some() || self.rotation.is_some();
        let forms = [
            ("cov", self.cov.is_some()),
            ("vectors", self.vectors.is_some()),
            ("rotation/scale", roto_scale),
        ];
        let mut chosen = forms.iter().filter(|(_, set)| *set).map(|(name, _)| *name);
        if let (Some(first), Some(second)) = (chosen.next(), chosen.next()) {
            return Err(MvarError::ConflictingParameters(format!(
                "`{}` and `{}` describe the same covariance",
                first, second
            )));
        }

        let ndim = self.infer_ndim()?;
        let mean = match self.mean {
            Some(mean) => {
                Validator::validate_finite(&mean, "mean")?;
                mean
            }
            None => RowDVector::zeros(ndim),
        };

        let parts = if let Some(cov) = self.cov {
            Validator::validate_square(&cov)?;
            Validator::validate_ndim(ndim, cov.nrows())?;
            Validator::validate_finite(&cov, "cov")?;
            decompose(cov, &tolerance)
        } else if let Some(vectors) = self.vectors {
            Validator::validate_ndim(ndim, vectors.ncols())?;
            Validator::validate_finite(&vectors, "vectors")?;
            square(&vectors, &tolerance)
        } else if roto_scale {
            let rotation = match self.rotation {
                Some(spec) => spec.resolve(ndim)?,
                None => DMatrix::identity(ndim, ndim),
            };
            let scale = self
                .scale
                .unwrap_or_else(|| DVector::from_element(rotation.nrows(), T::one()));
            Validator::validate_ndim(rotation.nrows(), scale.len())?;
            Validator::validate_finite(&scale, "scale")?;
            Validator::validate_finite(&rotation, "rotation")?;
            let vectors = DMatrix::from_diagonal(&scale) * rotation;
            square(&vectors, &tolerance)
        } else {
            Decomposition {
                scale: DVector::zeros(0),
                rotation: DMatrix::zeros(0, ndim),
            }
        };

        Ok(Mvar::from_parts(mean, parts, tolerance))
    }

    /// Ambient dimension from the first input that fixes it.
    fn infer_ndim(&self) -> Result<usize, MvarError> {
        if let Some(mean) = &self.mean {
            return Ok(mean.len());
        }
        if let Some(cov) = &self.cov {
            return Ok(cov.ncols());
        }
        if let Some(vectors) = &self.vectors {
            return Ok(vectors.ncols());
        }
        match (&self.rotation, &self.scale) {
            (Some(RotationSpec::Matrix(r)), _) => Ok(r.ncols()),
            (Some(RotationSpec::Angle(_)), _) => Ok(2),
            (None, Some(scale)) => Ok(scale.len()),
            (None, None) => Err(MvarError::SizeInference(
                "no mean, cov, vectors, rotation or scale supplied",
            )),
        }
    }
}
