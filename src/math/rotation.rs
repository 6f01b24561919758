//! Rotation-matrix builders.
//!
//! Rotations here follow the row-axis convention used throughout the crate:
//! each row of a rotation matrix is one unit-length principal axis, and a row
//! vector is rotated by right-multiplication (`v * R`).

use nalgebra::DMatrix;

use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::MvarError;

/// Either an explicit rotation matrix or, in two dimensions, an angle.
#[derive(Debug, Clone, PartialEq)]
pub enum RotationSpec<T> {
    /// Explicit matrix whose rows are the axes.
    Matrix(DMatrix<T>),

    /// Rotation angle in radians (2-D only).
    Angle(T),
}

impl<T> From<DMatrix<T>> for RotationSpec<T> {
    fn from(matrix: DMatrix<T>) -> Self {
        RotationSpec::Matrix(matrix)
    }
}

macro_rules! angle_spec {
    ($($t:ty),*) => {$(
        impl From<$t> for RotationSpec<$t> {
            fn from(angle: $t) -> Self {
                RotationSpec::Angle(angle)
            }
        }
    )*};
}

angle_spec!(f32, f64);

impl<T: FloatLinalg> RotationSpec<T> {
    /// Resolve to a matrix with `ndim` columns.
    ///
    /// An angle is only meaningful for `ndim == 2`.
    pub fn resolve(self, ndim: usize) -> Result<DMatrix<T>, MvarError> {
        match self {
            RotationSpec::Matrix(m) if m.ncols() == ndim => Ok(m),
            RotationSpec::Matrix(m) => Err(MvarError::DimensionMismatch {
                expected: ndim,
                got: m.ncols(),
            }),
            RotationSpec::Angle(angle) if ndim == 2 => Ok(rotation_2d(angle)),
            RotationSpec::Angle(_) => Err(MvarError::NotTwoDimensional(ndim)),
        }
    }
}

/// 2x2 rotation by `angle` radians.
///
/// ```text
/// [  cos  sin ]
/// [ -sin  cos ]
/// ```
pub fn rotation_2d<T: FloatLinalg>(angle: T) -> DMatrix<T> {
    let (s, c) = angle.sin_cos();
    DMatrix::from_row_slice(2, 2, &[c, s, -s, c])
}

/// Plane (Givens) rotation by `angle` in the `(i, j)` coordinate plane of an
/// `ndim`-dimensional space.
pub fn givens<T: FloatLinalg>(
    ndim: usize,
    i: usize,
    j: usize,
    angle: T,
) -> Result<DMatrix<T>, MvarError> {
    let bad = i.max(j);
    if bad >= ndim {
        return Err(MvarError::DimensionMismatch {
            expected: ndim,
            got: bad + 1,
        });
    }
    if i == j {
        return Err(MvarError::DimensionMismatch {
            expected: 2,
            got: 1,
        });
    }

    let (s, c) = angle.sin_cos();
    let mut out = DMatrix::identity(ndim, ndim);
    out[(i, i)] = c;
    out[(j, j)] = c;
    out[(i, j)] = s;
    out[(j, i)] = -s;
    Ok(out)
}
