//! Ellipse parameters for plotting a 2-D Gaussian.
//!
//! ## Purpose
//!
//! This adapter converts a two-dimensional value into the centre, axis
//! lengths and orientation that an external ellipse-drawing routine needs.
//! No drawing happens here.
//!
//! ## Design notes
//!
//! * `width` and `height` are `nstd` times the first and second scale
//!   entries. A rank-1 value has zero height; a rank-0 value is a point.
//! * `angle` is the direction of the major axis, in degrees counter-clockwise
//!   from the first coordinate axis. It depends only on the axis, not on the
//!   sign of its variance.
//! * `nstd` multiplies the projected standard deviations. For a volumetric
//!   multiplier, scale it by `sqrt(ndim)` first.
//!
//! ## Non-goals
//!
//! * Higher-dimensional projections; marginalize to two coordinates first.

use nalgebra::{RealField, RowVector2};

use crate::algorithms::canonical::orient;
use crate::engine::mvar::Mvar;
use crate::math::linalg::{lit, FloatLinalg};
use crate::primitives::errors::MvarError;

/// Default number of standard deviations spanned by an ellipse.
pub const DEFAULT_NSTD: f64 = 3.0;

/// Centre, axis lengths and orientation of a 2-D Gaussian's contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse<T> {
    /// Centre (the mean).
    pub center: RowVector2<T>,

    /// Length along the major axis.
    pub width: T,

    /// Length along the minor axis.
    pub height: T,

    /// Major-axis direction in degrees.
    pub angle: T,
}

impl<T: FloatLinalg> Mvar<T> {
    /// Ellipse spanning the default number of standard deviations.
    pub fn ellipse(&self) -> Result<Ellipse<T>, MvarError> {
        self.ellipse_nstd(lit(DEFAULT_NSTD))
    }

    /// Ellipse spanning `nstd` standard deviations along each axis.
    pub fn ellipse_nstd(&self, nstd: T) -> Result<Ellipse<T>, MvarError> {
        if self.ndim() != 2 {
            return Err(MvarError::NotTwoDimensional(self.ndim()));
        }

        let scale = self.scale_values();
        let axis = |i: usize| scale.get(i).map_or(T::zero(), |&s| nstd * s);

        let angle = if self.rank() == 0 {
            T::zero()
        } else {
            // A negative-variance axis is stored negated; undo that first.
            let mut major = self.rotation().row(0).into_owned();
            orient(&mut major);
            major[1].atan2(major[0]) * lit::<T>(180.0) / T::pi()
        };

        Ok(Ellipse {
            center: RowVector2::new(self.mean()[0], self.mean()[1]),
            width: axis(0),
            height: axis(1),
            angle,
        })
    }
}

impl<T: RealField + Copy> Ellipse<T> {
    /// `true` when the ellipse has no extent in some direction.
    pub fn is_flat(&self) -> bool {
        self.width == T::zero() || self.height == T::zero()
    }
}
