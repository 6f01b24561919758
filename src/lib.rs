//! # Mvar — Multivariate Normal Distributions as Algebraic Values
//!
//! Gaussian random vectors packaged to behave like ordinary vectors: add
//! them, scale them, push them through matrices, raise them to powers, and
//! fuse independent estimates of the same quantity. Written with Kalman
//! filtering in mind, useful anywhere linked uncertainties across several
//! variables need to be tracked.
//!
//! ## How values are stored
//!
//! Every [`Mvar`](prelude::Mvar) keeps a mean row and a canonical
//! factorization of its covariance:
//!
//! ```text
//!   vectors = diag(scale) · rotation        (rank x ndim)
//!   cov     = vectorsᵀ · vectors            (ndim x ndim)
//!
//!   affine  = [ vectors  0 ]
//!             [ mean     1 ]
//! ```
//!
//! `rotation` rows are unit, mutually orthogonal principal axes; `scale`
//! holds their magnitudes, largest first. Subtraction and negative scalars
//! can leave axes with negative variance; those carry a sign and the
//! covariance is then `rotationᵀ · diag(±scale²) · rotation`. Axes whose scale is negligible
//! (`scale <= atol + rtol * max_scale`) are dropped, so a flat distribution
//! has `rank() < ndim()`.
//!
//! ## Quick Start
//!
//! ```rust
//! use mvar_rs::prelude::*;
//! use nalgebra::dmatrix;
//!
//! let a: Mvar<f64> = Mvar::from_cov(&[1.0, 2.0], &dmatrix![1.0, 2.0; 2.0, 1.0])?;
//! let b = Mvar::from_cov(&[3.0, 3.0], &dmatrix![2.0, 0.0; 0.0, 2.0])?;
//!
//! // Sum of independent variables: means and covariances add.
//! let c = &a + &b;
//! assert!((c.mean()[0] - 4.0).abs() < 1e-9);
//! assert!((c.cov()[(0, 1)] - 2.0).abs() < 1e-9);
//! # Result::<(), MvarError>::Ok(())
//! ```
//!
//! ## Operators
//!
//! | Expression | Meaning                                                   |
//! |------------|-----------------------------------------------------------|
//! | `A + B`    | sum of independent variables                              |
//! | `A - B`    | inverse of `+` (covariances subtract)                     |
//! | `A * k`    | mean and covariance times `k`                             |
//! | `A * M`    | linear map: mean `μ·M`, covariance `Mᵀ·Σ·M`               |
//! | `A * B`    | `A * B.sqrt_cov()`; the mean of `B` is ignored            |
//! | `M * A`    | `M * A.sqrt_cov()`, a plain matrix                        |
//! | `A.pow(p)` | scales to the power `p`, rotation unchanged               |
//! | `A / X`    | `A * X⁻¹`                                                 |
//! | `A & B`    | fusion of independent estimates, `(A⁻¹ + B⁻¹)⁻¹`          |
//!
//! Operators panic with the error message when operand shapes are
//! incompatible. The `checked_*` methods return the error instead:
//!
//! ```rust
//! use mvar_rs::prelude::*;
//! use nalgebra::dmatrix;
//!
//! let a = Mvar::from_cov(&[0.0, 0.0], &dmatrix![1.0, 0.0; 0.0, 1.0])?;
//! let b = Mvar::from_cov(&[0.0], &dmatrix![1.0])?;
//!
//! match a.checked_add(&b) {
//!     Err(MvarError::DimensionMismatch { expected, got }) => {
//!         assert_eq!((expected, got), (2, 1));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! # Result::<(), MvarError>::Ok(())
//! ```
//!
//! ## Fusing estimates
//!
//! Blending two measurements of the same quantity weights each by its
//! information (inverse covariance). It agrees with the Kalman
//! measurement update:
//!
//! ```rust
//! use mvar_rs::prelude::*;
//! use nalgebra::dmatrix;
//!
//! let prior: Mvar<f64> = Mvar::from_cov(&[0.0, 0.0], &dmatrix![4.0, 0.0; 0.0, 1.0])?;
//! let measured = Mvar::from_cov(&[2.0, 2.0], &dmatrix![4.0, 0.0; 0.0, 1.0])?;
//!
//! let fused = &prior & &measured;
//! let kalman = Mvar::kalman_update(&prior, &measured)?;
//! assert!(fused.approx_eq(&kalman));
//! assert!((fused.mean()[0] - 1.0).abs() < 1e-9);
//! assert!((fused.cov()[(0, 0)] - 2.0).abs() < 1e-9);
//! # Result::<(), MvarError>::Ok(())
//! ```
//!
//! ## Building values
//!
//! Factories cover the common descriptions (`from_cov`, `from_roto_scale`,
//! `from_data`, `from_weighted_data`, `from_affine`, `stack`). The fluent
//! builder accepts any one of them plus a tolerance pair:
//!
//! ```rust
//! use mvar_rs::prelude::*;
//!
//! let a: Mvar<f64> = Mvar::builder()
//!     .mean(&[1.0, -1.0])
//!     .scale(&[3.0, 1.0])
//!     .angle(core::f64::consts::FRAC_PI_6)
//!     .rtol(1e-6)
//!     .build()?;
//!
//! assert_eq!(a.rank(), 2);
//! assert!((a.scale_values()[0] - 3.0).abs() < 1e-9);
//! # Result::<(), MvarError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std + alloc`. Disable default features:
//!
//! ```toml
//! [dependencies]
//! mvar-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Operators and factories are unchanged; `f32` halves the memory footprint
//! and carries looser default tolerances (`1e-4`/`1e-6`).
//!
//! ## Logging
//!
//! Rank reduction and blending emit `log` records at `debug` level, sample
//! moments and sampling at `trace`. No logger is installed by the library.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and tolerance pair.
mod primitives;

// Layer 2: Math - pure matrix helpers.
//
// Contains the nalgebra precision bridge, block-matrix assembly and rotation
// builders.
mod math;

// Layer 3: Algorithms - numerical procedures on raw matrices.
//
// Contains canonicalization (square + compress), sample moments and the
// gain-form Kalman update.
mod algorithms;

// Layer 4: Evaluation - densities and distances.
mod evaluation;

// Layer 5: Engine - the `Mvar` value type.
//
// Contains validation, factories, the operator algebra and its dispatch
// table, `core::ops` overloads, and sampling.
mod engine;

// Layer 6: Adapters - conversions for external consumers (plotting).
mod adapters;

// High-level fluent API.
//
// Provides the `MvarBuilder` and the public re-exports.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use mvar_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        autostack, diagstack, givens, rotation_2d, Block, Ellipse, Mvar, MvarBuilder, MvarError,
        Operand, OperandKind, RotationSpec, Tolerance, DEFAULT_NSTD,
    };
}

pub use crate::api::*;

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal Gaussian engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
