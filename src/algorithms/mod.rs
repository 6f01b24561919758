//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! Core numerical procedures behind the Gaussian algebra, expressed on raw
//! matrices so they can be tested without constructing values:
//! - Canonicalization (square + compress)
//! - Sample moments of observation rows
//! - The gain-form Kalman update used to cross-check blending
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Canonical scale/rotation factorization.
pub mod canonical;

/// Gain-form Kalman measurement update.
pub mod kalman;

/// Sample mean and covariance.
pub mod moments;
