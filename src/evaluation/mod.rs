//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! Read-only evaluation of a factorized Gaussian against data points:
//! densities, log-densities, and Mahalanobis distances.
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Density and distance evaluation.
pub mod density;
