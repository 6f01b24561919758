//! Layer 5: Engine
//!
//! # Purpose
//!
//! The `Mvar` value type and everything that produces or combines values:
//! - Input validation
//! - Factories (covariance, roto-scale, data, affine, stacking)
//! - Operator semantics and the mixed-operand dispatch table
//! - `core::ops` overloads
//! - Random sampling
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Operator semantics and dispatch.
pub mod algebra;

/// Factories.
pub mod construct;

/// The Gaussian value type.
pub mod mvar;

/// Operator overloads.
pub mod ops;

/// Random draws.
pub mod sample;

/// Input validation.
pub mod validator;
