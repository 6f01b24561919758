//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure matrix helpers used throughout the crate:
//! - The precision bridge to the nalgebra backend
//! - Block-matrix assembly with auto-sized padding blocks
//! - Rotation-matrix builders
//!
//! These are reusable building blocks with no Gaussian semantics.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Precision bridge to nalgebra.
pub mod linalg;

/// Rotation-matrix builders.
pub mod rotation;

/// Block-matrix assembly.
pub mod stacking;
