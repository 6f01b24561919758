//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Foundational types shared by every other layer:
//! - The crate error enum and operand classification
//! - The rtol/atol tolerance pair used for approximate comparisons
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Tolerance pair and approximate comparisons.
pub mod tolerance;
