//! Layer 6: Adapters
//!
//! # Purpose
//!
//! Conversions from Gaussian values to the shapes external consumers
//! expect. Currently this is the 2-D ellipse used for plotting.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// 2-D ellipse parameters.
pub mod ellipse;
