//! # Core Domain
//!
//! Pure math, no I/O. The two divide-and-conquer engines.
//!
//! This module contains the fundamental types and operations:
//! - `Point` - A position in the plane
//! - `closest_pair` - Divide-and-conquer nearest-pair solver
//! - `multiply` - Karatsuba and manual long multiplication
//!
//! ## Design Principles
//!
//! - All functions are pure (deterministic, no side effects beyond
//!   narration to an injected sink)
//! - No I/O operations
//! - Fully testable in isolation

mod point;
pub mod closest_pair;
pub mod multiply;

// Re-exports
pub use closest_pair::{
    brute_force, closest_pair, closest_pair_traced, ClosestPair, ClosestPairError,
    ClosestPairResult,
};
pub use multiply::{
    multiply, multiply_traced, MultMode, MultPhase, MultStep, Multiplication, MultiplyError,
    MultiplyResult,
};
pub use point::Point;
