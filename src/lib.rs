//! # Divide & Conquer
//!
//! Two classic divide-and-conquer algorithms, instrumented for
//! step-by-step walkthroughs.
//!
//! ## Overview
//!
//! - **Closest pair of points**: expected O(n log n) geometric
//!   nearest-pair search over a finite point set in the plane.
//! - **Integer multiplication**: Karatsuba's three-way recursion over
//!   decimal halves, plus schoolbook long multiplication as the
//!   pedagogical contrast. Arbitrary precision, exact products.
//!
//! Both engines are pure: one batch of input in, one result out. They
//! can narrate every divide, recursion and combine through an injected
//! [`ports::TraceSink`], and the narration never changes the numbers.
//!
//! ## Usage
//!
//! ```rust
//! use divide_conquer::core::{closest_pair, multiply, MultMode, Point};
//! use num_bigint::BigInt;
//!
//! let pts = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(1.0, 1.0)];
//! let best = closest_pair(&pts).unwrap();
//! assert!((best.distance - 2f64.sqrt()).abs() < 1e-9);
//!
//! let p = multiply(&BigInt::from(1234), &BigInt::from(5678), MultMode::Karatsuba).unwrap();
//! assert_eq!(p, BigInt::from(7006652));
//! ```
//!
//! ## Tracing
//!
//! ```rust
//! use divide_conquer::core::{closest_pair_traced, Point};
//! use divide_conquer::ports::StepLog;
//!
//! let pts: Vec<Point> = (0..16).map(|i| Point::new(i as f64, (i * i) as f64)).collect();
//! let mut log = StepLog::new();
//! let best = closest_pair_traced(&pts, &mut log).unwrap();
//! assert!(best.distance > 0.0);
//! assert!(!log.is_empty()); // divide / conquer / combine, depth-tagged
//! ```

pub mod core;
pub mod ports;
pub mod adapters;

// Re-exports for convenience
pub use crate::core::{
    closest_pair, closest_pair_traced, multiply, multiply_traced, ClosestPair, ClosestPairError,
    MultMode, Multiplication, MultiplyError, Point,
};
pub use crate::ports::{NoopSink, StepLog, TraceSink};
