//! # Console Adapter
//!
//! Rendering of solver results and live narration to the terminal.
//!
//! The core hands over a result plus a trace; everything about how that
//! looks on screen lives here.

use std::time::Duration;

use num_bigint::BigInt;
use serde::Serialize;

use crate::core::{ClosestPair, MultPhase, Multiplication, Point};
use crate::ports::TraceSink;

/// Sink that prints narration lines as they are emitted
///
/// Each line is indented two spaces per recursion depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleTrace;

impl TraceSink for ConsoleTrace {
    fn record(&mut self, depth: usize, line: &str) {
        println!("{:indent$}{}", "", line, indent = depth * 2);
    }
}

/// Human-readable closest-pair result block
pub fn render_closest_pair(result: &ClosestPair, n_points: usize, elapsed: Duration) -> String {
    let (p1, p2) = result.pair;
    format!(
        "Points: {}\nClosest pair: {} , {}\nDistance: {:.6}\nTime: {:.6}s",
        n_points,
        p1,
        p2,
        result.distance,
        elapsed.as_secs_f64()
    )
}

/// Human-readable step-by-step multiplication block
///
/// Mirrors the walkthrough layout: header, final product, then the
/// numbered decomposition steps.
pub fn render_multiplication(a: &BigInt, b: &BigInt, result: &Multiplication) -> String {
    let mut lines = vec![
        format!("Multiplying {} × {}:", a, b),
        format!("Final Product: {}", result.product),
        String::new(),
        "Steps:".to_string(),
        "-".repeat(50),
    ];

    for (i, step) in result.steps.iter().enumerate() {
        match &step.phase {
            MultPhase::BaseCase => {
                lines.push(format!(
                    "Step {}: {} × {} = {} (Base Case)",
                    i + 1,
                    step.lhs,
                    step.rhs,
                    step.product
                ));
            }
            MultPhase::Combine { split } => {
                lines.push(format!(
                    "Step {}: {} × {} = {}",
                    i + 1,
                    step.lhs,
                    step.rhs,
                    step.product
                ));
                lines.push(format!(
                    "       Combine: z2*10^{} + (z1-z2-z0)*10^{} + z0",
                    2 * split,
                    split
                ));
            }
            MultPhase::Partial { digit, shift } => {
                lines.push(format!(
                    "Step {}: {} × {} × 10^{} = {}",
                    i + 1,
                    step.lhs,
                    digit,
                    shift,
                    step.product
                ));
            }
        }
    }

    lines.push("-".repeat(50));
    lines.join("\n")
}

/// JSON report for one closest-pair run
#[derive(Debug, Serialize)]
pub struct ClosestPairReport {
    /// Number of input points
    pub points: usize,
    /// Minimum distance found
    pub distance: f64,
    /// The two closest points
    pub pair: (Point, Point),
    /// Wall-clock solve time in seconds
    pub elapsed_secs: f64,
}

/// JSON report for one multiplication
#[derive(Debug, Serialize)]
pub struct MultiplicationReport {
    /// Left operand (decimal string)
    pub a: String,
    /// Right operand (decimal string)
    pub b: String,
    /// The product (decimal string)
    pub product: String,
    /// Number of decomposition steps
    pub steps: usize,
}

impl MultiplicationReport {
    /// Build a report from one multiplication outcome
    pub fn new(a: &BigInt, b: &BigInt, result: &Multiplication) -> Self {
        Self {
            a: a.to_string(),
            b: b.to_string(),
            product: result.product.to_string(),
            steps: result.steps.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{closest_pair, multiply_traced, MultMode};
    use crate::ports::NoopSink;

    #[test]
    fn test_render_closest_pair() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(1.0, 1.0),
        ];
        let best = closest_pair(&pts).unwrap();
        let block = render_closest_pair(&best, pts.len(), Duration::from_millis(1));

        assert!(block.contains("Points: 3"));
        assert!(block.contains("Distance: 1.414214"));
    }

    #[test]
    fn test_render_multiplication_karatsuba() {
        let a = BigInt::from(1234);
        let b = BigInt::from(5678);
        let mut sink = NoopSink;
        let result = multiply_traced(&a, &b, MultMode::Karatsuba, &mut sink).unwrap();

        let block = render_multiplication(&a, &b, &result);
        assert!(block.contains("Final Product: 7006652"));
        assert!(block.contains("(Base Case)"));
        assert!(block.contains("Combine: z2*10^"));
        assert!(block.starts_with("Multiplying 1234 × 5678:"));
    }

    #[test]
    fn test_render_multiplication_manual() {
        let a = BigInt::from(12);
        let b = BigInt::from(34);
        let mut sink = NoopSink;
        let result = multiply_traced(&a, &b, MultMode::Manual, &mut sink).unwrap();

        let block = render_multiplication(&a, &b, &result);
        assert!(block.contains("Step 1: 12 × 4 × 10^0 = 48"));
        assert!(block.contains("Step 2: 12 × 3 × 10^1 = 360"));
    }

    #[test]
    fn test_multiplication_report() {
        let a = BigInt::from(9);
        let b = BigInt::from(9);
        let mut sink = NoopSink;
        let result = multiply_traced(&a, &b, MultMode::Karatsuba, &mut sink).unwrap();

        let report = MultiplicationReport::new(&a, &b, &result);
        assert_eq!(report.product, "81");
        assert_eq!(report.steps, 1);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"product\":\"81\""));
    }
}
