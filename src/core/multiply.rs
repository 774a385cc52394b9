//! # Integer Multiplication
//!
//! Two decompositions of arbitrary-precision multiplication:
//!
//! - **Karatsuba**: divide-and-conquer on decimal halves. Three
//!   recursive sub-products instead of four, combined as
//!   `z2·10^(2m) + (z1−z2−z0)·10^m + z0`.
//! - **Manual**: schoolbook long multiplication. One partial product
//!   per decimal digit of the second operand, shifted into position.
//!
//! Both produce the exact mathematical product for the same inputs;
//! manual mode exists as the pedagogical contrast, not a fast path.
//!
//! Operands are non-negative. The intermediate `z1 − z2 − z0` is
//! computed over signed [`BigInt`] because it may dip negative before
//! the final combination lands non-negative.

use num_bigint::{BigInt, Sign};
use num_traits::{Pow, Zero};
use serde::Serialize;

use crate::ports::{NoopSink, TraceSink};

/// Result type for multiplication operations
pub type MultiplyResult<T> = Result<T, MultiplyError>;

/// Which decomposition to use
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultMode {
    /// Divide-and-conquer on decimal halves, three recursive sub-products
    Karatsuba,
    /// Schoolbook long multiplication, one partial per digit
    Manual,
}

/// Which phase of the algorithm produced a trace step
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MultPhase {
    /// Direct product of small operands
    BaseCase,
    /// Recombination of the three sub-products at split width `split`
    Combine {
        /// The split width m: operands were cut at 10^m
        split: usize,
    },
    /// One digit-by-digit partial product (manual mode only)
    Partial {
        /// The decimal digit of the second operand
        digit: u8,
        /// Positional shift: the partial is multiplied by 10^shift
        shift: usize,
    },
}

/// One node of the recursive decomposition
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MultStep {
    /// Left operand at this node
    pub lhs: BigInt,
    /// Right operand at this node
    pub rhs: BigInt,
    /// Product computed at this node
    pub product: BigInt,
    /// Which phase produced this step
    pub phase: MultPhase,
    /// Recursion depth (0 at the root; always 0 in manual mode)
    pub depth: usize,
}

/// Product plus the full decomposition trace
///
/// Steps appear in execution order: for Karatsuba, each node's three
/// subtrees (z0, z1, z2) precede the node's own combine step, so the
/// last step is always the root combine and its product equals
/// [`Multiplication::product`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Multiplication {
    /// The final product
    pub product: BigInt,
    /// The decomposition, in execution order
    pub steps: Vec<MultStep>,
}

/// Errors that can occur when multiplying
#[derive(Debug, Clone, PartialEq)]
pub enum MultiplyError {
    /// A negative operand was supplied; the decompositions are defined
    /// over non-negative integers only
    UnsupportedOperand {
        /// The offending operand
        operand: BigInt,
    },
}

impl std::fmt::Display for MultiplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultiplyError::UnsupportedOperand { operand } => {
                write!(f, "Negative operand not supported: {}", operand)
            }
        }
    }
}

impl std::error::Error for MultiplyError {}

/// Multiply two non-negative integers
///
/// # Example
/// ```
/// use divide_conquer::core::{multiply, MultMode};
/// use num_bigint::BigInt;
///
/// let product = multiply(&BigInt::from(1234), &BigInt::from(5678), MultMode::Karatsuba).unwrap();
/// assert_eq!(product, BigInt::from(7006652));
/// ```
pub fn multiply(a: &BigInt, b: &BigInt, mode: MultMode) -> MultiplyResult<BigInt> {
    check_operands(a, b)?;
    let mut rec = Discard;
    let mut sink = NoopSink;
    Ok(run(a, b, mode, &mut rec, &mut sink))
}

/// Multiply two non-negative integers, recording the decomposition
///
/// Returns the product together with the structured step trace, and
/// narrates each step to `sink` as it happens. Returns exactly the
/// product [`multiply`] returns for the same input.
pub fn multiply_traced(
    a: &BigInt,
    b: &BigInt,
    mode: MultMode,
    sink: &mut dyn TraceSink,
) -> MultiplyResult<Multiplication> {
    check_operands(a, b)?;
    let mut steps = Vec::new();
    let product = {
        let mut rec = Collect { steps: &mut steps };
        run(a, b, mode, &mut rec, sink)
    };
    Ok(Multiplication { product, steps })
}

fn check_operands(a: &BigInt, b: &BigInt) -> MultiplyResult<()> {
    for operand in [a, b] {
        if operand.sign() == Sign::Minus {
            return Err(MultiplyError::UnsupportedOperand {
                operand: operand.clone(),
            });
        }
    }
    Ok(())
}

fn run(
    a: &BigInt,
    b: &BigInt,
    mode: MultMode,
    rec: &mut dyn Recorder,
    sink: &mut dyn TraceSink,
) -> BigInt {
    match mode {
        MultMode::Karatsuba => karatsuba(a, b, 0, rec, sink),
        MultMode::Manual => long_multiply(a, b, rec, sink),
    }
}

/// Observer for decomposition steps
///
/// The untraced path uses [`Discard`], which records nothing and
/// allocates nothing.
trait Recorder {
    fn base_case(&mut self, x: &BigInt, y: &BigInt, product: &BigInt, depth: usize);
    fn combine(&mut self, x: &BigInt, y: &BigInt, product: &BigInt, split: usize, depth: usize);
    fn partial(&mut self, a: &BigInt, digit: u8, shift: usize, product: &BigInt, depth: usize);
}

struct Discard;

impl Recorder for Discard {
    fn base_case(&mut self, _: &BigInt, _: &BigInt, _: &BigInt, _: usize) {}
    fn combine(&mut self, _: &BigInt, _: &BigInt, _: &BigInt, _: usize, _: usize) {}
    fn partial(&mut self, _: &BigInt, _: u8, _: usize, _: &BigInt, _: usize) {}
}

struct Collect<'a> {
    steps: &'a mut Vec<MultStep>,
}

impl Recorder for Collect<'_> {
    fn base_case(&mut self, x: &BigInt, y: &BigInt, product: &BigInt, depth: usize) {
        self.steps.push(MultStep {
            lhs: x.clone(),
            rhs: y.clone(),
            product: product.clone(),
            phase: MultPhase::BaseCase,
            depth,
        });
    }

    fn combine(&mut self, x: &BigInt, y: &BigInt, product: &BigInt, split: usize, depth: usize) {
        self.steps.push(MultStep {
            lhs: x.clone(),
            rhs: y.clone(),
            product: product.clone(),
            phase: MultPhase::Combine { split },
            depth,
        });
    }

    fn partial(&mut self, a: &BigInt, digit: u8, shift: usize, product: &BigInt, depth: usize) {
        self.steps.push(MultStep {
            lhs: a.clone(),
            rhs: BigInt::from(digit),
            product: product.clone(),
            phase: MultPhase::Partial { digit, shift },
            depth,
        });
    }
}

/// Decimal digit count of a non-negative integer (1 for zero)
fn digit_count(x: &BigInt) -> usize {
    x.magnitude().to_radix_le(10).len()
}

fn karatsuba(
    x: &BigInt,
    y: &BigInt,
    depth: usize,
    rec: &mut dyn Recorder,
    sink: &mut dyn TraceSink,
) -> BigInt {
    let ten = BigInt::from(10);
    if x < &ten || y < &ten {
        let product = x * y;
        sink.record(depth, &format!("base case: {} × {} = {}", x, y, product));
        rec.base_case(x, y, &product, depth);
        return product;
    }

    let n = digit_count(x).max(digit_count(y));
    let m = n / 2;
    let pow_m = BigInt::from(10).pow(m as u32);

    // operand = high·10^m + low
    let (high1, low1) = (x / &pow_m, x % &pow_m);
    let (high2, low2) = (y / &pow_m, y % &pow_m);
    sink.record(
        depth,
        &format!("split at 10^{}: {} = ({}, {}), {} = ({}, {})", m, x, high1, low1, y, high2, low2),
    );

    let z0 = karatsuba(&low1, &low2, depth + 1, rec, sink);
    let z1 = karatsuba(&(&low1 + &high1), &(&low2 + &high2), depth + 1, rec, sink);
    let z2 = karatsuba(&high1, &high2, depth + 1, rec, sink);

    // z1 - z2 - z0 can be transiently negative; BigInt carries the sign
    let product = &z2 * BigInt::from(10).pow(2 * m as u32) + (&z1 - &z2 - &z0) * &pow_m + &z0;
    sink.record(
        depth,
        &format!(
            "combine: {} × {} = {} via z2*10^{} + (z1-z2-z0)*10^{} + z0",
            x,
            y,
            product,
            2 * m,
            m
        ),
    );
    rec.combine(x, y, &product, m, depth);
    product
}

fn long_multiply(
    a: &BigInt,
    b: &BigInt,
    rec: &mut dyn Recorder,
    sink: &mut dyn TraceSink,
) -> BigInt {
    let mut product = BigInt::zero();
    // Least-significant digit first, so shift == digit position
    for (shift, &digit) in b.magnitude().to_radix_le(10).iter().enumerate() {
        let partial = a * BigInt::from(digit) * BigInt::from(10).pow(shift as u32);
        sink.record(
            0,
            &format!("partial: {} × {} × 10^{} = {}", a, digit, shift, partial),
        );
        rec.partial(a, digit, shift, &partial, 0);
        product += partial;
    }
    product
}
