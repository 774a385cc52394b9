//! # Closest Pair
//!
//! Divide-and-conquer closest-pair-of-points solver.
//!
//! Classic recursive scheme: sort once by x and once by y, halve the
//! x-sorted set, solve each half, then rescue cross-half pairs from the
//! vertical strip around the split line. The y-sorted order is threaded
//! through the recursion by partitioning, never re-sorted, which keeps
//! the whole thing at O(n log n).
//!
//! Every phase can narrate itself to a [`TraceSink`]; narration never
//! changes the numeric result.

use serde::Serialize;

use super::Point;
use crate::ports::{NoopSink, TraceSink};

/// Result type for closest-pair operations
pub type ClosestPairResult<T> = Result<T, ClosestPairError>;

/// The minimum pairwise distance and the pair achieving it
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClosestPair {
    /// Euclidean distance between the two points
    pub distance: f64,
    /// The two points, unordered
    pub pair: (Point, Point),
}

/// Errors that can occur when solving for the closest pair
#[derive(Debug, Clone, PartialEq)]
pub enum ClosestPairError {
    /// Fewer than 2 points were supplied; there is no pair to find
    InsufficientInput {
        /// How many points were actually supplied
        found: usize,
    },

    /// A point has a NaN or infinite coordinate
    InvalidCoordinate {
        /// Position of the offending point in the input sequence
        index: usize,
        /// The offending point
        point: Point,
    },
}

impl std::fmt::Display for ClosestPairError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClosestPairError::InsufficientInput { found } => {
                write!(f, "Need at least 2 points, got {}", found)
            }
            ClosestPairError::InvalidCoordinate { index, point } => {
                write!(f, "Non-finite coordinate at input index {}: {:?}", index, point)
            }
        }
    }
}

impl std::error::Error for ClosestPairError {}

/// Find the closest pair of points
///
/// Expected O(n log n). The input slice is never mutated; the solver
/// works on sorted copies.
///
/// # Example
/// ```
/// use divide_conquer::core::{closest_pair, Point};
///
/// let pts = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(1.0, 1.0)];
/// let best = closest_pair(&pts).unwrap();
/// assert!((best.distance - 2f64.sqrt()).abs() < 1e-9);
/// ```
pub fn closest_pair(points: &[Point]) -> ClosestPairResult<ClosestPair> {
    let mut sink = NoopSink;
    closest_pair_traced(points, &mut sink)
}

/// Find the closest pair, narrating each phase to `sink`
///
/// Emits one line per divide, conquer entry, combine, strip build and
/// improvement, tagged with recursion depth. Returns exactly what
/// [`closest_pair`] returns for the same input.
pub fn closest_pair_traced(
    points: &[Point],
    sink: &mut dyn TraceSink,
) -> ClosestPairResult<ClosestPair> {
    for (index, point) in points.iter().enumerate() {
        if !point.is_finite() {
            return Err(ClosestPairError::InvalidCoordinate {
                index,
                point: *point,
            });
        }
    }
    if points.len() < 2 {
        return Err(ClosestPairError::InsufficientInput {
            found: points.len(),
        });
    }

    // Two orderings, computed once. `by_y` holds indices into `by_x` so
    // the recursion can partition by index comparison instead of point
    // membership tests.
    let mut by_x = points.to_vec();
    by_x.sort_by(Point::cmp_xy);

    let mut by_y: Vec<usize> = (0..by_x.len()).collect();
    by_y.sort_by(|&a, &b| by_x[a].cmp_yx(&by_x[b]));

    sink.record(
        0,
        &format!("solve: {} points, sorted by x and by y", by_x.len()),
    );
    Ok(solve(&by_x, 0, by_x.len(), &by_y, 0, sink))
}

/// Brute-force reference: all pairwise distances, O(n²)
///
/// The recursion base case, and the oracle the solver is tested against.
/// Returns `None` for fewer than 2 points.
pub fn brute_force(points: &[Point]) -> Option<ClosestPair> {
    let mut best: Option<ClosestPair> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = points[i].distance(&points[j]);
            if best.map_or(true, |b| d < b.distance) {
                best = Some(ClosestPair {
                    distance: d,
                    pair: (points[i], points[j]),
                });
            }
        }
    }
    best
}

/// Recursive solve over `by_x[lo..hi]`
///
/// `ys` lists the indices of exactly that subset, in global y-order.
/// Caller guarantees `hi - lo >= 2`.
fn solve(
    by_x: &[Point],
    lo: usize,
    hi: usize,
    ys: &[usize],
    depth: usize,
    sink: &mut dyn TraceSink,
) -> ClosestPair {
    let n = hi - lo;
    if n <= 3 {
        // Guaranteed Some: n >= 2 here
        let best = brute_force(&by_x[lo..hi])
            .unwrap_or_else(|| unreachable!("base case always has >= 2 points"));
        sink.record(
            depth,
            &format!(
                "base case: {} points, brute force d = {:.6}",
                n, best.distance
            ),
        );
        return best;
    }

    let mid = lo + n / 2;
    let split_x = by_x[mid].x;
    sink.record(
        depth,
        &format!("divide: {} points, split at x = {}", n, split_x),
    );

    // Partition the y-ordered indices around the split. An index
    // comparison stands in for the membership test - the left half is
    // exactly the indices below `mid` - and the filter preserves the
    // global y-order in both halves.
    let mut left_ys = Vec::with_capacity(mid - lo);
    let mut right_ys = Vec::with_capacity(hi - mid);
    for &i in ys {
        if i < mid {
            left_ys.push(i);
        } else {
            right_ys.push(i);
        }
    }

    sink.record(depth, &format!("conquer left: {} points", mid - lo));
    let left = solve(by_x, lo, mid, &left_ys, depth + 1, sink);
    sink.record(depth, &format!("conquer right: {} points", hi - mid));
    let right = solve(by_x, mid, hi, &right_ys, depth + 1, sink);

    // Left wins ties; either would be correct.
    let mut best = if left.distance <= right.distance {
        left
    } else {
        right
    };
    sink.record(
        depth,
        &format!("combine: best of halves d = {:.6}", best.distance),
    );

    // Points within `best.distance` of the split line, still in y-order.
    let strip: Vec<Point> = ys
        .iter()
        .map(|&i| by_x[i])
        .filter(|p| (p.x - split_x).abs() < best.distance)
        .collect();
    sink.record(
        depth,
        &format!(
            "strip: {} points within {:.6} of x = {}",
            strip.len(),
            best.distance,
            split_x
        ),
    );

    // For each strip point, only the following points whose y-difference
    // is below the current best can possibly beat it. The packing
    // argument bounds this inner loop to a constant number of
    // comparisons; the y-distance condition is the only bound needed.
    for i in 0..strip.len() {
        for j in (i + 1)..strip.len() {
            if strip[j].y - strip[i].y >= best.distance {
                break;
            }
            let d = strip[i].distance(&strip[j]);
            if d < best.distance {
                best = ClosestPair {
                    distance: d,
                    pair: (strip[i], strip[j]),
                };
                sink.record(
                    depth,
                    &format!(
                        "improved: {} - {} d = {:.6}",
                        strip[i], strip[j], best.distance
                    ),
                );
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StepLog;

    /// Deterministic pseudo-random points (LCG), no external input needed
    fn random_points(n: usize, seed: u64) -> Vec<Point> {
        let mut state = seed;
        let mut next = move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as f64 / (1u64 << 31) as f64 * 1000.0
        };
        (0..n).map(|_| Point::new(next(), next())).collect()
    }

    fn same_pair(a: (Point, Point), b: (Point, Point)) -> bool {
        (a.0 == b.0 && a.1 == b.1) || (a.0 == b.1 && a.1 == b.0)
    }

    #[test]
    fn test_three_points() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(1.0, 1.0),
        ];
        let best = closest_pair(&pts).unwrap();
        assert!((best.distance - 2f64.sqrt()).abs() < 1e-9);
        assert!(same_pair(
            best.pair,
            (Point::new(0.0, 0.0), Point::new(1.0, 1.0))
        ));
    }

    #[test]
    fn test_duplicate_points_give_zero() {
        let pts = [Point::new(0.0, 0.0), Point::new(0.0, 0.0)];
        let best = closest_pair(&pts).unwrap();
        assert_eq!(best.distance, 0.0);
        assert_eq!(best.pair.0, best.pair.1);
    }

    #[test]
    fn test_single_point_is_insufficient() {
        let pts = [Point::new(5.0, 5.0)];
        let err = closest_pair(&pts).unwrap_err();
        assert_eq!(err, ClosestPairError::InsufficientInput { found: 1 });
    }

    #[test]
    fn test_empty_input_is_insufficient() {
        let err = closest_pair(&[]).unwrap_err();
        assert_eq!(err, ClosestPairError::InsufficientInput { found: 0 });
    }

    #[test]
    fn test_nan_coordinate_rejected() {
        let pts = [Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        match closest_pair(&pts).unwrap_err() {
            ClosestPairError::InvalidCoordinate { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_matches_brute_force() {
        for seed in [1, 7, 42, 1234] {
            let pts = random_points(200, seed);
            let fast = closest_pair(&pts).unwrap();
            let slow = brute_force(&pts).unwrap();
            assert!(
                (fast.distance - slow.distance).abs() < 1e-9,
                "seed {}: {} vs {}",
                seed,
                fast.distance,
                slow.distance
            );
        }
    }

    #[test]
    fn test_reordering_input_keeps_distance() {
        let pts = random_points(150, 99);
        let forward = closest_pair(&pts).unwrap();

        let mut reversed = pts.clone();
        reversed.reverse();
        let backward = closest_pair(&reversed).unwrap();

        assert!((forward.distance - backward.distance).abs() < 1e-12);
    }

    #[test]
    fn test_cross_split_pair_found() {
        // Closest pair straddles the split line; only the strip scan can
        // find it.
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 10.0),
            Point::new(4.9, 5.0),
            Point::new(5.1, 5.0),
            Point::new(9.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let best = closest_pair(&pts).unwrap();
        assert!((best.distance - 0.2).abs() < 1e-9);
        assert!(same_pair(
            best.pair,
            (Point::new(4.9, 5.0), Point::new(5.1, 5.0))
        ));
    }

    #[test]
    fn test_collinear_points() {
        let pts: Vec<Point> = (0..20).map(|i| Point::new(i as f64 * 2.0, 0.0)).collect();
        let best = closest_pair(&pts).unwrap();
        assert!((best.distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_trace_does_not_change_result() {
        let pts = random_points(100, 5);
        let plain = closest_pair(&pts).unwrap();

        let mut log = StepLog::new();
        let traced = closest_pair_traced(&pts, &mut log).unwrap();

        assert_eq!(plain.distance, traced.distance);
        assert!(!log.is_empty());
    }

    #[test]
    fn test_trace_narrates_divide_before_combine() {
        let pts = random_points(16, 3);
        let mut log = StepLog::new();
        closest_pair_traced(&pts, &mut log).unwrap();

        let first_divide = log
            .entries()
            .iter()
            .position(|e| e.line.starts_with("divide"))
            .expect("16 points must divide");
        let first_combine = log
            .entries()
            .iter()
            .position(|e| e.line.starts_with("combine"))
            .expect("16 points must combine");
        assert!(first_divide < first_combine);
    }

    #[test]
    fn test_brute_force_small() {
        assert!(brute_force(&[]).is_none());
        assert!(brute_force(&[Point::new(1.0, 1.0)]).is_none());

        let b = brute_force(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).unwrap();
        assert!((b.distance - 1.0).abs() < 1e-12);
    }
}
