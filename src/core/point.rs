//! # Point
//!
//! A position in the plane. The fundamental primitive of the
//! closest-pair solver.
//!
//! Points are plain values: equality and ordering go by coordinates,
//! never by identity. Duplicate points are legal input - two coincident
//! points are at distance zero, and zero is a valid answer.

use std::cmp::Ordering;

use serde::Serialize;

/// A point in the plane
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    ///
    /// # Example
    /// ```
    /// use divide_conquer::core::Point;
    /// let p = Point::new(3.0, 4.0);
    /// assert_eq!(p.x, 3.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    ///
    /// # Example
    /// ```
    /// use divide_conquer::core::Point;
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    /// ```
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Check that both coordinates are finite (no NaN, no infinities)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Total order by x, ties broken by y
    ///
    /// The sort order of the solver's `by_x` precomputation.
    pub fn cmp_xy(&self, other: &Point) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// Total order by y, ties broken by x
    ///
    /// The sort order of the solver's `by_y` precomputation.
    pub fn cmp_yx(&self, other: &Point) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_point() {
        let p = Point::new(1.5, -2.5);
        assert_eq!(p.x, 1.5);
        assert_eq!(p.y, -2.5);
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point::new(7.0, -3.0);
        assert_eq!(p.distance(&p), 0.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_cmp_xy_breaks_ties_by_y() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(1.0, 3.0);
        assert_eq!(a.cmp_xy(&b), Ordering::Less);
        assert_eq!(b.cmp_xy(&a), Ordering::Greater);
        assert_eq!(a.cmp_xy(&a), Ordering::Equal);
    }

    #[test]
    fn test_cmp_yx_breaks_ties_by_x() {
        let a = Point::new(2.0, 1.0);
        let b = Point::new(3.0, 1.0);
        assert_eq!(a.cmp_yx(&b), Ordering::Less);
    }

    #[test]
    fn test_display() {
        let p = Point::new(1.0, 2.5);
        assert_eq!(format!("{}", p), "(1, 2.5)");
    }
}
