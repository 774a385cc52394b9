//! # Ingest Adapter
//!
//! Parsing of the two on-disk input formats into core values.
//!
//! Both formats are plain text, one value per line, with an optional
//! leading count line:
//! - Points: `x y` per line
//! - Integers: one (arbitrarily large) decimal integer per line
//!
//! The core never sees files - it receives already-parsed sequences.

use std::fs;
use std::path::Path;

use num_bigint::BigInt;
use tracing::warn;

use crate::core::Point;

/// Result type for ingest operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that can occur while reading input files
#[derive(Debug)]
pub enum IngestError {
    /// The file could not be read
    Io(std::io::Error),

    /// A line could not be parsed as an `x y` coordinate pair
    MalformedPoint {
        /// 1-based line number
        line_no: usize,
        /// The offending line
        content: String,
    },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Io(e) => write!(f, "I/O error: {}", e),
            IngestError::MalformedPoint { line_no, content } => {
                write!(f, "Malformed point on line {}: {:?}", line_no, content)
            }
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IngestError {
    fn from(e: std::io::Error) -> Self {
        IngestError::Io(e)
    }
}

/// Read a point file
///
/// Accepts either a leading count line followed by that many `x y`
/// lines, or a plain list of `x y` lines.
pub fn read_points(path: &Path) -> IngestResult<Vec<Point>> {
    parse_points(&fs::read_to_string(path)?)
}

/// Read an integer file
///
/// One integer per line; non-integer lines are skipped with a warning.
pub fn read_integers(path: &Path) -> IngestResult<Vec<BigInt>> {
    Ok(parse_integers(&fs::read_to_string(path)?))
}

/// Parse point text
///
/// If the first line is a bare integer it is taken as a count and
/// exactly that many following lines are read (fewer if the file ends
/// or a blank line appears). Otherwise every non-blank line is a point.
///
/// # Example
/// ```
/// use divide_conquer::adapters::ingest::parse_points;
///
/// let with_header = parse_points("2\n0 0\n3 4\n").unwrap();
/// let plain = parse_points("0 0\n3 4\n").unwrap();
/// assert_eq!(with_header, plain);
/// ```
pub fn parse_points(input: &str) -> IngestResult<Vec<Point>> {
    let mut lines = input.lines().enumerate();
    let mut points = Vec::new();

    let first = match lines.next() {
        Some((_, line)) => line,
        None => return Ok(points),
    };

    if let Ok(count) = first.trim().parse::<usize>() {
        for _ in 0..count {
            match lines.next() {
                Some((line_no, line)) if !line.trim().is_empty() => {
                    points.push(parse_point_line(line_no + 1, line)?);
                }
                _ => break,
            }
        }
        return Ok(points);
    }

    // First line wasn't a count: it's a point
    if !first.trim().is_empty() {
        points.push(parse_point_line(1, first)?);
    }
    for (line_no, line) in lines {
        if !line.trim().is_empty() {
            points.push(parse_point_line(line_no + 1, line)?);
        }
    }
    Ok(points)
}

fn parse_point_line(line_no: usize, line: &str) -> IngestResult<Point> {
    let mut fields = line.split_whitespace();
    let parsed = match (fields.next(), fields.next(), fields.next()) {
        (Some(x), Some(y), None) => match (x.parse::<f64>(), y.parse::<f64>()) {
            (Ok(x), Ok(y)) => Some(Point::new(x, y)),
            _ => None,
        },
        _ => None,
    };
    parsed.ok_or_else(|| IngestError::MalformedPoint {
        line_no,
        content: line.to_string(),
    })
}

/// Parse integer text
///
/// A leading count line is recognised when the first line is a
/// non-negative integer and exactly that many non-blank lines follow.
/// Unparseable lines are skipped with a warning naming the line.
pub fn parse_integers(input: &str) -> Vec<BigInt> {
    let lines: Vec<&str> = input.lines().collect();

    // Count-header detection: the header itself parses as an integer,
    // so it is only treated as one when the line count confirms it.
    let body: &[&str] = match lines.first().and_then(|l| l.trim().parse::<usize>().ok()) {
        Some(count) if lines[1..].iter().filter(|l| !l.trim().is_empty()).count() == count => {
            &lines[1..]
        }
        _ => &lines[..],
    };

    let mut nums = Vec::new();
    for (i, line) in body.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<BigInt>() {
            Ok(num) => nums.push(num),
            Err(_) => warn!("Skipping non-integer line {}: {}", i + 1, line),
        }
    }
    nums
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_with_count_header() {
        let pts = parse_points("3\n0 0\n3 4\n1 1\n").unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1], Point::new(3.0, 4.0));
    }

    #[test]
    fn test_points_without_header() {
        let pts = parse_points("0.5 -1.5\n2 3\n").unwrap();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0], Point::new(0.5, -1.5));
    }

    #[test]
    fn test_points_header_limits_lines() {
        // Count header says 2: the third line is ignored
        let pts = parse_points("2\n0 0\n1 1\n9 9\n").unwrap();
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn test_points_short_file_stops_at_eof() {
        let pts = parse_points("5\n0 0\n1 1\n").unwrap();
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn test_points_blank_lines_skipped() {
        let pts = parse_points("0 0\n\n1 1\n").unwrap();
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn test_malformed_point_is_error() {
        let err = parse_points("0 0\nnot a point\n").unwrap_err();
        match err {
            IngestError::MalformedPoint { line_no, .. } => assert_eq!(line_no, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_point_file() {
        assert!(parse_points("").unwrap().is_empty());
    }

    #[test]
    fn test_integers_plain() {
        let nums = parse_integers("12\n34\n5600000000000000000000\n");
        assert_eq!(nums.len(), 3);
        assert_eq!(nums[0], BigInt::from(12));
        assert_eq!(nums[2], "5600000000000000000000".parse::<BigInt>().unwrap());
    }

    #[test]
    fn test_integers_with_count_header() {
        // First line 2 matches the number of following lines: header
        let nums = parse_integers("2\n100\n200\n");
        assert_eq!(nums, vec![BigInt::from(100), BigInt::from(200)]);
    }

    #[test]
    fn test_integers_first_line_is_a_value_when_counts_mismatch() {
        // "2" can't be a header for three following lines
        let nums = parse_integers("2\n100\n200\n300\n");
        assert_eq!(nums.len(), 4);
        assert_eq!(nums[0], BigInt::from(2));
    }

    #[test]
    fn test_integers_skip_bad_lines() {
        let nums = parse_integers("10\nhello\n20\n");
        assert_eq!(nums, vec![BigInt::from(10), BigInt::from(20)]);
    }

    #[test]
    fn test_negative_integers_parse() {
        // Ingest passes them through; the multiplier rejects them
        let nums = parse_integers("-5\n");
        assert_eq!(nums, vec![BigInt::from(-5)]);
    }
}
