//! # Trace Port
//!
//! Sink for step-by-step narration of an algorithm run.
//!
//! Solvers describe what they are doing - dividing, recursing, combining -
//! one line at a time, tagged with recursion depth. How those lines are
//! rendered (console, collected log, thrown away) is an adapter concern.
//!
//! The CORE emits narration. Adapters decide what it looks like.

/// Sink for narration lines emitted during a solver run
///
/// `depth` is the recursion depth of the emitting call (0 at the root).
/// Emission is purely observational: a solver must return the same result
/// whether its sink records everything or nothing.
pub trait TraceSink {
    /// Record one narration line at the given recursion depth
    fn record(&mut self, depth: usize, line: &str);
}

/// Sink that discards everything
///
/// Used by the untraced solver variants so the algorithms have a single
/// code path; recording to it compiles down to nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&mut self, _depth: usize, _line: &str) {}
}

/// One recorded narration line
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StepEntry {
    /// Recursion depth of the emitting call
    pub depth: usize,
    /// The narration text
    pub line: String,
}

/// Collecting sink: an append-only log of one solver run
///
/// Owned by a single invocation; the caller reads it after the run and
/// discards it. Entries appear in algorithmic execution order.
///
/// # Example
/// ```
/// use divide_conquer::ports::{StepLog, TraceSink};
///
/// let mut log = StepLog::new();
/// log.record(0, "divide at x = 4.5");
/// log.record(1, "left half: 3 points");
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.entries()[1].depth, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StepLog {
    entries: Vec<StepEntry>,
}

impl StepLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded entries, in execution order
    pub fn entries(&self) -> &[StepEntry] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TraceSink for StepLog {
    fn record(&mut self, depth: usize, line: &str) {
        self.entries.push(StepEntry {
            depth,
            line: line.to_string(),
        });
    }
}
