//! Benchmark parameter types, used as Criterion benchmark identifiers.

use std::fmt;

/// Parameters for a benchmark over a grid graph.
#[derive(Clone, Copy, Debug)]
pub struct GridBenchParams {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parameters for a top-K selection benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct SelectBenchParams {
    /// Number of input items.
    pub item_count: usize,
    /// Number of items kept.
    pub k: usize,
}

impl fmt::Display for SelectBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.item_count, self.k)
    }
}
