//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for spanning trees, shortest paths and top-K selection.

pub mod error;
pub mod params;
pub mod source;
