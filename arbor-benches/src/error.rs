//! Benchmark setup error type.
//!
//! Collects the failures that can occur while preparing benchmark inputs so
//! setup functions propagate them with `?`.

use arbor_core::{GraphError, MstError, PathError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building the synthetic graph failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A warm-up spanning tree computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A warm-up shortest path query failed.
    #[error("shortest path query failed: {0}")]
    Path(#[from] PathError),
    /// A zero value was passed where a non-zero value was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
}
