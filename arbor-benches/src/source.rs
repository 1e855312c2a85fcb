//! Seeded synthetic inputs for the benchmarks.
//!
//! Grid graphs connect every cell to its right and lower neighbour, giving
//! `2wh - w - h` edges over `wh` vertices. Optional chords add random
//! long-range edges so the graph is not planar.

use arbor_core::{Graph, WeightedEdge};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Integer-labelled graph used by the benchmarks.
pub type BenchGraph = Graph<usize, WeightedEdge<usize>>;

/// Configuration for [`grid_graph`].
#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Number of extra random edges between arbitrary vertices.
    pub chords: usize,
    /// Exclusive upper bound for integer edge weights.
    pub max_weight: u32,
    /// Seed for weights and chord endpoints.
    pub seed: u64,
}

/// Builds a weighted grid graph with vertices numbered row-major.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for an empty grid or weight range.
pub fn grid_graph(config: &GridConfig) -> Result<BenchGraph, BenchSetupError> {
    if config.width == 0 || config.height == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "grid dimensions",
        });
    }
    if config.max_weight == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "max_weight",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let vertex_count = config.width.saturating_mul(config.height);
    let mut edges = Vec::new();
    let mut push = |left: usize, right: usize, rng: &mut SmallRng| {
        let weight = f64::from(rng.gen_range(0..config.max_weight));
        let sequence = u64::try_from(edges.len()).unwrap_or(u64::MAX);
        edges.push(WeightedEdge::new(left, right, weight, sequence));
    };

    for row in 0..config.height {
        for column in 0..config.width {
            let vertex = row * config.width + column;
            if column + 1 < config.width {
                push(vertex, vertex + 1, &mut rng);
            }
            if row + 1 < config.height {
                push(vertex, vertex + config.width, &mut rng);
            }
        }
    }
    for _ in 0..config.chords {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        push(left, right, &mut rng);
    }

    Ok(Graph::new(0..vertex_count, edges)?)
}

/// Draws `count` random keys for selection benchmarks.
#[must_use]
pub fn random_keys(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| rng.r#gen::<u64>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(width: usize, height: usize, chords: usize) -> GridConfig {
        GridConfig {
            width,
            height,
            chords,
            max_weight: 100,
            seed: 7,
        }
    }

    #[rstest]
    #[case::square(4, 4, 0, 24)]
    #[case::strip(5, 1, 0, 4)]
    #[case::with_chords(3, 3, 10, 22)]
    fn grid_has_expected_edge_count(
        #[case] width: usize,
        #[case] height: usize,
        #[case] chords: usize,
        #[case] expected: usize,
    ) {
        let graph = grid_graph(&config(width, height, chords)).expect("grid must build");
        assert_eq!(graph.vertex_count(), width * height);
        assert_eq!(graph.edge_count(), expected);
        assert!(
            graph
                .minimum_spanning_tree()
                .expect("MST must succeed")
                .is_tree()
        );
    }

    #[rstest]
    #[case::no_columns(0, 3, 10)]
    #[case::no_rows(3, 0, 10)]
    #[case::no_weights(3, 3, 0)]
    fn rejects_zero_parameters(#[case] width: usize, #[case] height: usize, #[case] max_weight: u32) {
        let err = grid_graph(&GridConfig {
            max_weight,
            ..config(width, height, 0)
        })
        .expect_err("parameters must be rejected");
        assert!(matches!(err, BenchSetupError::ZeroValue { .. }));
    }

    #[test]
    fn generation_is_seeded() {
        let first = grid_graph(&config(6, 6, 5)).expect("grid must build");
        let second = grid_graph(&config(6, 6, 5)).expect("grid must build");
        assert_eq!(first.edges(), second.edges());
        assert_eq!(random_keys(32, 3), random_keys(32, 3));
    }
}
