//! Property-based tests for the Kruskal spanning forest.
//!
//! Small graphs are checked against a brute-force oracle that enumerates every
//! edge subset. Larger graphs are checked for the structural invariants of a
//! spanning forest: acyclicity, the `V - C` edge count and determinism.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::disjoint_set::DisjointSet;
use crate::graph::{Edge, Graph, WeightedEdge};
use crate::test_utils::{numbered_edges, suite_proptest_config};

/// How edge weights are drawn for generated graphs.
#[derive(Arbitrary, Clone, Copy, Debug)]
enum WeightProfile {
    /// Weights drawn from a wide range, so ties are rare.
    Spread,
    /// Weights drawn from a handful of values, stressing tie-breaking.
    Clustered,
}

impl WeightProfile {
    fn weights(self) -> BoxedStrategy<f64> {
        match self {
            Self::Spread => (0_u32..10_000).prop_map(|w| f64::from(w) / 8.0).boxed(),
            Self::Clustered => (0_u32..3).prop_map(f64::from).boxed(),
        }
    }
}

#[derive(Clone, Debug)]
struct GraphFixture {
    vertex_count: usize,
    edges: Vec<(usize, usize, f64)>,
}

impl GraphFixture {
    fn build(&self) -> Graph<usize, WeightedEdge<usize>> {
        Graph::new(0..self.vertex_count, numbered_edges(&self.edges))
            .expect("generated graphs are valid")
    }
}

fn fixture_strategy(
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = GraphFixture> {
    (1..=max_vertices, any::<WeightProfile>()).prop_flat_map(move |(vertex_count, profile)| {
        let edge = (0..vertex_count, 0..vertex_count, profile.weights());
        prop::collection::vec(edge, 0..=max_edges).prop_map(move |edges| GraphFixture {
            vertex_count,
            edges,
        })
    })
}

fn count_components(vertex_count: usize, edges: &[(usize, usize, f64)]) -> usize {
    let mut sets = DisjointSet::with_capacity(vertex_count);
    for vertex in 0..vertex_count {
        sets.make_set(vertex).expect("distinct vertices");
    }
    for &(left, right, _) in edges {
        // Already-joined endpoints are expected here.
        let _ = sets.union(&left, &right);
    }
    sets.set_count()
}

/// Minimum total weight over every acyclic subset with `V - C` edges.
fn brute_force_minimum(fixture: &GraphFixture) -> f64 {
    let target = fixture.vertex_count - count_components(fixture.vertex_count, &fixture.edges);
    let edge_count = fixture.edges.len();
    let mut best = f64::INFINITY;

    for mask in 0_u32..(1 << edge_count) {
        if mask.count_ones() as usize != target {
            continue;
        }
        let chosen: Vec<_> = (0..edge_count)
            .filter(|bit| mask & (1 << bit) != 0)
            .map(|bit| fixture.edges[bit])
            .collect();
        if count_components(fixture.vertex_count, &chosen) != fixture.vertex_count - target {
            continue;
        }
        let total: f64 = chosen.iter().map(|&(_, _, weight)| weight).sum();
        best = best.min(total);
    }
    best
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn total_weight_matches_brute_force(fixture in fixture_strategy(6, 10)) {
        let graph = fixture.build();
        let forest = graph.minimum_spanning_tree().expect("MST must succeed");
        let expected = brute_force_minimum(&fixture);
        prop_assert!(
            (forest.total_weight() - expected).abs() < 1e-9,
            "kruskal={} brute_force={}",
            forest.total_weight(),
            expected,
        );
    }

    #[test]
    fn forest_is_acyclic_and_spanning(fixture in fixture_strategy(48, 160)) {
        let graph = fixture.build();
        let forest = graph.minimum_spanning_tree().expect("MST must succeed");

        let mut replay = DisjointSet::with_capacity(fixture.vertex_count);
        for vertex in 0..fixture.vertex_count {
            replay.make_set(vertex).expect("distinct vertices");
        }
        for edge in forest.edges() {
            prop_assert!(
                replay.union(edge.vertex1(), edge.vertex2()).is_ok(),
                "edge {} closes a cycle",
                edge.sequence(),
            );
        }

        let components = count_components(fixture.vertex_count, &fixture.edges);
        prop_assert_eq!(forest.component_count(), components);
        prop_assert_eq!(replay.set_count(), components);
        prop_assert_eq!(forest.edges().len(), fixture.vertex_count - components);
        if components == 1 {
            prop_assert!(forest.is_tree());
        }
    }

    #[test]
    fn repeated_runs_are_identical(fixture in fixture_strategy(24, 80)) {
        let graph = fixture.build();
        let first = graph.minimum_spanning_tree().expect("MST must succeed");
        let second = graph.minimum_spanning_tree().expect("MST must succeed");
        prop_assert_eq!(first, second);
    }
}
