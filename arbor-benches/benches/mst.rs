//! Kruskal minimum spanning tree benchmarks.
//!
//! Measures `minimum_spanning_tree` over seeded grid graphs with random
//! chords, and the weight-lookup variant used by maze carving.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use arbor_benches::{
    error::BenchSetupError,
    params::GridBenchParams,
    source::{GridConfig, grid_graph},
};
use arbor_core::Edge;

/// Seed used for all synthetic data generation in this benchmark.
const SEED: u64 = 42;

/// Grid side lengths to benchmark.
const SIDES: &[usize] = &[32, 64, 128];

fn mst_kruskal_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("kruskal");
    group.sample_size(20);

    for &side in SIDES {
        let graph = grid_graph(&GridConfig {
            width: side,
            height: side,
            chords: side,
            max_weight: 1_000,
            seed: SEED,
        })?;
        // Fail setup, not the measurement, if the input is unusable.
        graph.minimum_spanning_tree()?;

        let params = GridBenchParams {
            width: side,
            height: side,
        };
        group.bench_with_input(BenchmarkId::new("stored", params), &graph, |b, graph| {
            b.iter(|| graph.minimum_spanning_tree());
        });
        group.bench_with_input(BenchmarkId::new("lookup", params), &graph, |b, graph| {
            b.iter(|| graph.minimum_spanning_tree_with(|_, edge| edge.weight()));
        });
    }

    group.finish();
    Ok(())
}

fn mst_kruskal(c: &mut Criterion) {
    if let Err(err) = mst_kruskal_impl(c) {
        panic!("mst_kruskal benchmark setup failed: {err}");
    }
}

criterion_group!(benches, mst_kruskal);
criterion_main!(benches);
