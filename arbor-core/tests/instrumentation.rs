//! Span and event assertions for the instrumented entry points.

use arbor_core::{Graph, PathError, WeightedEdge};
use arbor_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tracing::Level;

type IntGraph = Graph<usize, WeightedEdge<usize>>;

fn graph(vertex_count: usize, edges: &[(usize, usize, f64)]) -> IntGraph {
    let edges = edges
        .iter()
        .zip(0_u64..)
        .map(|(&(left, right, weight), sequence)| WeightedEdge::new(left, right, weight, sequence));
    Graph::new(0..vertex_count, edges).expect("fixture graph must be valid")
}

#[fixture]
fn layer() -> RecordingLayer {
    RecordingLayer::default()
}

#[rstest]
fn graph_construction_records_sizes(layer: RecordingLayer) {
    layer.capture(|| graph(4, &[(0, 1, 1.0), (1, 1, 2.0)]));

    let span = layer.span_named("graph.new").expect("graph.new span must exist");
    assert_eq!(span.field("vertices"), Some("4"));
    assert_eq!(span.field("edges"), Some("2"));
    assert!(layer.events().iter().any(|event| {
        event.message() == Some("graph constructed") && event.field("self_loops") == Some("1")
    }));
}

#[rstest]
fn spanning_forest_warns_when_disconnected(layer: RecordingLayer) {
    let graph = graph(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
    let forest = layer.capture(|| graph.minimum_spanning_tree().expect("forest must succeed"));
    assert_eq!(forest.component_count(), 2);

    let span = layer
        .span_named("graph.minimum_spanning_tree")
        .expect("MST span must exist");
    assert_eq!(span.field("vertices"), Some("4"));
    assert_eq!(span.field("edges"), Some("2"));

    let warnings = layer.events_at(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("components"), Some("2"));
    assert_eq!(
        warnings[0].parent.as_deref(),
        Some("graph.minimum_spanning_tree")
    );
}

#[rstest]
fn connected_spanning_tree_does_not_warn(layer: RecordingLayer) {
    let graph = graph(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
    layer.capture(|| graph.minimum_spanning_tree().expect("tree must succeed"));
    assert!(layer.events_at(Level::WARN).is_empty());
    assert!(layer.events().iter().any(|event| {
        event.message() == Some("spanning forest computed") && event.field("edges") == Some("2")
    }));
}

#[rstest]
fn shortest_path_counts_stale_estimates(layer: RecordingLayer) {
    // Vertex 2 is queued at 10 before being improved to 2; the stale record
    // surfaces before the far end at 23.
    let graph = graph(
        5,
        &[(0, 2, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 20.0)],
    );
    let path = layer.capture(|| graph.shortest_path(&0, &4).expect("path exists"));
    assert_eq!(path.distance(), 23.0);

    let span = layer
        .span_named("graph.shortest_path")
        .expect("shortest path span must exist");
    assert_eq!(span.field("stale"), Some("1"));
    assert!(layer.events_at(Level::TRACE).iter().any(|event| {
        event.message() == Some("skipping stale path estimate") && event.field("vertex") == Some("2")
    }));
}

#[rstest]
fn failed_queries_emit_error_events(layer: RecordingLayer) {
    let graph = graph(3, &[(0, 1, 1.0)]);
    let err = layer.capture(|| graph.shortest_path(&0, &2).expect_err("vertex 2 is isolated"));
    assert_eq!(err, PathError::NoPath);

    let errors = layer.events_at(Level::ERROR);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].parent.as_deref(), Some("graph.shortest_path"));
    assert_eq!(errors[0].field("error"), Some(err.to_string().as_str()));
}

#[cfg(feature = "maze")]
#[rstest]
fn maze_carving_nests_graph_spans(layer: RecordingLayer) {
    use arbor_core::{Maze, MazeParams};

    let params = MazeParams {
        width: 5,
        height: 3,
        seed: 21,
        max_weight: 10,
    };
    layer.capture(|| Maze::carve(params).expect("maze must carve"));

    let carve = layer.span_named("maze.carve").expect("maze.carve span must exist");
    assert_eq!(carve.field("width"), Some("5"));
    assert_eq!(carve.field("height"), Some("3"));
    assert_eq!(carve.field("seed"), Some("21"));

    let names: Vec<String> = layer.spans().into_iter().map(|span| span.name).collect();
    assert_eq!(names.iter().filter(|name| *name == "graph.new").count(), 2);
    assert!(names.iter().any(|name| name == "graph.minimum_spanning_tree"));
    // Child spans close before their parent.
    assert_eq!(names.last().map(String::as_str), Some("maze.carve"));
}
