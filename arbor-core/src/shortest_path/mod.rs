//! Single-pair shortest paths via Dijkstra's algorithm.
//!
//! The search keeps one authoritative best-distance entry per vertex and
//! pushes a fresh heap record whenever that entry strictly improves. Older
//! records for the same vertex stay in the heap and are discarded when popped.
//! Records compare distances with [`f64::total_cmp`], so fractional
//! differences order correctly. The search stops as soon as the target is
//! popped.

use std::{cmp::Ordering, collections::BinaryHeap, hash::Hash};

use tracing::{Span, debug, field, instrument, trace};

use crate::{
    error::{Endpoint, PathError},
    graph::{Edge, Graph},
};

/// A least-cost path between two vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath<'g, E> {
    edges: Vec<&'g E>,
    distance: f64,
}

impl<'g, E> ShortestPath<'g, E> {
    /// Returns the path's edges in traversal order.
    ///
    /// The first edge leaves the start vertex and the last one enters the end
    /// vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &[&'g E] { self.edges.as_slice() }

    /// Returns the summed weight of the path.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> f64 { self.distance }

    /// Returns the number of edges on the path.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` for the empty path between a vertex and itself.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Consumes the path and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<&'g E> {
        self.edges
    }
}

/// Heap record: a tentative distance to a vertex.
///
/// Ordering is reversed so that [`BinaryHeap`] pops the smallest distance,
/// with lower vertex positions first among equals.
#[derive(Clone, Copy, Debug)]
struct PathEstimate {
    distance: f64,
    vertex: usize,
}

impl Ord for PathEstimate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for PathEstimate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PathEstimate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for PathEstimate {}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
{
    /// Finds a least-cost path from `start` to `end`.
    ///
    /// Returns an empty path at distance zero when `start == end`, before any
    /// membership check.
    ///
    /// # Errors
    /// Returns [`PathError::UnknownVertex`] when the endpoints differ and either
    /// is not part of the graph and [`PathError::NoPath`] when `end` is unreachable.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph, WeightedEdge};
    ///
    /// let graph = Graph::new(
    ///     ['A', 'B', 'C'],
    ///     [
    ///         WeightedEdge::new('A', 'B', 1.0, 0),
    ///         WeightedEdge::new('B', 'C', 2.0, 1),
    ///         WeightedEdge::new('A', 'C', 5.0, 2),
    ///     ],
    /// )?;
    /// let path = graph.shortest_path(&'A', &'C')?;
    /// assert_eq!(path.distance(), 3.0);
    /// let hops: Vec<(char, char)> = path
    ///     .edges()
    ///     .iter()
    ///     .map(|edge| (*edge.vertex1(), *edge.vertex2()))
    ///     .collect();
    /// assert_eq!(hops, vec![('A', 'B'), ('B', 'C')]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[instrument(
        name = "graph.shortest_path",
        level = "debug",
        err,
        skip_all,
        fields(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            stale = field::Empty,
        ),
    )]
    pub fn shortest_path(&self, start: &V, end: &V) -> Result<ShortestPath<'_, E>, PathError> {
        if start == end {
            return Ok(ShortestPath {
                edges: Vec::new(),
                distance: 0.0,
            });
        }
        let source = self.position_of(start).ok_or(PathError::UnknownVertex {
            endpoint: Endpoint::Start,
        })?;
        let target = self.position_of(end).ok_or(PathError::UnknownVertex {
            endpoint: Endpoint::End,
        })?;

        let vertex_count = self.vertex_count();
        let mut best = vec![f64::INFINITY; vertex_count];
        let mut entered_by: Vec<Option<usize>> = vec![None; vertex_count];
        best[source] = 0.0;

        let mut queue = BinaryHeap::new();
        queue.push(PathEstimate {
            distance: 0.0,
            vertex: source,
        });

        let mut stale = 0_usize;
        while let Some(PathEstimate { distance, vertex }) = queue.pop() {
            if distance > best[vertex] {
                stale = stale.saturating_add(1);
                record_stale_record();
                trace!(vertex, distance, "skipping stale path estimate");
                continue;
            }
            if vertex == target {
                break;
            }
            for &edge in self.incident_positions(vertex) {
                let neighbour = self.opposite_position(edge, vertex);
                let candidate = distance + self.edges()[edge].weight();
                if candidate < best[neighbour] {
                    best[neighbour] = candidate;
                    entered_by[neighbour] = Some(edge);
                    queue.push(PathEstimate {
                        distance: candidate,
                        vertex: neighbour,
                    });
                }
            }
        }
        Span::current().record("stale", stale);

        if best[target].is_infinite() {
            debug!("end vertex is unreachable from start vertex");
            return Err(PathError::NoPath);
        }

        let edges = self
            .trace_back(&entered_by, source, target)
            .ok_or(PathError::NoPath)?;
        debug!(hops = edges.len(), distance = best[target], "shortest path found");
        Ok(ShortestPath {
            edges,
            distance: best[target],
        })
    }

    fn opposite_position(&self, edge: usize, vertex: usize) -> usize {
        let (first, second) = self.endpoint_positions(edge);
        if first == vertex { second } else { first }
    }

    /// Follows the entering edges from `target` back to `source`.
    fn trace_back(
        &self,
        entered_by: &[Option<usize>],
        source: usize,
        target: usize,
    ) -> Option<Vec<&E>> {
        let mut edges = Vec::new();
        let mut current = target;
        while current != source {
            if edges.len() >= entered_by.len() {
                return None;
            }
            let edge = (*entered_by.get(current)?)?;
            edges.push(&self.edges()[edge]);
            current = self.opposite_position(edge, current);
        }
        edges.reverse();
        Some(edges)
    }
}

#[cfg(feature = "metrics")]
fn record_stale_record() {
    metrics::counter!("shortest_path_stale_records").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_stale_record() {}
