//! Undirected weighted graphs.
//!
//! A [`Graph`] is validated once at construction and is read-only afterwards.
//! Vertices may be any hashable type; edges are any type implementing
//! [`Edge`]. Self-loops and parallel edges are retained, so the
//! representation also covers multigraphs.

mod edge;

use std::{collections::HashMap, hash::Hash};

use tracing::{Span, debug, field, instrument};

use crate::error::GraphError;

pub use self::edge::{Edge, WeightedEdge};

/// An immutable undirected weighted graph.
///
/// Besides the caller's vertices and edges the graph keeps a derived
/// incidence table mapping each vertex to the edges touching it. The table is
/// built once in [`Graph::new`] and never changes.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, WeightedEdge};
///
/// let graph = Graph::new(
///     ['A', 'B', 'C'],
///     [
///         WeightedEdge::new('A', 'B', 1.0, 0),
///         WeightedEdge::new('B', 'C', 2.0, 1),
///         WeightedEdge::new('A', 'C', 5.0, 2),
///     ],
/// )?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.incident_edges(&'B').map(Iterator::count), Some(2));
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, E> {
    vertices: Vec<V>,
    edges: Vec<E>,
    positions: HashMap<V, usize>,
    endpoints: Vec<(usize, usize)>,
    incidence: Vec<Vec<usize>>,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
{
    /// Validates the supplied vertices and edges and builds the graph.
    ///
    /// Any iterable works for either argument, so list- and set-shaped
    /// collections are both accepted. Vertex and edge order is preserved and
    /// error positions refer to it.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when a vertex repeats,
    /// [`GraphError::NonFiniteWeight`] or [`GraphError::NegativeWeight`] when
    /// an edge weight is not a finite non-negative number, and
    /// [`GraphError::UnknownEndpoint`] when an edge touches a vertex missing
    /// from `vertices`.
    #[instrument(
        name = "graph.new",
        level = "debug",
        err,
        skip_all,
        fields(vertices = field::Empty, edges = field::Empty),
    )]
    pub fn new<IV, IE>(vertices: IV, edges: IE) -> Result<Self, GraphError>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = E>,
    {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let edges: Vec<E> = edges.into_iter().collect();
        let span = Span::current();
        span.record("vertices", vertices.len());
        span.record("edges", edges.len());

        let mut positions = HashMap::with_capacity(vertices.len());
        for (index, vertex) in vertices.iter().enumerate() {
            if positions.insert(vertex.clone(), index).is_some() {
                return Err(GraphError::DuplicateVertex { index });
            }
        }

        let mut incidence = vec![Vec::new(); vertices.len()];
        let mut endpoints = Vec::with_capacity(edges.len());
        for (position, edge) in edges.iter().enumerate() {
            let (first, second) = validate_edge(&positions, position, edge)?;
            incidence[first].push(position);
            incidence[second].push(position);
            endpoints.push((first, second));
        }

        debug!(
            self_loops = endpoints.iter().filter(|(a, b)| a == b).count(),
            "graph constructed"
        );
        Ok(Self {
            vertices,
            edges,
            positions,
            endpoints,
            incidence,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertices.len() }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the vertices in construction order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertices(&self) -> &[V] { self.vertices.as_slice() }

    /// Returns the edges in construction order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &[E] { self.edges.as_slice() }

    /// Returns `true` when `vertex` belongs to the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    /// Returns the edges touching `vertex`, or `None` for unknown vertices.
    ///
    /// A self-loop appears twice in its vertex's list.
    pub fn incident_edges<'g>(&'g self, vertex: &V) -> Option<impl Iterator<Item = &'g E> + 'g> {
        let position = self.position_of(vertex)?;
        let incident = self.incidence.get(position)?;
        Some(incident.iter().map(move |&edge| &self.edges[edge]))
    }

    pub(crate) fn position_of(&self, vertex: &V) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    pub(crate) fn incident_positions(&self, vertex: usize) -> &[usize] {
        self.incidence.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Vertex positions of an edge's endpoints in `vertex1`, `vertex2` order.
    pub(crate) fn endpoint_positions(&self, edge: usize) -> (usize, usize) {
        self.endpoints[edge]
    }
}

fn validate_edge<V, E>(
    positions: &HashMap<V, usize>,
    position: usize,
    edge: &E,
) -> Result<(usize, usize), GraphError>
where
    V: Eq + Hash,
    E: Edge<V>,
{
    let weight = edge.weight();
    if !weight.is_finite() {
        return Err(GraphError::NonFiniteWeight { edge: position });
    }
    if weight < 0.0 {
        return Err(GraphError::NegativeWeight {
            edge: position,
            weight,
        });
    }

    let locate = |vertex: &V| {
        positions
            .get(vertex)
            .copied()
            .ok_or(GraphError::UnknownEndpoint { edge: position })
    };
    Ok((locate(edge.vertex1())?, locate(edge.vertex2())?))
}
