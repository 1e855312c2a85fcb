//! Edge abstraction and the stock weighted edge type.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// An undirected edge between two vertices.
///
/// Endpoint order carries no meaning for traversal, but `vertex1` and
/// `vertex2` are reported back exactly as supplied.
pub trait Edge<V> {
    /// Returns the first endpoint.
    fn vertex1(&self) -> &V;

    /// Returns the second endpoint.
    fn vertex2(&self) -> &V;

    /// Returns the edge weight.
    fn weight(&self) -> f64;

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// an endpoint. A self-loop returns its only vertex.
    fn other_vertex(&self, vertex: &V) -> Option<&V>
    where
        V: PartialEq,
    {
        if self.vertex1() == vertex {
            Some(self.vertex2())
        } else if self.vertex2() == vertex {
            Some(self.vertex1())
        } else {
            None
        }
    }

    /// Returns `true` when both endpoints are the same vertex.
    fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.vertex1() == self.vertex2()
    }
}

impl<V, E> Edge<V> for &E
where
    E: Edge<V> + ?Sized,
{
    fn vertex1(&self) -> &V {
        (**self).vertex1()
    }

    fn vertex2(&self) -> &V {
        (**self).vertex2()
    }

    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

/// A weighted edge with a caller-assigned sequence number.
///
/// Edges order by weight and then by sequence, so giving every edge a
/// distinct sequence makes any sort over them fully deterministic.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, WeightedEdge};
///
/// let light = WeightedEdge::new("a", "b", 1.5, 7);
/// let tied = WeightedEdge::new("b", "c", 1.5, 8);
/// assert!(light < tied);
/// assert_eq!(light.other_vertex(&"b"), Some(&"a"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct WeightedEdge<V> {
    vertex1: V,
    vertex2: V,
    weight: f64,
    sequence: u64,
}

impl<V> WeightedEdge<V> {
    /// Creates a new edge.
    #[must_use]
    pub fn new(vertex1: V, vertex2: V, weight: f64, sequence: u64) -> Self {
        Self {
            vertex1,
            vertex2,
            weight,
            sequence,
        }
    }

    /// Returns the tie-break sequence.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> u64 { self.sequence }
}

impl<V> Edge<V> for WeightedEdge<V> {
    #[rustfmt::skip]
    fn vertex1(&self) -> &V { &self.vertex1 }

    #[rustfmt::skip]
    fn vertex2(&self) -> &V { &self.vertex2 }

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }
}

impl<V: Eq> PartialEq for WeightedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight.total_cmp(&other.weight).is_eq()
            && self.sequence == other.sequence
            && self.vertex1 == other.vertex1
            && self.vertex2 == other.vertex2
    }
}

impl<V: Eq> Eq for WeightedEdge<V> {}

impl<V: Hash> Hash for WeightedEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertex1.hash(state);
        self.vertex2.hash(state);
        self.weight.to_bits().hash(state);
        self.sequence.hash(state);
    }
}

impl<V: Ord> Ord for WeightedEdge<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .then_with(|| self.vertex1.cmp(&other.vertex1))
            .then_with(|| self.vertex2.cmp(&other.vertex2))
    }
}

impl<V: Ord> PartialOrd for WeightedEdge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
