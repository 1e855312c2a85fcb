//! Minimum spanning trees via Kruskal's algorithm.
//!
//! Edges are ranked by weight, fully sorted through the bounded top-K
//! selector and then scanned in ascending order. A [`DisjointSet`] over the
//! vertex positions rejects every edge whose endpoints are already connected.
//! Disconnected graphs yield a minimum spanning forest rather than an error;
//! callers that require a tree can enforce it with
//! [`SpanningForest::into_tree`].

use std::{cmp::Ordering, hash::Hash};

use tracing::{debug, instrument, warn};

use crate::{
    disjoint_set::DisjointSet,
    error::MstError,
    graph::{Edge, Graph},
    select::select_smallest,
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<'g, E> {
    edges: Vec<&'g E>,
    total_weight: f64,
    component_count: usize,
}

impl<'g, E> SpanningForest<'g, E> {
    /// Returns the chosen edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &[&'g E] { self.edges.as_slice() }

    /// Returns the summed weight of the chosen edges.
    ///
    /// Weights come from the lookup used for the computation, so a forest
    /// built with temporary weights reports their total.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest connects every vertex.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count <= 1
    }

    /// Consumes the forest and returns its edges, requiring a single tree.
    ///
    /// # Errors
    /// Returns [`MstError::Disconnected`] when the graph had more than one
    /// connected component.
    pub fn into_tree(self) -> Result<Vec<&'g E>, MstError> {
        if self.is_tree() {
            Ok(self.edges)
        } else {
            Err(MstError::Disconnected {
                components: self.component_count,
            })
        }
    }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<&'g E> {
        self.edges
    }
}

/// An edge paired with the weight it is ranked by.
struct RankedEdge<'g, E> {
    weight: f64,
    edge: &'g E,
    position: usize,
}

impl<E: Ord> Ord for RankedEdge<'_, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.edge.cmp(other.edge))
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl<E: Ord> PartialOrd for RankedEdge<'_, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Ord> PartialEq for RankedEdge<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl<E: Ord> Eq for RankedEdge<'_, E> {}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<V> + Ord,
{
    /// Computes a minimum spanning forest using each edge's own weight.
    ///
    /// Ties between equal weights follow the edges' [`Ord`] implementation,
    /// so the result is deterministic.
    ///
    /// # Errors
    /// Only fails if the union-find bookkeeping reports an inconsistency,
    /// which indicates a logic error.
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
    /// let tree = graph.minimum_spanning_tree()?;
    /// assert!(tree.is_tree());
    /// assert_eq!(tree.total_weight(), 3.0);
    /// let sequences: Vec<u64> = tree.edges().iter().map(|edge| edge.sequence()).collect();
    /// assert_eq!(sequences, vec![0, 1]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn minimum_spanning_tree(&self) -> Result<SpanningForest<'_, E>, MstError> {
        self.minimum_spanning_tree_with(|_, edge| edge.weight())
    }

    /// Computes a minimum spanning forest ranking edges by `weight_of`.
    ///
    /// `weight_of` receives each edge with its construction position and
    /// returns the weight to rank it by. The graph and its edges are left
    /// untouched, so temporary reweighting needs no restore step.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidWeight`] when `weight_of` yields a negative
    /// or non-finite weight.
    #[instrument(
        name = "graph.minimum_spanning_tree",
        level = "debug",
        err,
        skip_all,
        fields(vertices = self.vertex_count(), edges = self.edge_count()),
    )]
    pub fn minimum_spanning_tree_with<F>(
        &self,
        weight_of: F,
    ) -> Result<SpanningForest<'_, E>, MstError>
    where
        F: Fn(usize, &E) -> f64,
    {
        let ranked = self.rank_edges(weight_of)?;
        let ordered = select_smallest(ranked.len(), ranked);

        let vertex_count = self.vertex_count();
        let mut components = DisjointSet::with_capacity(vertex_count);
        for position in 0..vertex_count {
            components.make_set(position)?;
        }

        let tree_size = vertex_count.saturating_sub(1);
        let mut accepted = Vec::with_capacity(tree_size);
        let mut total_weight = 0.0;
        for candidate in ordered {
            if accepted.len() == tree_size {
                break;
            }
            let (first, second) = self.endpoint_positions(candidate.position);
            if components.find_set(&first)? == components.find_set(&second)? {
                record_rejected_edge();
                continue;
            }
            components.union(&first, &second)?;
            total_weight += candidate.weight;
            accepted.push(candidate.edge);
        }

        let forest = SpanningForest {
            edges: accepted,
            total_weight,
            component_count: components.set_count(),
        };
        if !forest.is_tree() {
            warn!(
                components = forest.component_count,
                "graph is disconnected, returning a spanning forest"
            );
        }
        debug!(
            edges = forest.edges.len(),
            total_weight = forest.total_weight,
            "spanning forest computed"
        );
        Ok(forest)
    }

    fn rank_edges<F>(&self, weight_of: F) -> Result<Vec<RankedEdge<'_, E>>, MstError>
    where
        F: Fn(usize, &E) -> f64,
    {
        self.edges()
            .iter()
            .enumerate()
            .map(|(position, edge)| {
                let weight = weight_of(position, edge);
                if !weight.is_finite() || weight < 0.0 {
                    return Err(MstError::InvalidWeight {
                        edge: position,
                        weight,
                    });
                }
                Ok(RankedEdge {
                    weight,
                    edge,
                    position,
                })
            })
            .collect()
    }
}

#[cfg(feature = "metrics")]
fn record_rejected_edge() {
    metrics::counter!("mst_edges_rejected").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_rejected_edge() {}

#[cfg(test)]
mod property;
