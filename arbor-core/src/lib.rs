//! Arbor core library.
//!
//! Graph primitives for undirected weighted graphs: a union-find structure,
//! a bounded top-K selector, an immutable [`Graph`], Kruskal minimum spanning
//! forests and Dijkstra shortest paths. The optional `maze` feature carves
//! random mazes on top of them.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
#[cfg(feature = "maze")]
#[cfg_attr(docsrs, doc(cfg(feature = "maze")))]
mod maze;
mod mst;
mod select;
mod shortest_path;
#[cfg(test)]
mod test_utils;

#[cfg(feature = "maze")]
pub use crate::{
    error::{MazeError, MazeErrorCode},
    maze::{Maze, MazeParams, Room},
};
pub use crate::{
    disjoint_set::{DisjointSet, SetId},
    error::{
        DisjointSetError, DisjointSetErrorCode, Endpoint, GraphError, GraphErrorCode, MstError,
        MstErrorCode, PathError, PathErrorCode,
    },
    graph::{Edge, Graph, WeightedEdge},
    mst::SpanningForest,
    select::{select_largest, select_smallest},
    shortest_path::ShortestPath,
};
