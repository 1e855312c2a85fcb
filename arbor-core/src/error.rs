//! Error types for the arbor core library.
//!
//! Each component reports failures through its own enum. Every enum exposes a
//! stable machine-readable code so callers can log or count failures without
//! matching on message text.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element was already registered with `make_set`.
    #[error("element is already registered (handle {handle})")]
    DuplicateElement {
        /// Handle assigned when the element was first registered.
        handle: usize,
    },
    /// The element was never registered with `make_set`.
    #[error("element is not registered in the disjoint set")]
    UnknownElement,
    /// Both elements already belong to the same group.
    #[error("elements already share representative {representative}")]
    SameGroup {
        /// Handle of the shared representative.
        representative: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element was already registered.
        DuplicateElement => DuplicateElement { .. } => "DISJOINT_SET_DUPLICATE_ELEMENT",
        /// The element was never registered.
        UnknownElement => UnknownElement => "DISJOINT_SET_UNKNOWN_ELEMENT",
        /// Both elements already belong to the same group.
        SameGroup => SameGroup { .. } => "DISJOINT_SET_SAME_GROUP",
    }
}

/// An error produced while constructing a [`crate::Graph`].
///
/// Edge and vertex positions refer to the order in which the caller supplied
/// them.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The same vertex was supplied more than once.
    #[error("vertex {index} duplicates an earlier vertex")]
    DuplicateVertex {
        /// Position of the repeated vertex.
        index: usize,
    },
    /// An edge carried a weight below zero.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// Position of the offending edge.
        edge: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} has non-finite weight")]
    NonFiniteWeight {
        /// Position of the offending edge.
        edge: usize,
    },
    /// An edge referenced a vertex that is not part of the vertex collection.
    #[error("edge {edge} references a vertex outside the graph")]
    UnknownEndpoint {
        /// Position of the offending edge.
        edge: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The same vertex was supplied more than once.
        DuplicateVertex => DuplicateVertex { .. } => "INVALID_GRAPH_DUPLICATE_VERTEX",
        /// An edge carried a weight below zero.
        NegativeWeight => NegativeWeight { .. } => "INVALID_GRAPH_NEGATIVE_WEIGHT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "INVALID_GRAPH_NON_FINITE_WEIGHT",
        /// An edge referenced a vertex outside the graph.
        UnknownEndpoint => UnknownEndpoint { .. } => "INVALID_GRAPH_UNKNOWN_ENDPOINT",
    }
}

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// A weight lookup produced a negative or non-finite weight.
    #[error("weight lookup returned {weight} for edge {edge}")]
    InvalidWeight {
        /// Position of the edge in the graph.
        edge: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// A spanning tree was required but the graph is disconnected.
    #[error("graph is disconnected ({components} components)")]
    Disconnected {
        /// Number of connected components in the spanning forest.
        components: usize,
    },
    /// The union-find bookkeeping rejected an operation.
    #[error(transparent)]
    DisjointSet(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// A weight lookup produced a negative or non-finite weight.
        InvalidWeight => InvalidWeight { .. } => "MST_INVALID_WEIGHT",
        /// A spanning tree was required but the graph is disconnected.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// The union-find bookkeeping rejected an operation.
        DisjointSet => DisjointSet { .. } => "MST_DISJOINT_SET",
    }
}

impl MstError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when union-find bookkeeping failed.
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::DisjointSet(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Which end of a path query an error refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Endpoint {
    /// The vertex the path leaves from.
    Start,
    /// The vertex the path arrives at.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors returned by shortest-path queries.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum PathError {
    /// The start or end vertex is not part of the graph.
    #[error("{endpoint} vertex is not part of the graph")]
    UnknownVertex {
        /// Which endpoint was missing.
        endpoint: Endpoint,
    },
    /// The end vertex cannot be reached from the start vertex.
    #[error("no path exists between the requested vertices")]
    NoPath,
}

define_error_codes! {
    /// Stable codes describing [`PathError`] variants.
    enum PathErrorCode for PathError {
        /// The start or end vertex is not part of the graph.
        UnknownVertex => UnknownVertex { .. } => "PATH_UNKNOWN_VERTEX",
        /// The end vertex cannot be reached from the start vertex.
        NoPath => NoPath => "PATH_NO_PATH",
    }
}

/// Errors returned while carving or solving a [`crate::Maze`].
#[cfg(feature = "maze")]
#[cfg_attr(docsrs, doc(cfg(feature = "maze")))]
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MazeError {
    /// The maze must have at least one row and one column.
    #[error("maze dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// Random wall weights need a non-empty range.
    #[error("max_weight must be at least 1")]
    ZeroWeightRange,
    /// A room coordinate lies outside the maze.
    #[error("room ({row}, {column}) lies outside the maze")]
    UnknownRoom {
        /// Row of the rejected room.
        row: usize,
        /// Column of the rejected room.
        column: usize,
    },
    /// Building the room graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Choosing walls to remove failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// Solving the maze failed.
    #[error(transparent)]
    Path(#[from] PathError),
}

#[cfg(feature = "maze")]
define_error_codes! {
    /// Stable codes describing [`MazeError`] variants.
    enum MazeErrorCode for MazeError {
        /// The maze must have at least one row and one column.
        ZeroDimension => ZeroDimension { .. } => "MAZE_ZERO_DIMENSION",
        /// Random wall weights need a non-empty range.
        ZeroWeightRange => ZeroWeightRange => "MAZE_ZERO_WEIGHT_RANGE",
        /// A room coordinate lies outside the maze.
        UnknownRoom => UnknownRoom { .. } => "MAZE_UNKNOWN_ROOM",
        /// Building the room graph failed.
        Graph => Graph { .. } => "MAZE_GRAPH",
        /// Choosing walls to remove failed.
        Mst => Mst { .. } => "MAZE_MST",
        /// Solving the maze failed.
        Path => Path { .. } => "MAZE_PATH",
    }
}
