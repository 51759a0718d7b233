//! Error types for graph construction.

use ripple_core::NodeId;
use std::error::Error;
use std::fmt;

/// Errors arising from graph or grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A grid dimension exceeds the representable range.
    DimensionTooLarge {
        /// The requested side length `n`.
        value: u32,
        /// The largest accepted side length.
        max: u32,
    },
    /// The total node count does not fit the dense `u32` ID range.
    ///
    /// `u32::MAX` itself is excluded: it is reserved for the
    /// [`NodeId::NONE`] sentinel.
    TooManyNodes {
        /// The requested node count.
        requested: u64,
    },
    /// An adjacency list names a neighbour outside the ID range.
    NeighbourOutOfRange {
        /// The node whose list is invalid.
        node: NodeId,
        /// The offending neighbour ID.
        neighbour: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid side length {value} too large (max {max})")
            }
            Self::TooManyNodes { requested } => {
                write!(
                    f,
                    "node count {requested} exceeds the dense u32 ID range"
                )
            }
            Self::NeighbourOutOfRange {
                node,
                neighbour,
                node_count,
            } => {
                write!(
                    f,
                    "node {node} lists neighbour {neighbour} outside the graph ({node_count} nodes)"
                )
            }
        }
    }
}

impl Error for GraphError {}
