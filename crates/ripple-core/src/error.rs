//! Traversal error types.

use std::error::Error;
use std::fmt;

use crate::id::NodeId;

/// Errors from a BFS run.
///
/// Double-claim races on the visit flags are not errors — they are the
/// expected, correctly-handled common case, resolved by the atomic
/// claim primitive's return value. The traversal itself is total; the
/// only failure modes are bad arguments and undersized reused buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BfsError {
    /// The source node is outside the graph's ID range.
    InvalidSource {
        /// The offending source node.
        source: NodeId,
        /// Number of nodes in the graph (valid IDs are `0..node_count`).
        node_count: usize,
    },
    /// A reused buffer is too small for this level's output.
    ///
    /// Fatal for the run, never retried: the caller must either raise
    /// the workspace bounds or switch to the allocating variant.
    CapacityExceeded {
        /// Number of slots this level needs.
        requested: usize,
        /// Capacity of the undersized buffer.
        capacity: usize,
    },
}

impl fmt::Display for BfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSource { source, node_count } => {
                write!(
                    f,
                    "source node {source} out of range (graph has {node_count} nodes)"
                )
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "workspace capacity exceeded: requested {requested} slots, capacity {capacity}"
                )
            }
        }
    }
}

impl Error for BfsError {}
