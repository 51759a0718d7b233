//! Caller-owned reusable buffers for the allocation-minimising variant.
//!
//! [`LevelWorkspace`] holds every per-level buffer the reused variant
//! touches — visit flags, frontier, degree/offset array, scratch, and
//! survivor flags — as fixed-capacity allocations that are reset, not
//! reallocated, across levels and runs. The workspace is an explicit
//! argument rather than hidden static storage, so independent
//! traversals (and parallel tests) each own their buffers and cannot
//! cross-contaminate.
//!
//! Reuse invariant: any slot a level reads must have been cleared since
//! its last use. The drivers clear exactly the scratch prefix a level
//! will read, and [`LevelWorkspace::begin_run`] resets the visit flags
//! a graph uses; everything else is fully overwritten before being read.

use ripple_core::{BfsError, NodeId};
use ripple_graph::Graph;

use crate::visit::VisitSet;

/// Explicit capacity bounds for a [`LevelWorkspace`].
///
/// Exceeding any bound mid-run fails the run with
/// [`BfsError::CapacityExceeded`]; nothing is ever silently truncated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkspaceCapacity {
    /// Largest node count of any graph the workspace will traverse.
    pub max_nodes: usize,
    /// Largest frontier any level may produce.
    pub max_frontier: usize,
    /// Largest scratch requirement of any level: the sum of
    /// out-degrees across one frontier.
    pub max_scratch: usize,
}

/// Reusable fixed-capacity buffers for [`par_bfs_reused`](crate::par_bfs_reused).
pub struct LevelWorkspace {
    /// Per-node visit flags, reset at the start of each run.
    pub(crate) visited: VisitSet,
    /// Current frontier; a level's live prefix is tracked by the driver.
    pub(crate) frontier: Vec<NodeId>,
    /// Per-frontier-slot degrees, scanned in place into write offsets.
    pub(crate) degrees: Vec<usize>,
    /// Sparse next-frontier buffer; cleared to the sentinel per level.
    pub(crate) scratch: Vec<NodeId>,
    /// Survivor flags, scanned in place into destination indices.
    pub(crate) flags: Vec<usize>,
}

impl LevelWorkspace {
    /// Allocate a workspace with the given explicit bounds.
    pub fn with_capacity(capacity: WorkspaceCapacity) -> Self {
        Self {
            visited: VisitSet::new(capacity.max_nodes),
            frontier: vec![NodeId::NONE; capacity.max_frontier],
            degrees: vec![0; capacity.max_frontier],
            scratch: vec![NodeId::NONE; capacity.max_scratch],
            flags: vec![0; capacity.max_scratch],
        }
    }

    /// Allocate a workspace whose bounds are sufficient for every
    /// traversal of `graph`, from any source.
    ///
    /// A frontier never exceeds the node count (each node joins at most
    /// one frontier) and a level's scratch requirement never exceeds
    /// the edge count, so runs over `graph` cannot hit
    /// [`BfsError::CapacityExceeded`].
    pub fn for_graph(graph: &Graph) -> Self {
        Self::with_capacity(WorkspaceCapacity {
            max_nodes: graph.node_count(),
            max_frontier: graph.node_count().max(1),
            max_scratch: graph.edge_count(),
        })
    }

    /// Node capacity (size of the visit-flag array).
    pub fn max_nodes(&self) -> usize {
        self.visited.len()
    }

    /// Frontier capacity.
    pub fn max_frontier(&self) -> usize {
        self.frontier.len()
    }

    /// Scratch capacity.
    pub fn max_scratch(&self) -> usize {
        self.scratch.len()
    }

    /// Total memory held by the backing buffers, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.visited.len() * std::mem::size_of::<bool>()
            + self.frontier.len() * std::mem::size_of::<NodeId>()
            + self.degrees.len() * std::mem::size_of::<usize>()
            + self.scratch.len() * std::mem::size_of::<NodeId>()
            + self.flags.len() * std::mem::size_of::<usize>()
    }

    /// Check per-run bounds and reset the visit flags `graph`'s nodes
    /// occupy. Called by the driver before the first level.
    pub(crate) fn begin_run(
        &mut self,
        node_count: usize,
        min_len: usize,
    ) -> Result<(), BfsError> {
        if node_count > self.visited.len() {
            return Err(BfsError::CapacityExceeded {
                requested: node_count,
                capacity: self.visited.len(),
            });
        }
        if self.frontier.is_empty() {
            return Err(BfsError::CapacityExceeded {
                requested: 1,
                capacity: 0,
            });
        }
        self.visited.reset(node_count, min_len);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_capacity_sizes_every_buffer() {
        let ws = LevelWorkspace::with_capacity(WorkspaceCapacity {
            max_nodes: 10,
            max_frontier: 4,
            max_scratch: 12,
        });
        assert_eq!(ws.max_nodes(), 10);
        assert_eq!(ws.max_frontier(), 4);
        assert_eq!(ws.max_scratch(), 12);
        assert!(ws.memory_bytes() > 0);
    }

    #[test]
    fn for_graph_derives_sufficient_bounds() {
        let graph = Graph::from_lists(vec![vec![1, 2], vec![2], vec![]]).unwrap();
        let ws = LevelWorkspace::for_graph(&graph);
        assert_eq!(ws.max_nodes(), 3);
        assert_eq!(ws.max_frontier(), 3);
        assert_eq!(ws.max_scratch(), 3);
    }

    #[test]
    fn begin_run_rejects_oversized_graph() {
        let mut ws = LevelWorkspace::with_capacity(WorkspaceCapacity {
            max_nodes: 2,
            max_frontier: 2,
            max_scratch: 2,
        });
        let err = ws.begin_run(5, 1).unwrap_err();
        assert_eq!(
            err,
            BfsError::CapacityExceeded {
                requested: 5,
                capacity: 2,
            }
        );
    }

    #[test]
    fn begin_run_rejects_zero_frontier_capacity() {
        let mut ws = LevelWorkspace::with_capacity(WorkspaceCapacity {
            max_nodes: 4,
            max_frontier: 0,
            max_scratch: 4,
        });
        assert!(matches!(
            ws.begin_run(4, 1),
            Err(BfsError::CapacityExceeded {
                requested: 1,
                capacity: 0,
            })
        ));
    }

    #[test]
    fn begin_run_resets_visit_flags() {
        let mut ws = LevelWorkspace::with_capacity(WorkspaceCapacity {
            max_nodes: 3,
            max_frontier: 3,
            max_scratch: 3,
        });
        assert!(ws.visited.claim(NodeId(1)));
        ws.begin_run(3, 1).unwrap();
        assert!(!ws.visited.is_visited(NodeId(1)));
    }
}
