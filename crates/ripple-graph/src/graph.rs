//! The adjacency-list graph consumed by traversals.

use ripple_core::NodeId;
use smallvec::SmallVec;

use crate::error::GraphError;

/// An adjacency row. Inline capacity 6 covers the cube grid's maximum
/// degree without heap allocation; denser test graphs spill transparently.
pub type AdjacencyRow = SmallVec<[NodeId; 6]>;

/// Immutable unweighted directed graph over dense node IDs.
///
/// Node `i`'s neighbours are `adjacency[i]`, in construction order.
/// The graph is read-only after [`Graph::from_lists`] (or
/// [`CubeGrid::build`](crate::CubeGrid::build)) returns, so traversal
/// workers share it by plain reference.
#[derive(Clone, Debug)]
pub struct Graph {
    adjacency: Vec<AdjacencyRow>,
}

impl Graph {
    /// Build a graph from per-node neighbour lists.
    ///
    /// Returns `Err(GraphError::TooManyNodes)` if the node count does
    /// not fit the dense `u32` ID range (`u32::MAX` is reserved for the
    /// [`NodeId::NONE`] sentinel), or
    /// `Err(GraphError::NeighbourOutOfRange)` if any list names a node
    /// outside `0..node_count`.
    pub fn from_lists(lists: Vec<Vec<u32>>) -> Result<Self, GraphError> {
        let node_count = lists.len();
        if node_count >= u32::MAX as usize {
            return Err(GraphError::TooManyNodes {
                requested: node_count as u64,
            });
        }
        let mut adjacency = Vec::with_capacity(node_count);
        for (i, list) in lists.into_iter().enumerate() {
            let mut row = AdjacencyRow::with_capacity(list.len());
            for v in list {
                if v as usize >= node_count {
                    return Err(GraphError::NeighbourOutOfRange {
                        node: NodeId(i as u32),
                        neighbour: NodeId(v),
                        node_count,
                    });
                }
                row.push(NodeId(v));
            }
            adjacency.push(row);
        }
        Ok(Self { adjacency })
    }

    /// Construct from pre-validated rows. The caller guarantees every
    /// neighbour ID is in range; used by the grid builder, which emits
    /// IDs from in-bounds coordinates by construction.
    pub(crate) fn from_rows(adjacency: Vec<AdjacencyRow>) -> Self {
        debug_assert!(adjacency.len() < u32::MAX as usize);
        Self { adjacency }
    }

    /// Number of nodes. Valid IDs are `0..node_count`.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether `node` is a valid ID for this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.adjacency.len()
    }

    /// The neighbours of `node`, in construction order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range; callers validate sources once
    /// at the traversal entry point and IDs stored in the graph are
    /// in range by construction.
    pub fn neighbours(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node.index()]
    }

    /// Out-degree of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range (see [`Graph::neighbours`]).
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.adjacency[node.index()].len()
    }

    /// Total number of directed edges (sum of out-degrees).
    ///
    /// An upper bound on any level's scratch requirement: each node
    /// joins at most one frontier, so no level can need more scratch
    /// slots than there are edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|row| row.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lists_small_cycle() {
        let g = Graph::from_lists(vec![vec![1], vec![2], vec![0]]).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbours(NodeId(0)), &[NodeId(1)]);
        assert_eq!(g.out_degree(NodeId(2)), 1);
    }

    #[test]
    fn from_lists_rejects_out_of_range_neighbour() {
        let result = Graph::from_lists(vec![vec![1], vec![5]]);
        assert!(matches!(
            result,
            Err(GraphError::NeighbourOutOfRange {
                node: NodeId(1),
                neighbour: NodeId(5),
                node_count: 2,
            })
        ));
    }

    #[test]
    fn empty_graph() {
        let g = Graph::from_lists(Vec::new()).unwrap();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains(NodeId(0)));
    }

    #[test]
    fn isolated_nodes_have_no_neighbours() {
        let g = Graph::from_lists(vec![vec![], vec![], vec![]]).unwrap();
        assert_eq!(g.node_count(), 3);
        assert!(g.neighbours(NodeId(1)).is_empty());
    }

    #[test]
    fn contains_checks_range() {
        let g = Graph::from_lists(vec![vec![], vec![]]).unwrap();
        assert!(g.contains(NodeId(1)));
        assert!(!g.contains(NodeId(2)));
        assert!(!g.contains(NodeId::NONE));
    }
}
