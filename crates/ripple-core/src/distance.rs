//! Per-node distance storage.

use crate::id::NodeId;

/// Dense table of per-node BFS distances, in edge count from the source.
///
/// Produced by a single traversal and immutable afterwards. Each entry
/// is written at most once during the run — by the unique worker that
/// won the visit race for that node — and nodes the traversal never
/// reached keep the [`DistanceTable::UNSET`] sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceTable {
    dist: Vec<u32>,
}

impl DistanceTable {
    /// Sentinel for "no finite distance": the node was not reached.
    pub const UNSET: u32 = u32::MAX;

    /// Wrap a raw distance vector produced by a traversal.
    ///
    /// Entries equal to [`DistanceTable::UNSET`] are reported as
    /// unreachable by [`get`](DistanceTable::get).
    pub fn from_raw(dist: Vec<u32>) -> Self {
        Self { dist }
    }

    /// Number of nodes covered by the table.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Whether the table covers zero nodes.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Distance of `node` from the source, or `None` if the node was
    /// unreachable or out of range.
    pub fn get(&self, node: NodeId) -> Option<u32> {
        match self.dist.get(node.index()) {
            Some(&d) if d != Self::UNSET => Some(d),
            _ => None,
        }
    }

    /// Whether `node` was reached by the traversal.
    pub fn is_reached(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Number of nodes with a finite distance.
    pub fn reached_count(&self) -> usize {
        self.dist.iter().filter(|&&d| d != Self::UNSET).count()
    }

    /// The raw distances, [`DistanceTable::UNSET`] sentinels included.
    pub fn as_slice(&self) -> &[u32] {
        &self.dist
    }
}
