//! Implicit 3D cube grid with 6-connected neighbourhood.
//!
//! The grid is a cube of side length `n + 1`: coordinates `(x, y, z)`
//! with each axis in `0..=n`. Node IDs are derived from coordinates by
//! `(n+1)²·x + (n+1)·y + z`, which makes the graph implicit — adjacency
//! is pure arithmetic until [`CubeGrid::build`] materialises it.
//!
//! With the source at the origin, the BFS distance of `(x, y, z)` is
//! exactly `x + y + z` (Manhattan distance), which the test suite uses
//! as an end-to-end closed-form check.

use ripple_core::NodeId;
use smallvec::SmallVec;

use crate::error::GraphError;
use crate::graph::{AdjacencyRow, Graph};

/// The 6 axis-aligned neighbour offsets, z-axis first.
///
/// The order is part of the grid's deterministic contract: adjacency
/// rows list neighbours in this order.
const AXIS_OFFSETS: [(i64, i64, i64); 6] = [
    (0, 0, 1),
    (0, 0, -1),
    (0, 1, 0),
    (0, -1, 0),
    (1, 0, 0),
    (-1, 0, 0),
];

/// Descriptor of an implicit 3D cube grid graph.
///
/// Construction validates the size once; afterwards the coordinate↔ID
/// mapping and neighbour enumeration are infallible arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeGrid {
    /// Maximum coordinate per axis; the side length is `n + 1`.
    n: u32,
    /// Cached `n + 1`.
    side: u32,
    /// Cached `(n + 1)³`.
    node_count: usize,
}

impl CubeGrid {
    /// Largest accepted `n`: `(n+1)³` must stay below `u32::MAX`, since
    /// node IDs are dense `u32` values and `u32::MAX` is reserved for
    /// the [`NodeId::NONE`] sentinel.
    pub const MAX_N: u32 = 1624;

    /// Create a grid with coordinates `0..=n` on each axis.
    ///
    /// Returns `Err(GraphError::DimensionTooLarge)` if `n` exceeds
    /// [`CubeGrid::MAX_N`].
    pub fn new(n: u32) -> Result<Self, GraphError> {
        if n > Self::MAX_N {
            return Err(GraphError::DimensionTooLarge {
                value: n,
                max: Self::MAX_N,
            });
        }
        let side = n + 1;
        let node_count = (side as u64).pow(3);
        debug_assert!(node_count < u32::MAX as u64);
        Ok(Self {
            n,
            side,
            node_count: node_count as usize,
        })
    }

    /// Maximum coordinate per axis.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Side length (`n + 1` cells per axis).
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Total number of nodes, `(n + 1)³`.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Map grid coordinates to the node ID `(n+1)²·x + (n+1)·y + z`.
    ///
    /// Coordinates must each be in `0..=n`; checked in debug builds.
    pub fn node_id(&self, x: u32, y: u32, z: u32) -> NodeId {
        debug_assert!(
            x <= self.n && y <= self.n && z <= self.n,
            "coordinate ({x}, {y}, {z}) outside 0..={}",
            self.n
        );
        NodeId(self.side * self.side * x + self.side * y + z)
    }

    /// Invert [`CubeGrid::node_id`]: recover `(x, y, z)` from an ID.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid ID for this grid.
    pub fn coordinates(&self, node: NodeId) -> (u32, u32, u32) {
        assert!(
            node.index() < self.node_count,
            "node {node} outside grid with {} nodes",
            self.node_count
        );
        let id = node.0;
        let x = id / (self.side * self.side);
        let y = (id / self.side) % self.side;
        let z = id % self.side;
        (x, y, z)
    }

    /// Enumerate the axis-aligned neighbours of `(x, y, z)`.
    ///
    /// Each of the six offsets is kept only if its own axis stays in
    /// `0..=n` — interior cells have 6 neighbours, faces 5, edges 4,
    /// corners 3. Deterministic order: ±z, then ±y, then ±x.
    pub fn neighbours(&self, x: u32, y: u32, z: u32) -> SmallVec<[NodeId; 6]> {
        let n = self.n as i64;
        let mut result = SmallVec::new();
        for (dx, dy, dz) in AXIS_OFFSETS {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            let nz = z as i64 + dz;
            if nx < 0 || nx > n || ny < 0 || ny > n || nz < 0 || nz > n {
                continue;
            }
            result.push(self.node_id(nx as u32, ny as u32, nz as u32));
        }
        result
    }

    /// Materialise the adjacency-list [`Graph`] for this grid.
    ///
    /// Rows are emitted in node-ID order, so `graph.neighbours(id)`
    /// agrees with [`CubeGrid::neighbours`] of the corresponding
    /// coordinates. Deterministic: two calls yield identical graphs.
    pub fn build(&self) -> Graph {
        let mut rows: Vec<AdjacencyRow> = Vec::with_capacity(self.node_count);
        for x in 0..self.side {
            for y in 0..self.side {
                for z in 0..self.side {
                    debug_assert_eq!(self.node_id(x, y, z).index(), rows.len());
                    rows.push(self.neighbours(x, y, z));
                }
            }
        }
        Graph::from_rows(rows)
    }
}
