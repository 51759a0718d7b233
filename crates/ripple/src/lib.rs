//! Ripple: level-synchronous parallel breadth-first search over implicit grid graphs.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Ripple sub-crates. For most users, adding `ripple` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! // A 3×3×3 cube grid (n = 2) with the source at the origin corner.
//! let grid = CubeGrid::new(2).unwrap();
//! let graph = grid.build();
//! let source = grid.node_id(0, 0, 0);
//!
//! let table = bfs(&graph, source, &BfsConfig::default()).unwrap();
//!
//! // On this grid, BFS distance is Manhattan distance from the origin.
//! assert_eq!(table.get(grid.node_id(2, 2, 2)), Some(6));
//! assert_eq!(table.get(grid.node_id(1, 1, 1)), Some(3));
//! assert_eq!(table.reached_count(), 27);
//! ```
//!
//! Repeated traversals that want to avoid per-level allocation hold a
//! [`LevelWorkspace`](engine::LevelWorkspace) and call
//! [`par_bfs_reused`](engine::par_bfs_reused):
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! let grid = CubeGrid::new(3).unwrap();
//! let graph = grid.build();
//! let mut workspace = LevelWorkspace::for_graph(&graph);
//!
//! let config = BfsConfig { mode: Mode::Reused, block: 100 };
//! for corner in [grid.node_id(0, 0, 0), grid.node_id(3, 3, 3)] {
//!     let table = par_bfs_reused(&graph, corner, &config, &mut workspace).unwrap();
//!     assert_eq!(table.reached_count(), graph.node_count());
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | `NodeId`, `DistanceTable`, `BfsError` |
//! | [`graph`] | `ripple-graph` | Adjacency-list `Graph`, `CubeGrid` |
//! | [`engine`] | `ripple-engine` | Traversal entry points, `VisitSet`, workspace, scan |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`ripple-core`).
///
/// Contains [`types::NodeId`], [`types::DistanceTable`], and the
/// traversal error type [`types::BfsError`].
pub use ripple_core as types;

/// Graph construction (`ripple-graph`).
///
/// The adjacency-list [`graph::Graph`] consumed by traversals and the
/// implicit [`graph::CubeGrid`] that materialises 3D grid graphs.
pub use ripple_graph as graph;

/// Traversal engine (`ripple-engine`).
///
/// [`engine::bfs`] and the two variants [`engine::par_bfs`] /
/// [`engine::par_bfs_reused`], the sequential reference
/// [`engine::seq_bfs`], and the supporting primitives
/// ([`engine::VisitSet`], [`engine::exclusive_scan`],
/// [`engine::LevelWorkspace`]).
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    pub use ripple_core::{BfsError, DistanceTable, NodeId};
    pub use ripple_engine::{
        bfs, par_bfs, par_bfs_reused, seq_bfs, BfsConfig, LevelWorkspace, Mode,
        WorkspaceCapacity,
    };
    pub use ripple_graph::{CubeGrid, Graph, GraphError};
}
