//! Level-synchronous parallel BFS engine.
//!
//! Computes single-source shortest-path distances (in edge count) over
//! graphs from `ripple-graph` using bulk-synchronous frontier expansion:
//! within each level, degree computation, an exclusive prefix scan,
//! neighbour claiming, and frontier compaction run as strictly ordered
//! data-parallel phases on the rayon pool, each phase a fork-join
//! barrier.
//!
//! Two variants share the expansion code:
//!
//! - **Allocating** ([`par_bfs`]): fresh scratch and frontier buffers
//!   every level. No tuning required, no capacity limits.
//! - **Reused** ([`par_bfs_reused`]): all per-level buffers live in a
//!   caller-owned [`LevelWorkspace`] and are reset, not reallocated,
//!   across levels and runs. Undersized workspaces fail with
//!   [`BfsError::CapacityExceeded`](ripple_core::BfsError) — bounds are
//!   never silently truncated.
//!
//! The only genuinely racy shared state is the [`VisitSet`]; every
//! other buffer is partitioned into disjoint `&mut` chunks at the
//! prefix-scan offsets, so exclusive write ranges are enforced by the
//! borrow checker rather than by discipline.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bfs;
pub mod config;
pub mod scan;
pub mod seq;
pub mod visit;
pub mod workspace;

mod chunk;
mod frontier;

pub use bfs::{bfs, par_bfs, par_bfs_reused};
pub use config::{BfsConfig, Mode};
pub use scan::exclusive_scan;
pub use seq::seq_bfs;
pub use visit::VisitSet;
pub use workspace::{LevelWorkspace, WorkspaceCapacity};
