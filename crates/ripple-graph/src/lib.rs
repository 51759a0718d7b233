//! Graph construction for Ripple traversals.
//!
//! This crate defines the [`Graph`] adjacency list consumed by the
//! traversal engine, along with the [`CubeGrid`] descriptor that
//! materialises the implicit 3D grid graph from coordinate arithmetic.
//!
//! A [`Graph`] is immutable once built and is shared read-only across
//! all parallel workers for the duration of a traversal — no
//! synchronisation is needed because it is never mutated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cube;
pub mod error;
pub mod graph;

pub use cube::CubeGrid;
pub use error::GraphError;
pub use graph::Graph;
