//! Benchmark profiles for the Ripple workspace.
//!
//! Pre-built grid sizes shared by the criterion benches:
//!
//! - [`reference_grid`]: n = 60 (226,981 nodes) — large enough that the
//!   parallel variants pull ahead of the sequential baseline, small
//!   enough for routine runs.
//! - [`stress_grid`]: n = 100 (1,030,301 nodes) — allocator-pressure
//!   territory where the reused variant earns its keep.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ripple_graph::CubeGrid;

/// Reference benchmark grid: 61³ = 226,981 nodes.
pub fn reference_grid() -> CubeGrid {
    CubeGrid::new(60).expect("reference grid size is valid")
}

/// Stress benchmark grid: 101³ = 1,030,301 nodes.
pub fn stress_grid() -> CubeGrid {
    CubeGrid::new(100).expect("stress grid size is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_sizes() {
        assert_eq!(reference_grid().node_count(), 226_981);
        assert_eq!(stress_grid().node_count(), 1_030_301);
    }
}
