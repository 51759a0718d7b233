//! Test utilities and graph generators for Ripple development.
//!
//! Deterministic graph families used across the workspace's tests and
//! benches, plus the cube-grid closed-form validator. Generators that
//! take a seed use ChaCha8 so the same seed always produces the same
//! graph, on any platform.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand::rngs::ChaCha8Rng;
use ripple_core::{DistanceTable, NodeId};
use ripple_graph::{CubeGrid, Graph};

/// Bidirectional chain `0 — 1 — … — len-1`; the deepest BFS possible
/// for its node count (len − 1 levels from an endpoint).
pub fn line_graph(len: usize) -> Graph {
    let lists = (0..len)
        .map(|i| {
            let mut row = Vec::with_capacity(2);
            if i > 0 {
                row.push((i - 1) as u32);
            }
            if i + 1 < len {
                row.push((i + 1) as u32);
            }
            row
        })
        .collect();
    Graph::from_lists(lists).expect("line graph is always valid")
}

/// Hub-and-spokes contention graph: node 0 is the hub, every spoke
/// points at it and it points at every spoke.
///
/// From any spoke, level 1 is the hub alone — with every worker's
/// claim racing on the same flag — and level 2 is all remaining
/// spokes at once.
pub fn hub_graph(spokes: usize) -> Graph {
    let mut lists = vec![(1..=spokes as u32).collect::<Vec<_>>()];
    lists.extend((0..spokes).map(|_| vec![0u32]));
    Graph::from_lists(lists).expect("hub graph is always valid")
}

/// Complete directed graph on `k` nodes: every node lists every other.
pub fn complete_graph(k: usize) -> Graph {
    let lists = (0..k as u32)
        .map(|i| (0..k as u32).filter(|&j| j != i).collect())
        .collect();
    Graph::from_lists(lists).expect("complete graph is always valid")
}

/// Seeded random directed graph: each node gets `out_degree` neighbours
/// drawn uniformly (duplicates allowed — BFS must tolerate parallel
/// edges anyway).
pub fn random_graph(nodes: usize, out_degree: usize, seed: u64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let lists = (0..nodes)
        .map(|_| {
            (0..out_degree)
                .map(|_| rng.random_range(0..nodes as u32))
                .collect()
        })
        .collect();
    Graph::from_lists(lists).expect("generated neighbours are in range")
}

/// Assert the cube grid's closed form: with the source at the origin,
/// every cell `(x, y, z)` sits at distance `x + y + z`, and nothing is
/// left unreached.
pub fn assert_cube_distances(grid: &CubeGrid, table: &DistanceTable) {
    assert_eq!(table.len(), grid.node_count());
    for x in 0..=grid.n() {
        for y in 0..=grid.n() {
            for z in 0..=grid.n() {
                let id = grid.node_id(x, y, z);
                assert_eq!(
                    table.get(id),
                    Some(x + y + z),
                    "distance of ({x}, {y}, {z}) should be {}",
                    x + y + z
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_graph_endpoints_have_degree_one() {
        let g = line_graph(5);
        assert_eq!(g.out_degree(NodeId(0)), 1);
        assert_eq!(g.out_degree(NodeId(2)), 2);
        assert_eq!(g.out_degree(NodeId(4)), 1);
    }

    #[test]
    fn hub_graph_shape() {
        let g = hub_graph(3);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.out_degree(NodeId(0)), 3);
        for spoke in 1..=3u32 {
            assert_eq!(g.neighbours(NodeId(spoke)), &[NodeId(0)]);
        }
    }

    #[test]
    fn complete_graph_degrees() {
        let g = complete_graph(4);
        assert_eq!(g.node_count(), 4);
        for i in 0..4u32 {
            assert_eq!(g.out_degree(NodeId(i)), 3);
        }
    }

    #[test]
    fn random_graph_is_deterministic_per_seed() {
        let a = random_graph(20, 3, 7);
        let b = random_graph(20, 3, 7);
        for i in 0..20u32 {
            assert_eq!(a.neighbours(NodeId(i)), b.neighbours(NodeId(i)));
        }
        let c = random_graph(20, 3, 8);
        let differs = (0..20u32)
            .any(|i| a.neighbours(NodeId(i)) != c.neighbours(NodeId(i)));
        assert!(differs, "different seeds should differ somewhere");
    }
}
