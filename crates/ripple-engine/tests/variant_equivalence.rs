//! Integration test: the two parallel variants and the sequential
//! reference must agree exactly — including unreached sentinels — on
//! grids, chains, and arbitrary random graphs.

use proptest::prelude::*;
use ripple_core::NodeId;
use ripple_engine::{
    bfs, par_bfs, par_bfs_reused, seq_bfs, BfsConfig, LevelWorkspace, Mode,
};
use ripple_graph::CubeGrid;
use ripple_test_utils::{assert_cube_distances, line_graph, random_graph};

fn config(mode: Mode, block: usize) -> BfsConfig {
    BfsConfig { mode, block }
}

// ── Cube-grid scenarios ──────────────────────────────────────────────

#[test]
fn cube_n2_scenario() {
    // 27 nodes, source at the origin corner.
    let grid = CubeGrid::new(2).unwrap();
    let graph = grid.build();
    let source = grid.node_id(0, 0, 0);

    for mode in [Mode::Allocating, Mode::Reused] {
        let table = bfs(&graph, source, &config(mode, 100)).unwrap();
        assert_eq!(table.get(grid.node_id(2, 2, 2)), Some(6));
        assert_eq!(table.get(grid.node_id(0, 0, 1)), Some(1));
        assert_eq!(table.get(grid.node_id(1, 1, 1)), Some(3));
        // Every node reachable: no unset entries.
        assert_eq!(table.reached_count(), 27);
        assert_cube_distances(&grid, &table);
    }
}

#[test]
fn cube_closed_form_various_sizes() {
    for n in [0, 1, 4, 7] {
        let grid = CubeGrid::new(n).unwrap();
        let graph = grid.build();
        let source = grid.node_id(0, 0, 0);

        let allocating = par_bfs(&graph, source, &config(Mode::Allocating, 100)).unwrap();
        assert_cube_distances(&grid, &allocating);

        let mut ws = LevelWorkspace::for_graph(&graph);
        let reused =
            par_bfs_reused(&graph, source, &config(Mode::Reused, 100), &mut ws).unwrap();
        assert_cube_distances(&grid, &reused);

        assert_eq!(allocating, reused, "variants disagree on n={n}");
    }
}

#[test]
fn cube_matches_sequential() {
    let grid = CubeGrid::new(5).unwrap();
    let graph = grid.build();
    let source = grid.node_id(2, 3, 1);

    let reference = seq_bfs(&graph, source).unwrap();
    let parallel = par_bfs(&graph, source, &BfsConfig::default()).unwrap();
    assert_eq!(parallel, reference);
}

// ── Deep and degenerate shapes ───────────────────────────────────────

#[test]
fn deep_chain_counts_every_level() {
    // 500 levels of frontier size 1: the level loop's worst case.
    let graph = line_graph(500);
    for block in [1, 3, 100] {
        let table = par_bfs(&graph, NodeId(0), &config(Mode::Allocating, block)).unwrap();
        for i in 0..500u32 {
            assert_eq!(table.get(NodeId(i)), Some(i), "block {block}");
        }
    }
}

#[test]
fn block_size_never_changes_results() {
    let graph = random_graph(200, 3, 99);
    let reference = seq_bfs(&graph, NodeId(0)).unwrap();
    for block in [1, 2, 7, 100, 10_000] {
        for mode in [Mode::Allocating, Mode::Reused] {
            let table = bfs(&graph, NodeId(0), &config(mode, block)).unwrap();
            assert_eq!(table, reference, "mode {mode:?}, block {block}");
        }
    }
}

// ── Random-graph equivalence ─────────────────────────────────────────

proptest! {
    #[test]
    fn parallel_equals_sequential(
        nodes in 1usize..60,
        degree in 0usize..5,
        seed in any::<u64>(),
        source_raw in 0usize..60,
    ) {
        prop_assume!(source_raw < nodes);
        let graph = random_graph(nodes, degree, seed);
        let source = NodeId(source_raw as u32);

        let reference = seq_bfs(&graph, source).unwrap();
        let allocating = par_bfs(&graph, source, &config(Mode::Allocating, 4)).unwrap();
        prop_assert_eq!(&allocating, &reference);

        let mut ws = LevelWorkspace::for_graph(&graph);
        let reused =
            par_bfs_reused(&graph, source, &config(Mode::Reused, 4), &mut ws).unwrap();
        prop_assert_eq!(&reused, &reference);
    }
}
