//! Traversal drivers: the level loop for both variants.

use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;
use ripple_core::{BfsError, DistanceTable, NodeId};
use ripple_graph::Graph;

use crate::config::{BfsConfig, Mode};
use crate::frontier::{claim_neighbours, compact_filter, pack_survivors};
use crate::scan::exclusive_scan;
use crate::visit::VisitSet;
use crate::workspace::LevelWorkspace;

/// Compute single-source BFS distances with the configured variant.
///
/// `Mode::Reused` builds a [`LevelWorkspace`] sized for `graph` behind
/// the scenes; callers who actually want the allocation savings across
/// repeated runs should hold their own workspace and call
/// [`par_bfs_reused`] directly.
pub fn bfs(
    graph: &Graph,
    source: NodeId,
    config: &BfsConfig,
) -> Result<DistanceTable, BfsError> {
    match config.mode {
        Mode::Allocating => par_bfs(graph, source, config),
        Mode::Reused => {
            let mut workspace = LevelWorkspace::for_graph(graph);
            par_bfs_reused(graph, source, config, &mut workspace)
        }
    }
}

/// Allocating parallel BFS: fresh buffers every level.
pub fn par_bfs(
    graph: &Graph,
    source: NodeId,
    config: &BfsConfig,
) -> Result<DistanceTable, BfsError> {
    check_source(graph, source)?;
    let min_len = config.min_len();

    let dist = unset_distances(graph.node_count(), min_len);
    let visited = VisitSet::new(graph.node_count());

    // The source is pre-claimed, not discovered via an edge.
    dist[source.index()].store(0, Ordering::Relaxed);
    let won = visited.claim(source);
    debug_assert!(won);

    let mut frontier = vec![source];
    let mut depth: u32 = 0;

    while !frontier.is_empty() {
        let mut offsets: Vec<usize> = frontier
            .par_iter()
            .with_min_len(min_len)
            .map(|&v| graph.out_degree(v))
            .collect();
        let total = exclusive_scan(&mut offsets, min_len);

        let mut scratch = vec![NodeId::NONE; total];
        claim_neighbours(
            graph,
            &frontier,
            &offsets,
            &mut scratch,
            &visited,
            &dist,
            depth + 1,
            min_len,
        );

        frontier = compact_filter(scratch, min_len);
        depth += 1;
    }

    Ok(into_table(dist))
}

/// Allocation-minimising parallel BFS over a caller-owned workspace.
///
/// Identical results to [`par_bfs`]; the difference is purely where the
/// per-level buffers live. Fails with
/// [`BfsError::CapacityExceeded`] the moment a level would overrun a
/// workspace bound — the distance table built so far is discarded and
/// the caller must raise the bounds or switch to the allocating
/// variant.
pub fn par_bfs_reused(
    graph: &Graph,
    source: NodeId,
    config: &BfsConfig,
    workspace: &mut LevelWorkspace,
) -> Result<DistanceTable, BfsError> {
    check_source(graph, source)?;
    let min_len = config.min_len();
    workspace.begin_run(graph.node_count(), min_len)?;

    let LevelWorkspace {
        visited,
        frontier,
        degrees,
        scratch,
        flags,
    } = workspace;

    let dist = unset_distances(graph.node_count(), min_len);
    dist[source.index()].store(0, Ordering::Relaxed);
    let won = visited.claim(source);
    debug_assert!(won);

    frontier[0] = source;
    let mut frontier_len = 1usize;
    let mut depth: u32 = 0;

    while frontier_len != 0 {
        // Phase 1: out-degrees of the live frontier prefix.
        let offsets = &mut degrees[..frontier_len];
        offsets
            .par_iter_mut()
            .zip(frontier[..frontier_len].par_iter())
            .with_min_len(min_len)
            .for_each(|(d, &v)| *d = graph.out_degree(v));

        // Phase 2: exclusive scan turns degrees into write offsets.
        let total = exclusive_scan(offsets, min_len);
        if total > scratch.len() {
            return Err(BfsError::CapacityExceeded {
                requested: total,
                capacity: scratch.len(),
            });
        }

        // Clear exactly the slots this level will read; anything beyond
        // `total` is stale from an earlier level and must stay unread.
        scratch[..total]
            .par_iter_mut()
            .with_min_len(min_len)
            .for_each(|slot| *slot = NodeId::NONE);

        // Phase 3: claim unvisited neighbours into reserved slots.
        claim_neighbours(
            graph,
            &frontier[..frontier_len],
            offsets,
            &mut scratch[..total],
            visited,
            &dist,
            depth + 1,
            min_len,
        );

        // Phase 4: survivor flags, scanned into destination indices,
        // then packed over the consumed frontier prefix.
        let dest_idx = &mut flags[..total];
        dest_idx
            .par_iter_mut()
            .zip(scratch[..total].par_iter())
            .with_min_len(min_len)
            .for_each(|(f, slot)| *f = usize::from(!slot.is_none()));
        let next_len = exclusive_scan(dest_idx, min_len);
        if next_len > frontier.len() {
            return Err(BfsError::CapacityExceeded {
                requested: next_len,
                capacity: frontier.len(),
            });
        }
        pack_survivors(&scratch[..total], dest_idx, &mut frontier[..next_len], min_len);

        frontier_len = next_len;
        depth += 1;
    }

    Ok(into_table(dist))
}

pub(crate) fn check_source(graph: &Graph, source: NodeId) -> Result<(), BfsError> {
    if !graph.contains(source) {
        return Err(BfsError::InvalidSource {
            source,
            node_count: graph.node_count(),
        });
    }
    Ok(())
}

fn unset_distances(node_count: usize, min_len: usize) -> Vec<AtomicU32> {
    (0..node_count)
        .into_par_iter()
        .with_min_len(min_len)
        .map(|_| AtomicU32::new(DistanceTable::UNSET))
        .collect()
}

fn into_table(dist: Vec<AtomicU32>) -> DistanceTable {
    DistanceTable::from_raw(dist.into_iter().map(AtomicU32::into_inner).collect())
}
