//! Frontier expansion and compaction phases.
//!
//! One BFS level runs four bulk-parallel phases in strict sequence:
//! degree computation, the exclusive scan, neighbour claiming, and
//! compaction. This module holds the claim phase and both compactors;
//! the drivers in [`crate::bfs`] sequence the phases.

use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;
use ripple_core::NodeId;
use ripple_graph::Graph;

use crate::chunk::split_at_offsets;
use crate::visit::VisitSet;

/// The claim phase: race for each frontier node's unvisited neighbours.
///
/// `offsets` is the exclusive scan of the frontier's out-degrees and
/// `scratch` the buffer of scan-total length, pre-filled with
/// [`NodeId::NONE`]. The scratch buffer is split into disjoint `&mut`
/// chunks at the offsets — one per frontier slot — so no two workers
/// can ever target the same slot.
///
/// Parallel over frontier slots, sequential over each node's (at most
/// a handful of) neighbours: a won claim stores `next_dist` for the
/// neighbour and records it in the slot reserved for that edge; a lost
/// claim leaves the slot at the sentinel. The distance store is
/// `Relaxed` — the slot and the distance are written by the same
/// worker in order, and downstream phases only read them after the
/// fork-join barrier.
pub(crate) fn claim_neighbours(
    graph: &Graph,
    frontier: &[NodeId],
    offsets: &[usize],
    scratch: &mut [NodeId],
    visited: &VisitSet,
    dist: &[AtomicU32],
    next_dist: u32,
    min_len: usize,
) {
    debug_assert_eq!(frontier.len(), offsets.len());
    let chunks = split_at_offsets(scratch, offsets);
    frontier
        .par_iter()
        .zip(chunks.into_par_iter())
        .with_min_len(min_len)
        .for_each(|(&v, slots)| {
            for (slot, &u) in slots.iter_mut().zip(graph.neighbours(v)) {
                if visited.claim(u) {
                    dist[u.index()].store(next_dist, Ordering::Relaxed);
                    *slot = u;
                }
            }
        });
}

/// Allocating compactor: filter the sentinels out into a fresh frontier.
pub(crate) fn compact_filter(scratch: Vec<NodeId>, min_len: usize) -> Vec<NodeId> {
    scratch
        .into_par_iter()
        .with_min_len(min_len)
        .filter(|u| !u.is_none())
        .collect()
}

/// Reusing compactor: pack the survivors of `src` into `dst`.
///
/// `dest_idx` is the exclusive scan of the survivor flags, so
/// `dest_idx[i]` is the destination slot of `src[i]` when `src[i]` is a
/// survivor, and `dst.len()` is the survivor count. Survivors of one
/// `min_len`-sized source chunk land in one contiguous destination
/// range, so `dst` splits into disjoint `&mut` chunks at the
/// chunk-start destinations and the writes stay race-free.
pub(crate) fn pack_survivors(
    src: &[NodeId],
    dest_idx: &[usize],
    dst: &mut [NodeId],
    min_len: usize,
) {
    debug_assert_eq!(src.len(), dest_idx.len());
    let block = min_len.max(1);
    let starts: Vec<usize> = (0..src.len().div_ceil(block))
        .map(|c| dest_idx[c * block])
        .collect();
    let chunks = split_at_offsets(dst, &starts);
    src.par_chunks(block)
        .zip(chunks.into_par_iter())
        .for_each(|(src_chunk, out)| {
            let mut filled = 0;
            for &u in src_chunk {
                if !u.is_none() {
                    out[filled] = u;
                    filled += 1;
                }
            }
            debug_assert_eq!(filled, out.len());
        });
}
