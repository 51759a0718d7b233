//! Parallel exclusive prefix sum.
//!
//! The scan is the load-bearing primitive of frontier expansion: it
//! turns per-node counts into non-overlapping write offsets, which is
//! what lets the claim phase run without any write contention.
//! Correctness downstream depends on it being a true *exclusive* scan —
//! element `i`'s result must not include element `i`'s own count.

use rayon::prelude::*;

/// Replace each element with the sum of all elements before it and
/// return the grand total.
///
/// Block-structured three-phase scan: per-chunk sums in parallel, a
/// sequential exclusive scan over the chunk sums, then a parallel
/// rewrite of each chunk seeded with its chunk offset. `min_len` is the
/// chunk length (clamped to 1); any value yields identical results.
///
/// After the call, `values[i]` holds the exclusive prefix
/// `Σ values[0..i]` of the original contents, and the slice partitions
/// `0..total` into the ranges `values[i] .. values[i] + old_values[i]`.
pub fn exclusive_scan(values: &mut [usize], min_len: usize) -> usize {
    let block = min_len.max(1);
    if values.is_empty() {
        return 0;
    }

    let chunk_sums: Vec<usize> = values
        .par_chunks(block)
        .map(|chunk| chunk.iter().sum())
        .collect();

    let mut chunk_offsets = Vec::with_capacity(chunk_sums.len());
    let mut running = 0usize;
    for sum in chunk_sums {
        chunk_offsets.push(running);
        running += sum;
    }
    let total = running;

    values
        .par_chunks_mut(block)
        .zip(chunk_offsets.par_iter())
        .for_each(|(chunk, &base)| {
            let mut acc = base;
            for v in chunk.iter_mut() {
                let count = *v;
                *v = acc;
                acc += count;
            }
        });

    total
}
