//! Disjoint `&mut` partitioning of a buffer at scan offsets.
//!
//! The exclusive scan promises each producer a private write range;
//! this module makes that promise structural by splitting the shared
//! buffer into non-overlapping mutable chunks up front, so the borrow
//! checker enforces what the offset arithmetic alone only implies.

/// Split `buf` into one chunk per offset, where `offsets` is an
/// exclusive-scan array over the chunk lengths and `buf.len()` is the
/// scan total.
///
/// Chunk `i` spans `offsets[i] .. offsets[i + 1]` (the last chunk ends
/// at `buf.len()`). Offsets must start at 0 and be monotonic — both
/// hold for any output of [`exclusive_scan`](crate::exclusive_scan)
/// over non-negative counts.
pub(crate) fn split_at_offsets<'a, T>(
    mut buf: &'a mut [T],
    offsets: &[usize],
) -> Vec<&'a mut [T]> {
    let total = buf.len();
    let mut chunks = Vec::with_capacity(offsets.len());
    for (i, &start) in offsets.iter().enumerate() {
        let end = offsets.get(i + 1).copied().unwrap_or(total);
        let (head, tail) = buf.split_at_mut(end - start);
        chunks.push(head);
        buf = tail;
    }
    debug_assert!(buf.is_empty(), "offsets did not cover the buffer");
    chunks
}
