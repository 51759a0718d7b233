//! The atomic visited set.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use ripple_core::NodeId;

/// One atomic visited flag per node, supporting a single mutating
/// operation: [`claim`](VisitSet::claim).
///
/// Flags transition `false → true` exactly once per node per run; there
/// is no un-claim. This one-way transition is the sole synchronisation
/// primitive of the traversal — among any number of workers racing to
/// claim the same node, exactly one receives `true`. Never a lock: each
/// flag is an independent atomic, so claims on distinct nodes do not
/// contend at all.
pub struct VisitSet {
    flags: Vec<AtomicBool>,
}

impl VisitSet {
    /// Create a set of `len` unvisited flags.
    pub fn new(len: usize) -> Self {
        let mut flags = Vec::with_capacity(len);
        flags.resize_with(len, || AtomicBool::new(false));
        Self { flags }
    }

    /// Number of flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the set covers zero nodes.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Atomically transition `node` from unvisited to visited.
    ///
    /// Returns `true` iff this call performed the transition. Safe
    /// under arbitrary concurrent calls, including the same node being
    /// claimed from multiple edges in the same level.
    ///
    /// `AcqRel` on success / `Acquire` on failure: the CAS only has to
    /// elect a unique winner; cross-phase visibility of what the winner
    /// wrote comes from the fork-join barrier between phases.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn claim(&self, node: NodeId) -> bool {
        self.flags[node.index()]
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Whether `node` has been claimed.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.flags[node.index()].load(Ordering::Acquire)
    }

    /// Clear the first `count` flags in parallel, readying the set for
    /// a fresh run over a graph of `count` nodes.
    ///
    /// `&mut self` guarantees no claim races the reset; the stores can
    /// therefore be `Relaxed`.
    pub fn reset(&mut self, count: usize, min_len: usize) {
        self.flags[..count]
            .par_iter()
            .with_min_len(min_len.max(1))
            .for_each(|flag| flag.store(false, Ordering::Relaxed));
    }
}
