//! Sequential reference BFS.
//!
//! The queue-based textbook traversal. It exists as the correctness
//! oracle for the parallel variants and as the timing baseline in the
//! benches; it shares nothing with the parallel code paths beyond the
//! graph and table types, which is what makes it a useful oracle.

use std::collections::VecDeque;

use ripple_core::{BfsError, DistanceTable, NodeId};
use ripple_graph::Graph;

use crate::bfs::check_source;

/// Single-threaded single-source BFS.
///
/// Produces exactly the table the parallel variants produce: distance
/// in edge count for every reachable node,
/// [`DistanceTable::UNSET`] for the rest.
pub fn seq_bfs(graph: &Graph, source: NodeId) -> Result<DistanceTable, BfsError> {
    check_source(graph, source)?;

    let mut dist = vec![DistanceTable::UNSET; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();

    dist[source.index()] = 0;
    visited[source.index()] = true;
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let next = dist[v.index()] + 1;
        for &u in graph.neighbours(v) {
            if !visited[u.index()] {
                visited[u.index()] = true;
                dist[u.index()] = next;
                queue.push_back(u);
            }
        }
    }

    Ok(DistanceTable::from_raw(dist))
}
