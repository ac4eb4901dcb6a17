//! k-th power of a graph.

use super::distance::bfs_levels;
use crate::{Error, Graph, NodeKey, Result};

/// The `k`-th power of `graph`: same nodes, with `u`-`v` an edge exactly when
/// `u != v` and their shortest-path distance in `graph` is at most `k`.
///
/// Node attributes are carried over; edge and graph-level attributes are not.
/// The first power has the same edges as `graph`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `k` is 0.
pub fn power<N: NodeKey>(graph: &Graph<N>, k: usize) -> Result<Graph<N>> {
    if k == 0 {
        return Err(Error::InvalidArgument(format!(
            "graph power {k} must be greater than 0"
        )));
    }

    let mut out = graph.nodes_only();
    let pg = graph.as_petgraph();

    for source in pg.node_indices() {
        for (target, _) in bfs_levels(pg, source, Some(k)) {
            // each pair once
            if source < target {
                out.add_edge(pg[source].id.clone(), pg[target].id.clone());
            }
        }
    }

    Ok(out)
}
