//! Graph complement.

use crate::{Graph, NodeKey};

/// The complement of `graph`: same nodes, with `u`-`v` an edge exactly when
/// `u != v` and `u`-`v` is not an edge of `graph`.
///
/// Node attributes are carried over. Edge and graph-level attributes are
/// not, since the complement's edges have no counterpart in the input.
///
/// An independent set of `graph` is a clique of its complement.
#[must_use]
pub fn complement<N: NodeKey>(graph: &Graph<N>) -> Graph<N> {
    let mut out = graph.nodes_only();
    let nodes: Vec<&N> = graph.nodes().collect();

    for (i, &u) in nodes.iter().enumerate() {
        for &v in &nodes[i + 1..] {
            if !graph.has_edge(u, v) {
                out.add_edge(u.clone(), v.clone());
            }
        }
    }

    out
}
