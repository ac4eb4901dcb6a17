//! Unweighted shortest-path distances.

use crate::{Attributes, Graph, Node, NodeKey};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{HashMap, VecDeque};

/// Breadth-first levels from `source`, stopping after depth `cutoff`.
///
/// Returns `(node, distance)` for every reached node, `source` included at 0.
pub(crate) fn bfs_levels<N>(
    graph: &UnGraph<Node<N>, Attributes>,
    source: NodeIndex,
    cutoff: Option<usize>,
) -> Vec<(NodeIndex, usize)> {
    let mut dist: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();
    let mut reached = Vec::new();

    dist[source.index()] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let Some(d) = dist[u.index()] else { continue };
        reached.push((u, d));

        if cutoff.is_some_and(|c| d >= c) {
            continue;
        }
        for v in graph.neighbors(u) {
            if dist[v.index()].is_none() {
                dist[v.index()] = Some(d + 1);
                queue.push_back(v);
            }
        }
    }

    reached
}

/// Hop distances from `source` to every node within `cutoff` hops
/// (all reachable nodes when `cutoff` is `None`).
///
/// Empty if `source` is not in the graph.
pub fn bfs_distances<N: NodeKey>(
    graph: &Graph<N>,
    source: &N,
    cutoff: Option<usize>,
) -> HashMap<N, usize> {
    let Some(start) = graph.index_of(source) else {
        return HashMap::new();
    };
    let pg = graph.as_petgraph();

    bfs_levels(pg, start, cutoff)
        .into_iter()
        .map(|(idx, d)| (pg[idx].id.clone(), d))
        .collect()
}

/// Largest finite distance between any two nodes.
///
/// For a disconnected graph this is the largest diameter among its
/// components. `None` for an empty graph.
///
/// # Complexity
///
/// O(V * (V + E)): one BFS per node.
pub fn diameter<N: NodeKey>(graph: &Graph<N>) -> Option<usize> {
    let pg = graph.as_petgraph();
    pg.node_indices()
        .map(|source| {
            bfs_levels(pg, source, None)
                .into_iter()
                .map(|(_, d)| d)
                .max()
                .unwrap_or(0)
        })
        .max()
}
