//! Enumeration of all cliques, smallest first.
//!
//! # Algorithm
//!
//! Nodes are numbered by insertion order. Each node keeps only its
//! *forward* neighbours (higher number), so every clique is generated once,
//! from its lowest node upwards. A FIFO queue holds `(clique, candidates)`
//! pairs where every candidate extends the clique; popping a pair yields the
//! clique and enqueues each one-node extension with the candidates that are
//! adjacent to the new node.
//!
//! Because the queue is processed breadth-first, cliques come out in
//! non-decreasing size order. Yielding a clique of size m enqueues its
//! extensions of size m + 1, so an unbounded iterator holds the next size
//! class in memory. [`AllCliques::with_max_size`] caps the size: cliques at
//! the cap are yielded without enqueueing extensions, and the iterator ends
//! once the largest allowed class is drained.
//!
//! # Complexity
//!
//! Output-sensitive: one queue entry per clique. A dense graph has
//! exponentially many cliques (a complete graph on n nodes has 2^n - 1), so
//! callers with dense input should bound the size.

use crate::{Graph, NodeKey};
use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

/// Lazy iterator over every clique of a graph, in non-decreasing size.
///
/// Created by [`all_cliques`]. Each clique lists its nodes in insertion
/// order.
#[derive(Debug, Clone)]
pub struct AllCliques<'g, N> {
    graph: &'g Graph<N>,
    /// Sorted forward neighbours of each node index.
    forward: Vec<Vec<usize>>,
    queue: VecDeque<(Vec<usize>, Vec<usize>)>,
    max_size: Option<usize>,
}

/// Enumerate all cliques (maximal and non-maximal) of `graph`.
///
/// Every node is a clique of size 1 and every edge a clique of size 2.
/// Calling again restarts the enumeration.
///
/// # Example
///
/// ```rust
/// use lattix_lift::{algo::all_cliques, Graph};
///
/// let g = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
/// let sizes: Vec<usize> = all_cliques(&g).map(|c| c.len()).collect();
///
/// assert_eq!(sizes, vec![1, 1, 1, 2, 2, 2, 3]);
/// ```
pub fn all_cliques<N: NodeKey>(graph: &Graph<N>) -> AllCliques<'_, N> {
    let pg = graph.as_petgraph();

    let forward: Vec<Vec<usize>> = pg
        .node_indices()
        .map(|u| {
            let mut ahead: Vec<usize> = pg
                .neighbors(u)
                .map(NodeIndex::index)
                .filter(|&v| v > u.index())
                .collect();
            ahead.sort_unstable();
            ahead
        })
        .collect();

    let queue = forward
        .iter()
        .enumerate()
        .map(|(u, ahead)| (vec![u], ahead.clone()))
        .collect();

    AllCliques {
        graph,
        forward,
        queue,
        max_size: None,
    }
}

impl<N> AllCliques<'_, N> {
    /// Stop at cliques of `max_size` nodes. Larger cliques are never built.
    ///
    /// ```rust
    /// use lattix_lift::{algo::all_cliques, Graph};
    ///
    /// let g = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
    /// assert_eq!(all_cliques(&g).with_max_size(2).count(), 6);
    /// assert_eq!(all_cliques(&g).with_max_size(0).count(), 0);
    /// ```
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self.queue.retain(|(clique, _)| clique.len() <= max_size);
        self
    }
}

impl<N: NodeKey> Iterator for AllCliques<'_, N> {
    type Item = Vec<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let (base, candidates) = self.queue.pop_front()?;

        let at_cap = self.max_size.is_some_and(|m| base.len() >= m);
        let candidates = if at_cap { &[][..] } else { &candidates[..] };
        for (i, &u) in candidates.iter().enumerate() {
            let mut grown = Vec::with_capacity(base.len() + 1);
            grown.extend_from_slice(&base);
            grown.push(u);

            let ahead = &self.forward[u];
            let remaining: Vec<usize> = candidates[i + 1..]
                .iter()
                .copied()
                .filter(|v| ahead.binary_search(v).is_ok())
                .collect();

            self.queue.push_back((grown, remaining));
        }

        let pg = self.graph.as_petgraph();
        Some(
            base.into_iter()
                .map(|i| pg[NodeIndex::new(i)].id.clone())
                .collect(),
        )
    }
}
