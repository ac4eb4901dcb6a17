//! Connected components analysis.
//!
//! Used to reason about graph powers: the k-th power of a graph stops
//! changing once k reaches the largest component diameter.

use crate::{Graph, NodeKey};
use petgraph::visit::EdgeRef;
use std::cmp::Ordering;

// Union-Find helper functions (at module level per clippy)
fn uf_find(parent: &mut [usize], i: usize) -> usize {
    if parent[i] != i {
        parent[i] = uf_find(parent, parent[i]); // Path compression
    }
    parent[i]
}

fn uf_union(parent: &mut [usize], rank: &mut [usize], x: usize, y: usize) {
    let px = uf_find(parent, x);
    let py = uf_find(parent, y);
    if px == py {
        return;
    }
    // Union by rank
    match rank[px].cmp(&rank[py]) {
        Ordering::Less => parent[px] = py,
        Ordering::Greater => parent[py] = px,
        Ordering::Equal => {
            parent[py] = px;
            rank[px] += 1;
        }
    }
}

/// Compute connected components.
///
/// Components are ordered by their first node, and nodes within a component
/// keep insertion order.
///
/// Uses Union-Find for efficient O(V + E * alpha(V)) computation.
#[must_use]
pub fn connected_components<N: NodeKey>(graph: &Graph<N>) -> Vec<Vec<N>> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n == 0 {
        return vec![];
    }

    let mut parent: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = vec![0; n];

    for edge in pg.edge_references() {
        uf_union(&mut parent, &mut rank, edge.source().index(), edge.target().index());
    }

    // Group nodes by root, in order of first appearance
    let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
    let mut components: Vec<Vec<N>> = Vec::new();
    for idx in pg.node_indices() {
        let root = uf_find(&mut parent, idx.index());
        let slot = *slot_of_root[root].get_or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(pg[idx].id.clone());
    }

    components
}

/// Statistics about connected components.
#[derive(Debug, Clone)]
pub struct ComponentStats {
    /// Number of components.
    pub num_components: usize,
    /// Size of the largest component.
    pub max_component_size: usize,
    /// Size of the smallest component.
    pub min_component_size: usize,
    /// Average component size.
    pub avg_component_size: f64,
}

/// Compute statistics from components.
///
/// Returns default stats if components is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn component_stats<N>(components: &[Vec<N>]) -> ComponentStats {
    if components.is_empty() {
        return ComponentStats {
            num_components: 0,
            max_component_size: 0,
            min_component_size: 0,
            avg_component_size: 0.0,
        };
    }

    let sizes: Vec<usize> = components.iter().map(Vec::len).collect();
    let total: usize = sizes.iter().sum();

    ComponentStats {
        num_components: components.len(),
        max_component_size: sizes.iter().copied().max().unwrap_or(0),
        min_component_size: sizes.iter().copied().min().unwrap_or(0),
        avg_component_size: total as f64 / components.len() as f64,
    }
}
