//! Neighbor complex: one simplex per closed neighbourhood.

use crate::{Graph, NodeKey, Result, SimplicialComplex};
use tracing::debug;

/// Build the neighbor complex of `graph`.
///
/// Each node `v` contributes the simplex `{v} ∪ neighbors(v)`. That set is
/// generally not a clique, so the dimension reaches the maximum degree of
/// the graph, and the face count grows as 2^(degree + 1) per node. Repeated
/// neighbourhoods collapse into one simplex.
///
/// No attributes are copied.
pub fn build_neighbor_complex<N: NodeKey>(graph: &Graph<N>) -> Result<SimplicialComplex<N>> {
    let neighborhoods = graph.nodes().map(|node| {
        graph
            .neighbors(node)
            .into_iter()
            .cloned()
            .chain(std::iter::once(node.clone()))
            .collect::<Vec<N>>()
    });
    let complex = SimplicialComplex::from_simplices(neighborhoods)?;

    debug!(
        nodes = graph.node_count(),
        simplices = complex.len(),
        dim = ?complex.dim(),
        "built neighbor complex"
    );
    Ok(complex)
}
