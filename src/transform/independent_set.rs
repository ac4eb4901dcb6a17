//! Independent set complex: cliques of the complement graph.

use super::build_clique_complex;
use crate::algo::complement;
use crate::{Graph, NodeKey, Result, SimplicialComplex};

/// Build the independent set complex of `graph`.
///
/// Simplices are the sets of pairwise non-adjacent nodes, i.e. the clique
/// complex of the complement. Node attributes still reach the 0-simplices;
/// edge and graph-level attributes of `graph` are ignored.
pub fn build_independent_set_complex<N: NodeKey>(
    graph: &Graph<N>,
    max_dim: Option<usize>,
) -> Result<SimplicialComplex<N>> {
    build_clique_complex(&complement(graph), max_dim)
}
