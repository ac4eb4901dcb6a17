//! Power complex: cliques of the k-th graph power.

use super::build_clique_complex;
use crate::{algo, Graph, NodeKey, Result, SimplicialComplex};

/// Build the power complex of `graph`: the clique complex of its
/// `power`-th graph power.
///
/// Nodes within `power` hops of each other are joined before cliques are
/// taken. For fixed `graph` the dimension is non-decreasing in `power` and
/// stops changing once `power` reaches the diameter. Edge and graph-level
/// attributes of `graph` are ignored.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `power` is 0;
/// the graph is not touched in that case.
pub fn build_power_complex<N: NodeKey>(
    graph: &Graph<N>,
    power: usize,
    max_dim: Option<usize>,
) -> Result<SimplicialComplex<N>> {
    let powered = algo::power(graph, power)?;
    build_clique_complex(&powered, max_dim)
}
