//! Clique complex: every clique of the graph becomes a simplex.

use crate::algo::all_cliques;
use crate::{Graph, NodeKey, Result, SimplicialComplex};
use tracing::debug;

/// Build the clique complex of `graph`.
///
/// Every clique (pairwise-adjacent node set) becomes a simplex. With
/// `max_dim = Some(d)`, only cliques of at most `d + 1` nodes are kept, so
/// the result has dimension at most `d`; larger cliques are never
/// enumerated.
///
/// Attributes are copied (the graph is not modified):
/// - node attributes onto the matching 0-simplex,
/// - edge attributes onto the matching 1-simplex,
/// - graph-level attributes onto the complex itself.
///
/// Targets pruned by `max_dim` are skipped.
///
/// # Example
///
/// ```rust
/// use lattix_lift::{build_clique_complex, Graph};
///
/// let g = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);
///
/// let sc = build_clique_complex(&g, None).unwrap();
/// assert_eq!(sc.dim(), Some(2));
/// assert!(sc.contains(&[0, 1, 2]));
///
/// let sc = build_clique_complex(&g, Some(1)).unwrap();
/// assert_eq!(sc.dim(), Some(1));
/// assert!(!sc.contains(&[0, 1, 2]));
/// ```
pub fn build_clique_complex<N: NodeKey>(
    graph: &Graph<N>,
    max_dim: Option<usize>,
) -> Result<SimplicialComplex<N>> {
    let cliques = match max_dim {
        Some(d) => all_cliques(graph).with_max_size(d.saturating_add(1)),
        None => all_cliques(graph),
    };
    let mut complex = SimplicialComplex::from_simplices(cliques)?;

    for node in graph.nodes() {
        if let Some(attrs) = graph.node_attributes(node) {
            complex.update_attributes(std::slice::from_ref(node), attrs);
        }
    }
    for (u, v, attrs) in graph.edges_with_attributes() {
        complex.update_attributes(&[u.clone(), v.clone()], attrs);
    }
    complex
        .attributes_mut()
        .extend(graph.attributes().iter().map(|(k, v)| (k.clone(), v.clone())));

    debug!(
        nodes = graph.node_count(),
        simplices = complex.len(),
        dim = ?complex.dim(),
        ?max_dim,
        "built clique complex"
    );
    Ok(complex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes;

    fn two_triangles() -> Graph<i32> {
        let mut g = Graph::new();
        g.attributes_mut().insert("label".into(), 12.into());
        g.add_node_with(0, attributes([("label", 5)]));
        g.add_edge_with(0, 1, attributes([("weight", 10)]));
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        g.add_edge(2, 3);
        g.add_edge(3, 0);
        g
    }

    #[test]
    fn test_clique_complex() {
        let sc = build_clique_complex(&two_triangles(), None).unwrap();

        assert_eq!(sc.dim(), Some(2));
        assert!(sc.contains(&[0, 2, 3]));
        assert!(sc.contains(&[0, 1, 2]));
        assert!(!sc.contains(&[1, 3]));
        assert_eq!(sc.shape(), vec![4, 5, 2]);
    }

    #[test]
    fn test_attributes_copied() {
        let g = two_triangles();
        let sc = build_clique_complex(&g, None).unwrap();

        assert_eq!(sc.attributes()["label"], 12);
        assert_eq!(sc.get(&[0]).unwrap()["label"], 5);
        assert_eq!(sc.get(&[1, 0]).unwrap()["weight"], 10);
        assert!(sc.get(&[1, 2]).unwrap().is_empty());

        // source untouched
        assert_eq!(g.node_attributes(&0).unwrap().len(), 1);
    }

    #[test]
    fn test_max_dim_prunes() {
        let sc = build_clique_complex(&two_triangles(), Some(1)).unwrap();

        assert_eq!(sc.dim(), Some(1));
        assert!(!sc.contains(&[0, 2, 3]));
        assert!(!sc.contains(&[0, 1, 2]));
        assert_eq!(sc.get(&[0, 1]).unwrap()["weight"], 10);
    }

    #[test]
    fn test_max_dim_zero_skips_edge_attributes() {
        let sc = build_clique_complex(&two_triangles(), Some(0)).unwrap();

        assert_eq!(sc.dim(), Some(0));
        assert_eq!(sc.len(), 4);
        assert!(sc.get(&[0, 1]).is_none());
        assert_eq!(sc.get(&[0]).unwrap()["label"], 5);
        assert_eq!(sc.attributes()["label"], 12);
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph<i32> = Graph::new();
        let sc = build_clique_complex(&g, None).unwrap();

        assert!(sc.is_empty());
        assert_eq!(sc.dim(), None);
    }
}
