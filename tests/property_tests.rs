//! Property-based tests for the lifting rules.
//!
//! These tests verify invariants that should hold for any simple graph:
//! - Clique complex dimension matches the largest clique
//! - Dimension bounds prune without adding simplices
//! - Every produced complex is closed under taking faces
//! - Independent set and power complexes reduce to clique complexes
//! - High graph powers collapse each connected component to one simplex

use lattix_lift::algo::{complement, component_stats, connected_components, diameter};
use lattix_lift::{
    build_clique_complex, build_independent_set_complex, build_neighbor_complex,
    build_power_complex, Error, Graph, SimplicialComplex,
};
use proptest::prelude::*;

prop_compose! {
    /// Small graphs on nodes 0..n (n >= 1) with random edges.
    fn arb_graph()(n in 1usize..8)(
        n in Just(n),
        edges in prop::collection::vec((0..n, 0..n), 0..20),
    ) -> Graph<usize> {
        let mut g = Graph::new();
        for v in 0..n {
            g.add_node(v);
        }
        for (u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }
}

/// Subsets of the node set, as bitmasks.
fn node_subsets(g: &Graph<usize>) -> impl Iterator<Item = Vec<usize>> {
    let n = g.node_count();
    (1u32..(1u32 << n)).map(move |mask| (0..n).filter(|&v| mask & (1u32 << v) != 0).collect())
}

fn is_clique(g: &Graph<usize>, nodes: &[usize]) -> bool {
    nodes
        .iter()
        .enumerate()
        .all(|(i, u)| nodes[i + 1..].iter().all(|v| g.has_edge(u, v)))
}

fn is_closed(sc: &SimplicialComplex<usize>) -> bool {
    sc.simplices()
        .all(|s| s.boundary_faces().all(|face| sc.contains_simplex(&face)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn clique_dim_is_largest_clique(g in arb_graph()) {
        let sc = build_clique_complex(&g, None).unwrap();

        let largest = node_subsets(&g)
            .filter(|s| is_clique(&g, s))
            .map(|s| s.len())
            .max()
            .unwrap();
        prop_assert_eq!(sc.dim(), Some(largest - 1));
    }

    #[test]
    fn clique_complex_is_exactly_the_cliques(g in arb_graph()) {
        let sc = build_clique_complex(&g, None).unwrap();

        for subset in node_subsets(&g) {
            prop_assert_eq!(
                sc.contains(&subset),
                is_clique(&g, &subset),
                "subset {:?}", subset
            );
        }
    }

    #[test]
    fn bounded_is_pruned_subcomplex(g in arb_graph(), d in 0usize..4) {
        let bounded = build_clique_complex(&g, Some(d)).unwrap();
        let full = build_clique_complex(&g, None).unwrap();

        prop_assert!(bounded.dim().unwrap() <= d);
        prop_assert!(bounded.is_subcomplex_of(&full));
        // nothing of dimension <= d is lost
        let expected = full.simplices().filter(|s| s.dim() <= d).count();
        prop_assert_eq!(bounded.len(), expected);
    }

    #[test]
    fn complexes_are_closed(g in arb_graph()) {
        prop_assert!(is_closed(&build_clique_complex(&g, None).unwrap()));
        prop_assert!(is_closed(&build_neighbor_complex(&g).unwrap()));
        prop_assert!(is_closed(&build_independent_set_complex(&g, None).unwrap()));
        prop_assert!(is_closed(&build_power_complex(&g, 2, None).unwrap()));
    }

    #[test]
    fn neighbor_dim_is_max_degree(g in arb_graph()) {
        let sc = build_neighbor_complex(&g).unwrap();
        prop_assert_eq!(sc.dim(), Some(g.max_degree()));
    }

    #[test]
    fn independent_set_is_clique_of_complement(g in arb_graph(), d in prop::option::of(0usize..3)) {
        let independent = build_independent_set_complex(&g, d).unwrap();
        let via_complement = build_clique_complex(&complement(&g), d).unwrap();

        prop_assert_eq!(independent.simplex_set(), via_complement.simplex_set());
        for simplex in independent.simplices() {
            let nodes = simplex.nodes();
            for (i, u) in nodes.iter().enumerate() {
                for v in &nodes[i + 1..] {
                    prop_assert!(!g.has_edge(u, v));
                }
            }
        }
    }

    #[test]
    fn first_power_is_clique_complex(g in arb_graph()) {
        let powered = build_power_complex(&g, 1, None).unwrap();
        let clique = build_clique_complex(&g, None).unwrap();
        prop_assert_eq!(powered.simplex_set(), clique.simplex_set());
    }

    #[test]
    fn power_dim_monotone_and_stabilises(g in arb_graph()) {
        let n = g.node_count();
        let complexes: Vec<SimplicialComplex<usize>> = (1..=n + 1)
            .map(|k| build_power_complex(&g, k, None).unwrap())
            .collect();

        let dims: Vec<usize> = complexes.iter().map(|sc| sc.dim().unwrap()).collect();
        prop_assert!(dims.windows(2).all(|w| w[0] <= w[1]), "dims {:?}", dims);

        let stable = diameter(&g).unwrap().max(1);
        let reference = complexes[stable - 1].simplex_set();
        for sc in &complexes[stable - 1..] {
            prop_assert_eq!(sc.simplex_set(), reference.clone());
        }

        // A component of m nodes has diameter at most m - 1, and a high
        // enough power turns each component into one maximal simplex.
        let mut components = connected_components(&g);
        let largest = component_stats(&components).max_component_size;
        prop_assert!(stable <= largest.saturating_sub(1).max(1));

        for component in &mut components {
            component.sort_unstable();
        }
        components.sort();
        let maximal: Vec<Vec<usize>> = complexes[n]
            .maximal_simplices()
            .into_iter()
            .map(|s| s.nodes().to_vec())
            .collect();
        prop_assert_eq!(maximal, components);
    }

    #[test]
    fn zero_power_rejected(g in arb_graph(), d in prop::option::of(0usize..3)) {
        let result = build_power_complex(&g, 0, d);
        prop_assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
