// Allow minor clippy style warnings at crate level
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

//! Lift graphs to simplicial complexes.
//!
//! This crate turns a simple undirected [`Graph`] into a
//! [`SimplicialComplex`] under one of four rules:
//!
//! - [`build_clique_complex`] - every clique becomes a simplex
//! - [`build_neighbor_complex`] - every closed neighbourhood becomes a simplex
//! - [`build_independent_set_complex`] - every independent set becomes a simplex
//! - [`build_power_complex`] - cliques of the k-th graph power
//!
//! A simplicial complex is a family of non-empty node sets closed under
//! taking non-empty subsets. A simplex on n nodes has dimension n - 1.
//!
//! # Attributes
//!
//! Nodes, edges and the graph carry JSON-valued [`Attributes`]. The clique
//! based rules copy node attributes onto 0-simplices; the clique rule also
//! copies edge attributes onto 1-simplices and graph attributes onto the
//! complex.
//!
//! # Algorithms
//!
//! - [`algo::cliques`] - lazy clique enumeration, smallest first
//! - [`algo::complement`] - graph complement
//! - [`algo::power`] - k-th graph power
//! - [`algo::distance`] - BFS distances and diameter
//! - [`algo::components`] - connected components
//!
//! Clique enumeration is output-sensitive and a dense graph can have
//! exponentially many cliques; pass a `max_dim` bound for large inputs.
//!
//! # Logging
//!
//! Builders emit `tracing` debug events; the deprecated aliases emit a
//! warning. No subscriber is installed here.
//!
//! # Example
//!
//! ```rust
//! use lattix_lift::{attributes, build_clique_complex, Graph};
//!
//! let mut g = Graph::new();
//! g.add_node_with(0, attributes([("label", 5)]));
//! g.add_edge_with(0, 1, attributes([("weight", 10)]));
//! g.add_edge(1, 2);
//! g.add_edge(2, 0);
//!
//! let sc = build_clique_complex(&g, None).unwrap();
//! assert_eq!(sc.dim(), Some(2));
//! assert_eq!(sc.get(&[0]).unwrap()["label"], 5);
//! assert_eq!(sc.get(&[0, 1]).unwrap()["weight"], 10);
//! ```

pub mod algo;
mod complex;
mod error;
mod graph;
mod node;
mod simplex;
pub mod transform;

pub use complex::{Face, SimplicialComplex};
pub use error::{Error, Result};
pub use graph::{Graph, GraphStats};
pub use node::{attributes, Attributes, Node, NodeKey};
pub use simplex::Simplex;
#[allow(deprecated)]
pub use transform::{graph_2_clique_complex, graph_2_neighbor_complex};
pub use transform::{
    build_clique_complex, build_independent_set_complex, build_neighbor_complex,
    build_power_complex, lift, LiftConfig, LiftRule,
};

// Re-export petgraph for advanced graph operations
pub use petgraph;
