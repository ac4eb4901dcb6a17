//! Simplices as canonical node sets.
//!
//! A k-simplex is a set of k + 1 nodes. Nodes are kept sorted and
//! de-duplicated, so two simplices built from the same node set in any
//! order compare, hash and serialize identically.

use crate::{Error, NodeKey, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty set of nodes in canonical (sorted) order.
///
/// Serializes as a plain node list. Deserializing goes through
/// [`Simplex::new`], so the list may be unsorted or repeat nodes but must not
/// be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<N>",
    into = "Vec<N>",
    bound(
        serialize = "N: Serialize + Clone",
        deserialize = "N: NodeKey + Deserialize<'de>"
    )
)]
pub struct Simplex<N> {
    nodes: Vec<N>,
}

impl<N: NodeKey> Simplex<N> {
    /// Build a simplex from any collection of nodes.
    ///
    /// Duplicates are dropped. Fails with [`Error::EmptySimplex`] if no nodes
    /// are given.
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Result<Self> {
        let mut nodes: Vec<N> = nodes.into_iter().collect();
        if nodes.is_empty() {
            return Err(Error::EmptySimplex);
        }
        nodes.sort_unstable();
        nodes.dedup();
        Ok(Self { nodes })
    }

    /// The 0-simplex on a single node.
    pub fn vertex(node: N) -> Self {
        Self { nodes: vec![node] }
    }

    /// Nodes in canonical order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Dimension (number of nodes minus one).
    pub fn dim(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether `node` is a vertex of this simplex.
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.binary_search(node).is_ok()
    }

    /// Whether every node of `self` is also in `other`.
    pub fn is_face_of(&self, other: &Simplex<N>) -> bool {
        self.len() <= other.len() && self.nodes.iter().all(|n| other.contains(n))
    }

    /// The codimension-1 faces (each node removed in turn).
    ///
    /// A vertex has no non-empty proper faces, so this is empty for dimension 0.
    pub fn boundary_faces(&self) -> impl Iterator<Item = Simplex<N>> + '_ {
        let n = if self.nodes.len() > 1 { self.nodes.len() } else { 0 };
        (0..n).map(move |skip| {
            let nodes = self
                .nodes
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, node)| node.clone())
                .collect();
            Simplex { nodes }
        })
    }

    /// Consume the simplex, returning its nodes.
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N: NodeKey> TryFrom<Vec<N>> for Simplex<N> {
    type Error = Error;

    fn try_from(nodes: Vec<N>) -> Result<Self> {
        Self::new(nodes)
    }
}

impl<N> From<Simplex<N>> for Vec<N> {
    fn from(simplex: Simplex<N>) -> Self {
        simplex.nodes
    }
}

impl<N: fmt::Display> fmt::Display for Simplex<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, ")")
    }
}
