use crate::{Attributes, Error, Node, NodeKey, Result};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A simple undirected graph with attributes on nodes, edges and the graph
/// itself.
///
/// Uses petgraph's undirected graph internally. Node keys are mapped to
/// petgraph indices for O(1) lookup; iteration follows insertion order.
///
/// # Example
///
/// ```rust
/// use lattix_lift::Graph;
///
/// let mut g = Graph::new();
/// g.add_edge(0, 1);
/// g.add_edge(1, 2);
///
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// assert!(g.has_edge(&2, &1));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "RawGraph<N>",
    bound(
        serialize = "N: Serialize",
        deserialize = "N: NodeKey + Deserialize<'de>"
    )
)]
pub struct Graph<N> {
    /// The underlying undirected graph.
    graph: UnGraph<Node<N>, Attributes>,

    /// Map from node key to node index.
    #[serde(skip)]
    node_index: HashMap<N, NodeIndex>,

    /// Graph-level attributes.
    #[serde(default)]
    attributes: Attributes,
}

/// Serialized form of a graph: the petgraph storage without the key index.
#[derive(Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
struct RawGraph<N> {
    graph: UnGraph<Node<N>, Attributes>,
    #[serde(default)]
    attributes: Attributes,
}

impl<N: NodeKey> TryFrom<RawGraph<N>> for Graph<N> {
    type Error = Error;

    fn try_from(raw: RawGraph<N>) -> Result<Self> {
        let mut g = Self {
            graph: raw.graph,
            node_index: HashMap::new(),
            attributes: raw.attributes,
        };
        g.rebuild_index()?;
        Ok(g)
    }
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            node_index: HashMap::new(),
            attributes: Attributes::new(),
        }
    }

    /// Create a graph with estimated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            node_index: HashMap::with_capacity(nodes),
            attributes: Attributes::new(),
        }
    }

    /// Build a graph from an edge list.
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N)>) -> Self {
        let mut g = Self::new();
        for (u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /// A graph with the same nodes (and node attributes) but no edges and no
    /// graph-level attributes.
    pub(crate) fn nodes_only(&self) -> Self {
        let mut g = Self::with_capacity(self.node_count(), 0);
        for node in self.graph.node_weights() {
            g.add_node_with(node.id.clone(), node.attributes.clone());
        }
        g
    }

    /// Rebuild the key index after deserialization.
    ///
    /// Rejects repeated node keys, self-loops and parallel edges, none of
    /// which the mutation methods can produce.
    fn rebuild_index(&mut self) -> Result<()> {
        self.node_index.clear();
        for idx in self.graph.node_indices() {
            let id = &self.graph[idx].id;
            if self.node_index.insert(id.clone(), idx).is_some() {
                return Err(Error::InvalidArgument(format!("duplicate node {id:?}")));
            }
        }

        let mut seen = HashSet::with_capacity(self.graph.edge_count());
        for edge in self.graph.edge_references() {
            let (a, b) = (edge.source(), edge.target());
            if a == b {
                return Err(Error::InvalidArgument(format!(
                    "self-loop on node {:?}",
                    self.graph[a].id
                )));
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(Error::InvalidArgument(format!(
                    "parallel edge between {:?} and {:?}",
                    self.graph[a].id, self.graph[b].id
                )));
            }
        }
        Ok(())
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String>
    where
        N: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Load from a JSON string produced by [`Graph::to_json`].
    pub fn from_json(json: &str) -> Result<Self>
    where
        N: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a node, or return the index of the existing one.
    pub fn add_node(&mut self, id: N) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }

        let idx = self.graph.add_node(Node::new(id.clone()));
        self.node_index.insert(id, idx);
        idx
    }

    /// Add a node and merge `attributes` into its attribute map.
    pub fn add_node_with(&mut self, id: N, attributes: Attributes) -> NodeIndex {
        let idx = self.add_node(id);
        self.graph[idx].attributes.extend(attributes);
        idx
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// Returns `None` for a self-loop (the node is still added).
    pub fn add_edge(&mut self, u: N, v: N) -> Option<EdgeIndex> {
        self.add_edge_with(u, v, Attributes::new())
    }

    /// Add an undirected edge and merge `attributes` into its attribute map.
    ///
    /// Adding an existing edge again only merges the attributes.
    pub fn add_edge_with(&mut self, u: N, v: N, attributes: Attributes) -> Option<EdgeIndex> {
        if u == v {
            debug!(node = ?u, "ignoring self-loop");
            self.add_node(u);
            return None;
        }

        let a = self.add_node(u);
        let b = self.add_node(v);
        let edge = match self.graph.find_edge(a, b) {
            Some(edge) => edge,
            None => self.graph.add_edge(a, b, Attributes::new()),
        };
        self.graph[edge].extend(attributes);
        Some(edge)
    }

    /// Whether the node exists.
    pub fn contains_node(&self, id: &N) -> bool {
        self.node_index.contains_key(id)
    }

    /// Check if an edge exists between two nodes (in either direction).
    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        let (Some(&a), Some(&b)) = (self.node_index.get(u), self.node_index.get(v)) else {
            return false;
        };
        self.graph.find_edge(a, b).is_some()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Iterate over node keys in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.graph.node_weights().map(|n| &n.id)
    }

    /// Iterate over edges as unordered pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> {
        self.edges_with_attributes().map(|(u, v, _)| (u, v))
    }

    /// Iterate over edges together with their attributes.
    pub fn edges_with_attributes(&self) -> impl Iterator<Item = (&N, &N, &Attributes)> {
        let graph = &self.graph;
        graph
            .edge_references()
            .map(move |e| (&graph[e.source()].id, &graph[e.target()].id, e.weight()))
    }

    /// Neighbor keys of a node, in insertion order. Empty if the node is absent.
    ///
    /// O(d log d): petgraph yields neighbours in reverse edge order, so they
    /// are sorted by index.
    pub fn neighbors(&self, id: &N) -> Vec<&N> {
        let Some(&idx) = self.node_index.get(id) else {
            return vec![];
        };
        let mut indices: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        indices.sort_unstable();
        indices.into_iter().map(|n| &self.graph[n].id).collect()
    }

    /// Degree of a node. O(d).
    pub fn degree(&self, id: &N) -> usize {
        match self.node_index.get(id) {
            Some(&idx) => self.graph.neighbors(idx).count(),
            None => 0,
        }
    }

    /// Largest degree over all nodes (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.graph
            .node_indices()
            .map(|idx| self.graph.neighbors(idx).count())
            .max()
            .unwrap_or(0)
    }

    /// Attributes of a node.
    pub fn node_attributes(&self, id: &N) -> Option<&Attributes> {
        self.node_index.get(id).map(|&idx| &self.graph[idx].attributes)
    }

    /// Mutable attributes of a node.
    pub fn node_attributes_mut(&mut self, id: &N) -> Option<&mut Attributes> {
        let idx = *self.node_index.get(id)?;
        Some(&mut self.graph[idx].attributes)
    }

    /// Attributes of the edge `u`-`v`.
    pub fn edge_attributes(&self, u: &N, v: &N) -> Option<&Attributes> {
        let edge = self.find_edge(u, v)?;
        self.graph.edge_weight(edge)
    }

    /// Mutable attributes of the edge `u`-`v`.
    pub fn edge_attributes_mut(&mut self, u: &N, v: &N) -> Option<&mut Attributes> {
        let edge = self.find_edge(u, v)?;
        self.graph.edge_weight_mut(edge)
    }

    fn find_edge(&self, u: &N, v: &N) -> Option<EdgeIndex> {
        let a = *self.node_index.get(u)?;
        let b = *self.node_index.get(v)?;
        self.graph.find_edge(a, b)
    }

    /// Graph-level attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable graph-level attributes.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Get node index for a key.
    pub fn index_of(&self, id: &N) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Get the node stored at an index.
    pub fn node(&self, idx: NodeIndex) -> Option<&Node<N>> {
        self.graph.node_weight(idx)
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn as_petgraph(&self) -> &UnGraph<Node<N>, Attributes> {
        &self.graph
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Largest node degree. Bounds the neighbor complex dimension.
    pub max_degree: usize,
    /// Edge density in [0, 1].
    pub density: f64,
}

impl<N: NodeKey> Graph<N> {
    /// Compute statistics about the graph.
    pub fn stats(&self) -> GraphStats {
        let node_count = self.node_count();
        let edge_count = self.edge_count();

        let possible = node_count * node_count.saturating_sub(1) / 2;
        let density = if possible > 0 {
            edge_count as f64 / possible as f64
        } else {
            0.0
        };

        GraphStats {
            node_count,
            edge_count,
            max_degree: self.max_degree(),
            density,
        }
    }
}
