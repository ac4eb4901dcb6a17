//! Node keys and attribute maps.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Key/value attributes attached to nodes, edges, simplices and whole
/// graphs or complexes.
pub type Attributes = HashMap<String, serde_json::Value>;

/// Anything usable as a node identifier.
///
/// `Ord` gives simplices a canonical storage order; identity is still the
/// node set.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> NodeKey for T {}

/// A node (vertex) of a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<N> {
    /// Unique identifier.
    pub id: N,

    /// Additional properties as key-value pairs.
    #[serde(default)]
    pub attributes: Attributes,
}

impl<N> Node<N> {
    /// Create a node with no attributes.
    pub fn new(id: N) -> Self {
        Self {
            id,
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Build an [`Attributes`] map from `(key, value)` pairs.
///
/// ```rust
/// use lattix_lift::attributes;
///
/// let attrs = attributes([("weight", 10)]);
/// assert_eq!(attrs["weight"], 10);
/// ```
pub fn attributes<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Attributes
where
    K: Into<String>,
    V: Into<serde_json::Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
