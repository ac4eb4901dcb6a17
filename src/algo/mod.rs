//! Graph primitives consumed by the lifting rules.

/// Enumeration of all cliques in non-decreasing size order.
pub mod cliques;

/// Graph complement.
pub mod complement;

/// k-th graph power.
pub mod power;

/// Unweighted shortest-path distances and diameter.
pub mod distance;

/// Connected components algorithm.
pub mod components;

pub use cliques::{all_cliques, AllCliques};
pub use complement::complement;
pub use components::{component_stats, connected_components, ComponentStats};
pub use distance::{bfs_distances, diameter};
pub use power::power;
