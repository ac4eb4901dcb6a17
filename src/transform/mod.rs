//! Lifting rules from graphs to simplicial complexes.
//!
//! | Rule | Simplices | Attributes copied |
//! |------|-----------|-------------------|
//! | Clique | pairwise-adjacent node sets | node, edge, graph |
//! | Neighbor | each node with its neighbours (and all subsets) | none |
//! | Independent set | pairwise non-adjacent node sets | node |
//! | Power | cliques of the k-th graph power | node |
//!
//! The independent set and power rules preprocess the graph and then build
//! a clique complex. Every builder returns a fresh complex and leaves the
//! input graph untouched.
//!
//! # Configuration
//!
//! [`LiftConfig`] names a rule and an optional dimension bound, and can be
//! loaded from JSON:
//!
//! ```rust
//! use lattix_lift::{lift, Graph, LiftConfig};
//!
//! let config = LiftConfig::from_json(r#"{"rule": {"kind": "power", "power": 2}}"#).unwrap();
//! let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
//!
//! assert_eq!(lift(&g, &config).unwrap().dim(), Some(3));
//! ```

mod clique;
mod independent_set;
mod legacy;
mod neighbor;
mod power;

pub use clique::build_clique_complex;
pub use independent_set::build_independent_set_complex;
#[allow(deprecated)]
pub use legacy::{graph_2_clique_complex, graph_2_neighbor_complex};
pub use neighbor::build_neighbor_complex;
pub use power::build_power_complex;

use crate::{Error, Graph, NodeKey, Result, SimplicialComplex};
use serde::{Deserialize, Serialize};

/// Which lifting rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LiftRule {
    /// Clique complex.
    #[default]
    Clique,
    /// Neighbor complex. Takes no dimension bound.
    Neighbor,
    /// Clique complex of the complement.
    IndependentSet,
    /// Clique complex of the `power`-th graph power (`power >= 1`).
    Power {
        /// Hop distance joined into an edge.
        power: usize,
    },
}

/// Lifting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftConfig {
    /// Rule to apply (default: clique).
    pub rule: LiftRule,
    /// Maximum simplex dimension; `None` means unbounded.
    pub max_dim: Option<usize>,
}

impl LiftConfig {
    /// Configuration for `rule` without a dimension bound.
    pub fn new(rule: LiftRule) -> Self {
        Self { rule, max_dim: None }
    }

    /// Bound the dimension of the result.
    pub fn with_max_dim(mut self, max_dim: usize) -> Self {
        self.max_dim = Some(max_dim);
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for a graph power of 0, or a dimension
    /// bound on the neighbor rule.
    pub fn validate(&self) -> Result<()> {
        match (self.rule, self.max_dim) {
            (LiftRule::Power { power: 0 }, _) => Err(Error::InvalidArgument(
                "graph power 0 must be greater than 0".to_string(),
            )),
            (LiftRule::Neighbor, Some(d)) => Err(Error::InvalidArgument(format!(
                "the neighbor complex takes no dimension bound (got max_dim = {d})"
            ))),
            _ => Ok(()),
        }
    }
}

/// Lift `graph` with the rule and bound in `config`.
pub fn lift<N: NodeKey>(graph: &Graph<N>, config: &LiftConfig) -> Result<SimplicialComplex<N>> {
    config.validate()?;

    match config.rule {
        LiftRule::Clique => build_clique_complex(graph, config.max_dim),
        LiftRule::Neighbor => build_neighbor_complex(graph),
        LiftRule::IndependentSet => build_independent_set_complex(graph, config.max_dim),
        LiftRule::Power { power } => build_power_complex(graph, power, config.max_dim),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_unbounded_clique() {
        let config = LiftConfig::from_json("{}").unwrap();
        assert_eq!(config, LiftConfig::default());
        assert_eq!(config.rule, LiftRule::Clique);
        assert_eq!(config.max_dim, None);
    }

    #[test]
    fn test_parse_rules() {
        let config = LiftConfig::from_json(r#"{"rule": {"kind": "independent_set"}, "max_dim": 1}"#).unwrap();
        assert_eq!(config, LiftConfig::new(LiftRule::IndependentSet).with_max_dim(1));

        let config = LiftConfig::from_json(r#"{"rule": {"kind": "power", "power": 3}}"#).unwrap();
        assert_eq!(config.rule, LiftRule::Power { power: 3 });
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            LiftConfig::from_json(r#"{"rule": {"kind": "power", "power": 0}}"#),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            LiftConfig::from_json(r#"{"rule": {"kind": "neighbor"}, "max_dim": 2}"#),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            LiftConfig::from_json(r#"{"max_dim": -1}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_lift_dispatch() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);

        let dims: Vec<Option<usize>> = [
            LiftConfig::new(LiftRule::Clique),
            LiftConfig::new(LiftRule::Neighbor),
            LiftConfig::new(LiftRule::IndependentSet),
            LiftConfig::new(LiftRule::Power { power: 2 }).with_max_dim(2),
        ]
        .iter()
        .map(|config| lift(&g, config).unwrap().dim())
        .collect();

        assert_eq!(dims, vec![Some(1), Some(2), Some(1), Some(2)]);
    }

    #[test]
    fn test_lift_rejects_before_building() {
        let g = Graph::from_edges([(0, 1)]);
        let config = LiftConfig::new(LiftRule::Power { power: 0 });
        assert!(matches!(lift(&g, &config), Err(Error::InvalidArgument(_))));
    }
}
