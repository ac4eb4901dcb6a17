//! Old entry point names, kept for existing call sites.

use super::{build_clique_complex, build_neighbor_complex};
use crate::{Graph, NodeKey, Result, SimplicialComplex};
use tracing::warn;

/// Renamed to [`build_neighbor_complex`].
#[deprecated(since = "0.1.0", note = "use `build_neighbor_complex` instead")]
pub fn graph_2_neighbor_complex<N: NodeKey>(graph: &Graph<N>) -> Result<SimplicialComplex<N>> {
    warn!(
        deprecated = "graph_2_neighbor_complex",
        replacement = "build_neighbor_complex",
        "`graph_2_neighbor_complex` is deprecated and will be removed in a future version, use `build_neighbor_complex` instead"
    );
    build_neighbor_complex(graph)
}

/// Renamed to [`build_clique_complex`].
#[deprecated(since = "0.1.0", note = "use `build_clique_complex` instead")]
pub fn graph_2_clique_complex<N: NodeKey>(
    graph: &Graph<N>,
    max_dim: Option<usize>,
) -> Result<SimplicialComplex<N>> {
    warn!(
        deprecated = "graph_2_clique_complex",
        replacement = "build_clique_complex",
        "`graph_2_clique_complex` is deprecated and will be removed in a future version, use `build_clique_complex` instead"
    );
    build_clique_complex(graph, max_dim)
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    /// Collects the `replacement` field of every warning.
    #[derive(Clone, Default)]
    struct WarningLog(Arc<Mutex<Vec<String>>>);

    struct Replacement(Option<String>);

    impl Visit for Replacement {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "replacement" {
                self.0 = Some(value.to_string());
            }
        }

        fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
    }

    impl Subscriber for WarningLog {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _span: &Id, _values: &Record<'_>) {}

        fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

        fn event(&self, event: &Event<'_>) {
            if *event.metadata().level() != Level::WARN {
                return;
            }
            let mut visitor = Replacement(None);
            event.record(&mut visitor);
            if let Some(replacement) = visitor.0 {
                self.0.lock().unwrap().push(replacement);
            }
        }

        fn enter(&self, _span: &Id) {}

        fn exit(&self, _span: &Id) {}
    }

    #[test]
    fn test_each_call_warns_with_replacement() {
        let log = WarningLog::default();
        let g = Graph::from_edges([(0, 1), (1, 2)]);

        tracing::subscriber::with_default(log.clone(), || {
            graph_2_neighbor_complex(&g).unwrap();
            graph_2_clique_complex(&g, None).unwrap();
            graph_2_clique_complex(&g, Some(0)).unwrap();
        });

        let warnings = log.0.lock().unwrap().clone();
        assert_eq!(
            warnings,
            vec![
                "build_neighbor_complex",
                "build_clique_complex",
                "build_clique_complex"
            ]
        );
    }

    #[test]
    fn test_current_names_do_not_warn() {
        let log = WarningLog::default();
        let g = Graph::from_edges([(0, 1), (1, 2)]);

        tracing::subscriber::with_default(log.clone(), || {
            build_neighbor_complex(&g).unwrap();
            build_clique_complex(&g, None).unwrap();
        });

        assert!(log.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_neighbor_alias_matches() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);

        let old = graph_2_neighbor_complex(&g).unwrap();
        let new = build_neighbor_complex(&g).unwrap();
        assert_eq!(old.simplex_set(), new.simplex_set());
        assert_eq!(old.dim(), Some(2));
    }

    #[test]
    fn test_clique_alias_matches() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 0)]);

        let sc = graph_2_clique_complex(&g, None).unwrap();
        assert_eq!(sc.dim(), Some(2));
        assert!(sc.contains(&[0, 2, 3]));

        let sc = graph_2_clique_complex(&g, Some(1)).unwrap();
        assert_eq!(sc.dim(), Some(1));
        assert!(!sc.contains(&[0, 1, 2]));
    }
}
