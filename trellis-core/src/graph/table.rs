//! Per-node dependency table.

use indexmap::{IndexMap, IndexSet};

use super::Edge;
use crate::value::Key;

/// Maps each property to the ordered set of edges that read it.
#[derive(Debug, Default)]
pub struct DependencyTable {
    edges: IndexMap<Key, IndexSet<Edge>>,
}

impl DependencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `edge` read `key`. Returns `false` if it was already known.
    ///
    /// Dead edges for the same key are dropped while we are here.
    pub fn record(&mut self, key: Key, edge: Edge) -> bool {
        let dependents = self.edges.entry(key).or_default();
        dependents.retain(Edge::is_alive);
        dependents.insert(edge)
    }

    /// Edges reading `key`, in the order they were first recorded.
    ///
    /// Returns an owned list so callers can re-enter the table while walking
    /// it.
    pub fn dependents(&self, key: &Key) -> Vec<Edge> {
        self.edges
            .get(key)
            .map(|set| set.iter().filter(|edge| edge.is_alive()).cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::Node;
    use crate::value::Object;

    #[test]
    fn record_has_set_semantics_per_pair() {
        let node = Node::wrap(Object::new()).unwrap();
        let mut table = DependencyTable::new();

        assert!(table.record(Key::from("b"), Edge::new(Key::from("a"), &node)));
        assert!(!table.record(Key::from("b"), Edge::new(Key::from("a"), &node)));
        assert!(table.record(Key::from("b"), Edge::new(Key::from("c"), &node)));

        let props: Vec<_> = table
            .dependents(&Key::from("b"))
            .iter()
            .map(|edge| edge.prop().clone())
            .collect();
        assert_eq!(props, vec![Key::from("a"), Key::from("c")]);
    }

    #[test]
    fn dead_readers_are_skipped_and_pruned() {
        let keep = Node::wrap(Object::new()).unwrap();
        let gone = Node::wrap(Object::new()).unwrap();
        let mut table = DependencyTable::new();

        table.record(Key::from("x"), Edge::new(Key::from("p"), &gone));
        drop(gone);
        assert!(table.dependents(&Key::from("x")).is_empty());

        assert!(table.record(Key::from("x"), Edge::new(Key::from("q"), &keep)));
        let dependents = table.dependents(&Key::from("x"));
        assert_eq!(dependents.len(), 1);
        assert_eq!(dependents[0].prop(), &Key::from("q"));
    }

    #[test]
    fn unknown_keys_have_no_dependents() {
        let table = DependencyTable::new();
        assert!(table.dependents(&Key::from("nothing")).is_empty());
    }
}
