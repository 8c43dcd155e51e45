//! Dependency edges.

use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

use crate::reactive::{Node, NodeInner};
use crate::value::Key;

/// "Property `prop` of `node` depends on me."
///
/// Two edges are equal when they name the same property on the same node.
#[derive(Debug, Clone)]
pub struct Edge {
    prop: Key,
    node: Weak<NodeInner>,
}

impl Edge {
    pub fn new(prop: Key, node: &Node) -> Self {
        Self {
            prop,
            node: Rc::downgrade(node.inner()),
        }
    }

    /// The dependent property.
    pub fn prop(&self) -> &Key {
        &self.prop
    }

    /// The node owning the dependent property, if it is still alive.
    pub fn node(&self) -> Option<Node> {
        self.node.upgrade().map(Node::from_inner)
    }

    pub fn is_alive(&self) -> bool {
        self.node.strong_count() > 0
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.prop == other.prop && Weak::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prop.hash(state);
        (self.node.as_ptr() as usize).hash(state);
    }
}
