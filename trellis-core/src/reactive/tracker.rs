//! Dependency Tracker
//!
//! A tracker is the accessor a computed function receives while it runs. It
//! remembers which property is being evaluated (`prop`) and on which node
//! (`reader`), and reads from a target node (the reader itself, its parent,
//! or the root).
//!
//! Every read through the tracker records the edge `(prop, reader)` in the
//! *target's* dependency table before delegating to the target's normal read.
//! Tracking is therefore a side effect of reading; a computed function never
//! registers dependencies explicitly.

use super::{Node, Slot};
use crate::error::Result;
use crate::value::{Key, Value};

#[derive(Debug, Clone)]
pub struct Tracker {
    reader: Node,
    prop: Key,
    target: Node,
}

impl Tracker {
    pub(crate) fn new(reader: &Node, prop: &Key) -> Self {
        Self {
            reader: reader.clone(),
            prop: prop.clone(),
            target: reader.clone(),
        }
    }

    fn retarget(&self, target: Node) -> Self {
        Self {
            reader: self.reader.clone(),
            prop: self.prop.clone(),
            target,
        }
    }

    /// Read `key` from the target node and record the dependency.
    pub fn get(&self, key: impl Into<Key>) -> Result<Slot> {
        let key = self.target.normalize(key.into());
        self.target.record_dependent(&key, &self.prop, &self.reader);
        self.target.read(&key)
    }

    /// Shorthand for reading a number; non-numbers yield `None`.
    pub fn number(&self, key: impl Into<Key>) -> Result<Option<f64>> {
        Ok(self.get(key)?.as_f64())
    }

    /// Write `key` on the target node. Writes are not dependencies.
    pub fn set(&self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        self.target.set(key, value)
    }

    /// The same tracker reading from the evaluating node itself.
    pub fn this(&self) -> Tracker {
        self.retarget(self.reader.clone())
    }

    /// A tracker reading from the target's parent.
    pub fn parent(&self) -> Option<Tracker> {
        self.target.parent().map(|parent| self.retarget(parent))
    }

    /// A tracker reading from the root of the tree.
    pub fn root(&self) -> Option<Tracker> {
        self.target.root().map(|root| self.retarget(root))
    }

    /// The node reads are directed at.
    pub fn node(&self) -> &Node {
        &self.target
    }

    /// The node owning the property being evaluated.
    pub fn reader(&self) -> &Node {
        &self.reader
    }

    /// The property being evaluated.
    pub fn prop(&self) -> &Key {
        &self.prop
    }
}
