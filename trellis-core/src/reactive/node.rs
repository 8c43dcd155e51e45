//! Node Implementation
//!
//! A node is the reactive accessor around one object or array in the raw
//! structure. It owns that slice's cache, its lazily created child nodes, its
//! dependency table and its listeners.
//!
//! # How Reads Work
//!
//! 1. Resolve the raw value stored under the property.
//! 2. If it is a computed function, evaluate it with a [`Tracker`] bound to
//!    this node, so every property the function reads records a dependency.
//! 3. Cache the result (a shallow copy, so later in-place mutation can be
//!    detected by comparison).
//! 4. Objects and arrays come back as child nodes, created once and reused
//!    until the property is overwritten or invalidated.
//!
//! # How Writes Work
//!
//! A write stores the value (or hands it to the computed function's setter
//! form), discards the child node for that property and runs update
//! propagation:
//!
//! 1. Re-evaluate the property and deep-compare against the cache. A real
//!    difference fires `change`; the cache is refreshed either way.
//! 2. Invalidate and propagate through every recorded dependent, in the order
//!    the edges were first recorded.
//! 3. Propagate to the parent under this node's property, so ancestors see
//!    in-place mutation of their children.
//! 4. Fire `update` unconditionally.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::context::{EvaluationContext, Phase};
use super::Tracker;
use crate::config::Options;
use crate::error::{Error, Result};
use crate::graph::{DependencyTable, Edge};
use crate::reactive::{Event, Listeners};
use crate::value::{deep_eq, identical, shallow_clone, Access, Container, Key, Value};

/// The result of reading a property: a primitive or a child node.
#[derive(Debug, Clone)]
pub enum Slot {
    /// A primitive, `Undefined` for absent properties.
    Leaf(Value),
    /// A child node wrapping a nested object or array.
    Node(Node),
}

impl Slot {
    /// Whether the read produced a child node.
    pub fn is_node(&self) -> bool {
        matches!(self, Slot::Node(_))
    }

    /// The number held by a leaf, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Slot::Leaf(value) => value.as_f64(),
            Slot::Node(_) => None,
        }
    }

    /// The boolean held by a leaf, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Slot::Leaf(value) => value.as_bool(),
            Slot::Node(_) => None,
        }
    }

    /// The string held by a leaf, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Slot::Leaf(value) => value.as_str(),
            Slot::Node(_) => None,
        }
    }

    /// The child node, if the slot holds one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Slot::Node(node) => Some(node),
            Slot::Leaf(_) => None,
        }
    }

    /// Consume the slot, keeping the child node if there is one.
    pub fn into_node(self) -> Option<Node> {
        match self {
            Slot::Node(node) => Some(node),
            Slot::Leaf(_) => None,
        }
    }

    /// The raw value: the leaf itself, or the container a node wraps.
    pub fn into_value(self) -> Value {
        match self {
            Slot::Leaf(value) => value,
            Slot::Node(node) => node.values(),
        }
    }
}

/// An explicit accessor operation.
#[derive(Debug, Clone)]
pub enum Op {
    /// Read a property.
    Get(Key),
    /// Write a property.
    Set(Key, Value),
    /// Re-run update propagation for a property without writing it.
    Propagate(Key),
}

impl Op {
    /// Map a call with an optional value onto an operation. A missing value
    /// and an `Undefined` value both mean "read".
    pub fn from_call(key: impl Into<Key>, value: Option<Value>) -> Op {
        match value {
            Some(value) if !value.is_undefined() => Op::Set(key.into(), value),
            _ => Op::Get(key.into()),
        }
    }
}

/// Mutable per-node state.
#[derive(Debug, Default)]
pub(crate) struct NodeState {
    /// Last observed value per property (raw, never wrapped).
    pub(crate) cache: HashMap<Key, Value>,
    /// Child nodes for properties holding objects or arrays.
    pub(crate) children: HashMap<Key, Node>,
    /// Who reads which of this node's properties.
    pub(crate) deps: DependencyTable,
    /// Element count, for array-backed nodes.
    pub(crate) len: Option<usize>,
}

#[derive(Debug)]
pub(crate) struct NodeInner {
    pub(crate) values: Container,
    pub(crate) parent: Option<Weak<NodeInner>>,
    pub(crate) prop: Option<Key>,
    pub(crate) root: Weak<NodeInner>,
    pub(crate) context: Rc<EvaluationContext>,
    pub(crate) state: RefCell<NodeState>,
    pub(crate) listeners: RefCell<Listeners>,
}

impl NodeInner {
    fn new(
        values: Container,
        parent: Option<Weak<NodeInner>>,
        prop: Option<Key>,
        root: Weak<NodeInner>,
        context: Rc<EvaluationContext>,
    ) -> Self {
        let len = values.is_array().then(|| values.len());
        Self {
            values,
            parent,
            prop,
            root,
            context,
            state: RefCell::new(NodeState {
                len,
                ..NodeState::default()
            }),
            listeners: RefCell::new(Listeners::default()),
        }
    }
}

/// A reactive handle on an object or array. Cloning is cheap and yields the
/// same node.
#[derive(Clone)]
pub struct Node(Rc<NodeInner>);

impl Node {
    /// Wrap a structure with default [`Options`].
    pub fn wrap(value: impl Into<Value>) -> Result<Self> {
        Self::with_options(value, Options::default())
    }

    /// Wrap a structure. Only objects and arrays can be wrapped.
    pub fn with_options(value: impl Into<Value>, options: Options) -> Result<Self> {
        let values = value.into().as_container().ok_or(Error::NotAContainer)?;
        let context = EvaluationContext::new(options);
        let inner =
            Rc::new_cyclic(|root| NodeInner::new(values, None, None, root.clone(), context));
        Ok(Node(inner))
    }

    /// Parse a JSON document and wrap it.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(source)?;
        Self::wrap(json)
    }

    fn child(&self, prop: Key, values: Container) -> Node {
        Node(Rc::new(NodeInner::new(
            values,
            Some(Rc::downgrade(&self.0)),
            Some(prop),
            self.0.root.clone(),
            Rc::clone(&self.0.context),
        )))
    }

    pub(crate) fn from_inner(inner: Rc<NodeInner>) -> Self {
        Node(inner)
    }

    pub(crate) fn inner(&self) -> &Rc<NodeInner> {
        &self.0
    }

    fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// The raw object or array this node wraps (a shared handle).
    pub fn values(&self) -> Value {
        self.0.values.to_value()
    }

    /// The wrapped storage as a [`Container`].
    pub fn container(&self) -> &Container {
        &self.0.values
    }

    /// The node holding this one, or `None` for the root (or once the
    /// parent has been dropped).
    pub fn parent(&self) -> Option<Node> {
        self.0.parent.as_ref()?.upgrade().map(Node)
    }

    /// The root of the tree, if it is still alive.
    pub fn root(&self) -> Option<Node> {
        self.0.root.upgrade().map(Node)
    }

    /// The property this node is stored under in its parent.
    pub fn prop(&self) -> Option<&Key> {
        self.0.prop.as_ref()
    }

    /// Whether this node was created by wrapping rather than by a read.
    pub fn is_root(&self) -> bool {
        self.0.parent.is_none()
    }

    /// Whether the wrapped storage is an array.
    pub fn is_array(&self) -> bool {
        self.0.values.is_array()
    }

    /// Tracked element count for array-backed nodes.
    pub fn len(&self) -> Option<usize> {
        self.0.state.borrow().len
    }

    /// Whether the wrapped object or array has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.values.is_empty()
    }

    /// The options shared by every node of this tree.
    pub fn options(&self) -> &Options {
        self.0.context.options()
    }

    /// Whether both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Live dependents of `key`: `(property, node)` pairs that read it.
    pub fn dependents(&self, key: impl Into<Key>) -> Vec<(Key, Node)> {
        let key = self.normalize(key.into());
        self.0
            .state
            .borrow()
            .deps
            .dependents(&key)
            .into_iter()
            .filter_map(|edge| edge.node().map(|node| (edge.prop().clone(), node)))
            .collect()
    }

    /// The cached value of `key`, if it has been read or propagated.
    pub fn cached(&self, key: impl Into<Key>) -> Option<Value> {
        let key = self.normalize(key.into());
        self.0.state.borrow().cache.get(&key).cloned()
    }

    // ------------------------------------------------------------------
    // Accessor operations
    // ------------------------------------------------------------------

    /// Dispatch an explicit operation. Reads return their slot.
    pub fn call(&self, op: Op) -> Result<Option<Slot>> {
        match op {
            Op::Get(key) => self.get(key).map(Some),
            Op::Set(key, value) => self.set(key, value).map(|()| None),
            Op::Propagate(key) => self.update(key).map(|()| None),
        }
    }

    /// Read when `value` is absent or `Undefined`, write otherwise.
    pub fn access(&self, key: impl Into<Key>, value: Option<Value>) -> Result<Option<Slot>> {
        self.call(Op::from_call(key, value))
    }

    /// Read a property.
    pub fn get(&self, key: impl Into<Key>) -> Result<Slot> {
        let key = self.normalize(key.into());
        self.read(&key)
    }

    /// Write a property and propagate the update.
    ///
    /// Writing `Undefined` is treated as a read.
    pub fn set(&self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        let key = self.normalize(key.into());
        let value = value.into();
        if value.is_undefined() {
            tracing::trace!(prop = %key, "undefined write treated as read");
            self.read(&key)?;
            return Ok(());
        }
        self.write(&key, value)
    }

    /// Run update propagation for a property without writing it.
    pub fn update(&self, key: impl Into<Key>) -> Result<()> {
        let key = self.normalize(key.into());
        self.propagate(&key)
    }

    pub(crate) fn normalize(&self, key: Key) -> Key {
        self.0.values.normalize(key)
    }

    pub(crate) fn read(&self, key: &Key) -> Result<Slot> {
        let value = self.evaluate(key)?;
        tracing::trace!(prop = %key, "read");
        self.0
            .state
            .borrow_mut()
            .cache
            .insert(key.clone(), shallow_clone(&value));
        Ok(self.slot(key, value))
    }

    /// Fresh value of `key`, bypassing the cache.
    fn evaluate(&self, key: &Key) -> Result<Value> {
        match self.0.values.get(key) {
            Value::Computed(computed) => {
                let _guard = self.0.context.enter(self.id(), key, Phase::Get)?;
                tracing::trace!(prop = %key, nested = self.0.context.evaluating(), "evaluate");
                computed.call(&Tracker::new(self, key), Access::Get)
            }
            value => Ok(value),
        }
    }

    fn slot(&self, key: &Key, value: Value) -> Slot {
        let Some(container) = value.as_container() else {
            return Slot::Leaf(value);
        };
        let mut state = self.0.state.borrow_mut();
        let child = state
            .children
            .entry(key.clone())
            .or_insert_with(|| self.child(key.clone(), container))
            .clone();
        Slot::Node(child)
    }

    fn write(&self, key: &Key, value: Value) -> Result<()> {
        let old = self.evaluate(key)?;

        match self.0.values.get(key) {
            Value::Computed(computed) => {
                let _guard = self.0.context.enter(self.id(), key, Phase::Set)?;
                computed.call(&Tracker::new(self, key), Access::Set(value.clone()))?;
            }
            _ => {
                self.0.values.set(key, value.clone())?;
                self.refresh_len();
            }
        }
        self.forget_child(key);

        let unchanged = identical(&old, &value);
        tracing::debug!(prop = %key, unchanged, "write");
        if unchanged && !self.options().notify_identical_writes {
            return Ok(());
        }
        self.propagate(key)
    }

    pub(crate) fn propagate(&self, key: &Key) -> Result<()> {
        let _frame = self.0.context.enter(self.id(), key, Phase::Propagate)?;
        let _depth = self.0.context.descend()?;
        let span = tracing::debug_span!("propagate", prop = %key, depth = self.0.context.depth());
        let _entered = span.enter();

        let fresh = self.evaluate(key)?;
        let changed = {
            let mut state = self.0.state.borrow_mut();
            let changed = match state.cache.get(key) {
                Some(cached) => !deep_eq(cached, &fresh),
                None => !fresh.is_undefined(),
            };
            state.cache.insert(key.clone(), shallow_clone(&fresh));
            changed
        };
        if changed {
            tracing::trace!(prop = %key, "changed");
            self.trigger(Event::Change(key.clone()));
        }

        let dependents = self.0.state.borrow().deps.dependents(key);
        for edge in dependents {
            if let Some(node) = edge.node() {
                node.forget_child(edge.prop());
                node.propagate(edge.prop())?;
            }
        }

        if let (Some(parent), Some(prop)) = (self.parent(), self.prop()) {
            parent.propagate(prop)?;
        }

        self.trigger(Event::Update(key.clone()));
        Ok(())
    }

    pub(crate) fn record_dependent(&self, key: &Key, prop: &Key, reader: &Node) {
        let recorded = self
            .0
            .state
            .borrow_mut()
            .deps
            .record(key.clone(), Edge::new(prop.clone(), reader));
        if recorded {
            tracing::trace!(prop = %key, dependent = %prop, "dependency recorded");
        }
    }

    pub(crate) fn forget_child(&self, key: &Key) {
        let removed = self.0.state.borrow_mut().children.remove(key);
        drop(removed);
    }

    /// Drop every cached value and child node. Used after array mutations
    /// where any index may have shifted.
    pub(crate) fn forget_all(&self) {
        let (cache, children) = {
            let mut state = self.0.state.borrow_mut();
            (
                std::mem::take(&mut state.cache),
                std::mem::take(&mut state.children),
            )
        };
        drop(cache);
        drop(children);
    }

    pub(crate) fn refresh_len(&self) {
        if self.is_array() {
            self.0.state.borrow_mut().len = Some(self.0.values.len());
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("prop", &self.0.prop)
            .field("is_array", &self.is_array())
            .field("len", &self.0.state.try_borrow().ok().and_then(|state| state.len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::{EventKind, Listener};
    use crate::value::{Array, Object};

    fn record(node: &Node, kind: EventKind) -> Rc<RefCell<Vec<Event>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        node.on(kind, &Listener::new(move |_, event| sink.borrow_mut().push(event.clone())))
            .unwrap();
        log
    }

    fn doubled() -> Object {
        Object::new().with("b", 3).with(
            "a",
            Value::computed(|t| Ok(Value::from(t.number("b")?.unwrap_or(0.0) * 2.0))),
        )
    }

    #[test]
    fn only_containers_can_be_wrapped() {
        assert!(matches!(Node::wrap(3), Err(Error::NotAContainer)));
        assert!(Node::wrap(Array::new()).unwrap().is_array());
    }

    #[test]
    fn leaf_round_trip() {
        let node = Node::wrap(Object::new()).unwrap();
        node.set("name", "ada").unwrap();
        assert_eq!(node.get("name").unwrap().as_str(), Some("ada"));
        assert!(matches!(node.get("missing").unwrap(), Slot::Leaf(Value::Undefined)));
    }

    #[test]
    fn reads_populate_the_cache() {
        let node = Node::wrap(doubled()).unwrap();
        assert!(node.cached("a").is_none());
        assert_eq!(node.get("a").unwrap().as_f64(), Some(6.0));
        assert_eq!(node.cached("a"), Some(Value::from(6)));
        // The tracked read of `b` was cached too.
        assert_eq!(node.cached("b"), Some(Value::from(3)));
    }

    #[test]
    fn computed_reads_record_dependents() {
        let node = Node::wrap(doubled()).unwrap();
        assert!(node.dependents("b").is_empty());

        node.get("a").unwrap();
        node.get("a").unwrap();

        let dependents = node.dependents("b");
        assert_eq!(dependents.len(), 1);
        assert_eq!(dependents[0].0, Key::from("a"));
        assert!(dependents[0].1.ptr_eq(&node));
        assert!(node.dependents("a").is_empty());
    }

    #[test]
    fn write_recomputes_dependents() {
        let node = Node::wrap(doubled()).unwrap();
        node.get("a").unwrap();
        let changes = record(&node, EventKind::Change);

        node.set("b", 5).unwrap();

        assert_eq!(node.cached("a"), Some(Value::from(10)));
        assert_eq!(node.get("a").unwrap().as_f64(), Some(10.0));
        assert_eq!(
            *changes.borrow(),
            vec![Event::Change(Key::from("b")), Event::Change(Key::from("a"))]
        );
    }

    #[test]
    fn update_fires_after_dependents() {
        let node = Node::wrap(doubled()).unwrap();
        node.get("a").unwrap();
        let updates = record(&node, EventKind::Update);

        node.set("b", 4).unwrap();

        assert_eq!(
            *updates.borrow(),
            vec![Event::Update(Key::from("a")), Event::Update(Key::from("b"))]
        );
    }

    #[test]
    fn identical_writes_can_skip_propagation() {
        let options = Options::default().with_identical_writes(false);
        let node = Node::with_options(doubled(), options).unwrap();
        node.get("a").unwrap();
        let updates = record(&node, EventKind::Update);

        node.set("b", 3).unwrap();
        assert!(updates.borrow().is_empty());

        node.set("b", 4).unwrap();
        assert_eq!(updates.borrow().len(), 2);
    }

    #[test]
    fn children_are_reused_until_overwritten() {
        let node = Node::wrap(Object::new().with("inner", Object::new().with("x", 1))).unwrap();
        let first = node.get("inner").unwrap().into_node().unwrap();
        let second = node.get("inner").unwrap().into_node().unwrap();
        assert!(first.ptr_eq(&second));
        assert_eq!(first.prop(), Some(&Key::from("inner")));
        assert!(first.parent().unwrap().ptr_eq(&node));
        assert!(first.root().unwrap().ptr_eq(&node));

        node.set("inner", Object::new().with("x", 2)).unwrap();
        let third = node.get("inner").unwrap().into_node().unwrap();
        assert!(!third.ptr_eq(&first));
        assert_eq!(third.get("x").unwrap().as_f64(), Some(2.0));
    }

    #[test]
    fn child_writes_propagate_to_the_parent_slot() {
        let node = Node::wrap(Object::new().with("inner", Object::new().with("x", 1))).unwrap();
        let inner = node.get("inner").unwrap().into_node().unwrap();
        let changes = record(&node, EventKind::Change);

        inner.set("x", 2).unwrap();

        assert_eq!(*changes.borrow(), vec![Event::Change(Key::from("inner"))]);
        // The child survives its own mutation.
        assert!(node.get("inner").unwrap().into_node().unwrap().ptr_eq(&inner));
    }

    #[test]
    fn computed_setter_receives_the_value() {
        let state = Object::new().with("celsius", 0).with(
            "fahrenheit",
            Value::computed_rw(|t, access| match access {
                Access::Get => {
                    let celsius = t.number("celsius")?.unwrap_or(0.0);
                    Ok(Value::from(celsius * 9.0 / 5.0 + 32.0))
                }
                Access::Set(value) => {
                    let f = value.as_f64().unwrap_or(32.0);
                    t.set("celsius", (f - 32.0) * 5.0 / 9.0)?;
                    Ok(Value::Undefined)
                }
            }),
        );
        let node = Node::wrap(state).unwrap();

        node.set("fahrenheit", 212).unwrap();
        assert_eq!(node.get("celsius").unwrap().as_f64(), Some(100.0));
        assert_eq!(node.get("fahrenheit").unwrap().as_f64(), Some(212.0));
        assert!(node.values().as_container().is_some());
    }

    #[test]
    fn undefined_write_is_a_read() {
        let node = Node::wrap(Object::new().with("x", 1)).unwrap();
        let updates = record(&node, EventKind::Update);

        node.set("x", Value::Undefined).unwrap();

        assert_eq!(node.get("x").unwrap().as_f64(), Some(1.0));
        assert!(updates.borrow().is_empty());
    }

    #[test]
    fn op_dispatch() {
        let node = Node::wrap(Object::new()).unwrap();

        assert!(node.call(Op::Set(Key::from("x"), Value::from(7))).unwrap().is_none());
        let read = node.call(Op::Get(Key::from("x"))).unwrap().unwrap();
        assert_eq!(read.as_f64(), Some(7.0));

        let read = node.access("x", Some(Value::Undefined)).unwrap().unwrap();
        assert_eq!(read.as_f64(), Some(7.0));

        let updates = record(&node, EventKind::Update);
        node.call(Op::Propagate(Key::from("x"))).unwrap();
        assert_eq!(*updates.borrow(), vec![Event::Update(Key::from("x"))]);
    }

    #[test]
    fn cycles_are_reported() {
        let state = Object::new()
            .with("a", Value::computed(|t| Ok(t.get("b")?.into_value())))
            .with("b", Value::computed(|t| Ok(t.get("a")?.into_value())));
        let node = Node::wrap(state).unwrap();

        let err = node.get("a").unwrap_err();
        assert!(matches!(err, Error::Cycle { prop } if prop == Key::from("a")));
        // The guard unwound: an unrelated read still works.
        node.set("c", 1).unwrap();
        assert_eq!(node.get("c").unwrap().as_f64(), Some(1.0));
    }

    #[test]
    fn reading_the_own_parent_slot_is_a_propagation_cycle() {
        let state = Object::new().with(
            "panel",
            Object::new().with(
                "size",
                Value::computed(|t| {
                    let parent = t.parent().ok_or_else(|| Error::custom("detached"))?;
                    let panel = parent.get("panel")?.into_node();
                    Ok(Value::from(panel.map_or(0, |panel| panel.container().len())))
                }),
            ),
        );
        let node = Node::wrap(state).unwrap();
        let panel = node.get("panel").unwrap().into_node().unwrap();
        assert_eq!(panel.get("size").unwrap().as_f64(), Some(1.0));

        // panel.w -> node.panel -> panel.size -> node.panel again.
        let err = panel.set("w", 1).unwrap_err();
        assert!(matches!(err, Error::Cycle { prop } if prop == Key::from("panel")));
    }

    #[test]
    fn propagation_depth_is_bounded() {
        let options = Options::default().with_max_depth(1);
        let state = Object::new().with("inner", Object::new().with("x", 1));
        let node = Node::with_options(state, options).unwrap();
        let inner = node.get("inner").unwrap().into_node().unwrap();

        let err = inner.set("x", 2).unwrap_err();
        assert!(matches!(err, Error::DepthExceeded { limit: 1 }));
        // No rollback: the raw write stands.
        assert_eq!(inner.get("x").unwrap().as_f64(), Some(2.0));
    }

    #[test]
    fn computed_errors_propagate_unmodified() {
        let state = Object::new().with("boom", Value::computed(|_| Err(Error::custom("no"))));
        let node = Node::wrap(state).unwrap();
        assert!(matches!(node.get("boom"), Err(Error::Custom(message)) if message == "no"));
    }

    #[test]
    fn array_keys_normalize() {
        let node = Node::wrap(Array::from_iter([10, 20])).unwrap();
        assert_eq!(node.get("1").unwrap().as_f64(), Some(20.0));
        node.set(3, 40).unwrap();
        assert_eq!(node.len(), Some(4));
        assert!(matches!(node.set("name", 1), Err(Error::InvalidIndex { .. })));
    }

    #[test]
    fn huge_array_indices_are_rejected() {
        let node = Node::wrap(Array::from_iter([1])).unwrap();
        let updates = record(&node, EventKind::Update);

        let err = node.set(usize::MAX, 1).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { key } if key == Key::Index(usize::MAX)));
        assert!(node.set("18446744073709551615", 1).is_err());

        assert_eq!(node.len(), Some(1));
        assert!(updates.borrow().is_empty());
    }

    #[test]
    fn from_json_source() {
        let node = Node::from_json_str(r#"{ "user": { "name": "ada" } }"#).unwrap();
        let user = node.get("user").unwrap().into_node().unwrap();
        assert_eq!(user.get("name").unwrap().as_str(), Some("ada"));
    }
}
