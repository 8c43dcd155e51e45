//! Node Events
//!
//! Every node keeps its own listener registry for four kinds of event:
//!
//! - `change`: a property's value differs after recomputation;
//! - `update`: a property was written or invalidated, changed or not;
//! - `insert` / `delete`: an array grew or shrank at `index` by `count`.
//!
//! `change` and `update` listeners may be registered for the whole node or
//! for a single property. Structural events have no property.
//!
//! Dispatch iterates a snapshot of the listeners taken when the event fires,
//! so a listener that registers or removes listeners does not affect the
//! current dispatch.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use smallvec::SmallVec;

use super::Node;
use crate::error::{Error, Result};
use crate::value::Key;

/// The four event kinds a node can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    Update,
    Insert,
    Delete,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Change => "change",
            EventKind::Update => "update",
            EventKind::Insert => "insert",
            EventKind::Delete => "delete",
        }
    }

    /// Whether events of this kind carry a property.
    pub fn is_property_event(&self) -> bool {
        matches!(self, EventKind::Change | EventKind::Update)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "change" => Ok(EventKind::Change),
            "update" => Ok(EventKind::Update),
            "insert" => Ok(EventKind::Insert),
            "delete" => Ok(EventKind::Delete),
            other => Err(Error::UnknownEvent(other.to_string())),
        }
    }
}

/// Anything that names an event kind: the enum itself or its string form.
pub trait IntoEventKind {
    fn into_event_kind(self) -> Result<EventKind>;
}

impl IntoEventKind for EventKind {
    fn into_event_kind(self) -> Result<EventKind> {
        Ok(self)
    }
}

impl IntoEventKind for &str {
    fn into_event_kind(self) -> Result<EventKind> {
        self.parse()
    }
}

/// A fired event with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Change(Key),
    Update(Key),
    Insert { index: usize, count: usize },
    Delete { index: usize, count: usize },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Change(_) => EventKind::Change,
            Event::Update(_) => EventKind::Update,
            Event::Insert { .. } => EventKind::Insert,
            Event::Delete { .. } => EventKind::Delete,
        }
    }

    /// The property a `change`/`update` event refers to.
    pub fn prop(&self) -> Option<&Key> {
        match self {
            Event::Change(key) | Event::Update(key) => Some(key),
            Event::Insert { .. } | Event::Delete { .. } => None,
        }
    }
}

type Callback = dyn Fn(&Node, &Event);

/// A registered callback. The handle is its identity: registering the same
/// handle twice is a no-op, and `off` removes it by handle.
#[derive(Clone)]
pub struct Listener(Rc<Callback>);

impl Listener {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Node, &Event) + 'static,
    {
        Self(Rc::new(callback))
    }

    pub fn call(&self, node: &Node, event: &Event) {
        (self.0)(node, event)
    }

    pub fn ptr_eq(&self, other: &Listener) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

#[derive(Debug, Clone)]
struct Registration {
    prop: Option<Key>,
    listener: Listener,
}

impl Registration {
    fn is(&self, prop: Option<&Key>, listener: &Listener) -> bool {
        self.prop.as_ref() == prop && self.listener.ptr_eq(listener)
    }

    fn accepts(&self, event: &Event) -> bool {
        match &self.prop {
            None => true,
            Some(prop) => event.prop() == Some(prop),
        }
    }
}

/// Per-node listener registry.
#[derive(Debug, Default)]
pub(crate) struct Listeners {
    registrations: HashMap<EventKind, Vec<Registration>>,
}

impl Listeners {
    /// Register `listener`. Returns `false` if it was already registered
    /// with the same filter.
    pub(crate) fn add(
        &mut self,
        kind: EventKind,
        prop: Option<Key>,
        listener: &Listener,
    ) -> Result<bool> {
        if prop.is_some() && !kind.is_property_event() {
            return Err(Error::MalformedListener { kind });
        }
        let list = self.registrations.entry(kind).or_default();
        if list.iter().any(|r| r.is(prop.as_ref(), listener)) {
            return Ok(false);
        }
        list.push(Registration {
            prop,
            listener: listener.clone(),
        });
        Ok(true)
    }

    /// Remove `listener` registered with the given filter.
    pub(crate) fn remove(
        &mut self,
        kind: EventKind,
        prop: Option<&Key>,
        listener: &Listener,
    ) -> bool {
        let Some(list) = self.registrations.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|r| !r.is(prop, listener));
        list.len() != before
    }

    /// Remove every registration of `kind`.
    pub(crate) fn clear(&mut self, kind: EventKind) -> usize {
        self.registrations.remove(&kind).map_or(0, |list| list.len())
    }

    /// Listeners that should receive `event`, in registration order.
    pub(crate) fn matching(&self, event: &Event) -> SmallVec<[Listener; 4]> {
        self.registrations
            .get(&event.kind())
            .map(|list| {
                list.iter()
                    .filter(|r| r.accepts(event))
                    .map(|r| r.listener.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn count(&self, kind: EventKind) -> usize {
        self.registrations.get(&kind).map_or(0, Vec::len)
    }
}

impl Node {
    /// Register a listener for every event of `kind` on this node.
    ///
    /// `kind` is an [`EventKind`] or its name; unknown names are rejected.
    pub fn on(&self, kind: impl IntoEventKind, listener: &Listener) -> Result<()> {
        let kind = kind.into_event_kind()?;
        self.inner().listeners.borrow_mut().add(kind, None, listener)?;
        Ok(())
    }

    /// Register a `change`/`update` listener for a single property.
    pub fn on_prop(
        &self,
        kind: impl IntoEventKind,
        key: impl Into<Key>,
        listener: &Listener,
    ) -> Result<()> {
        let kind = kind.into_event_kind()?;
        let key = self.normalize(key.into());
        self.inner().listeners.borrow_mut().add(kind, Some(key), listener)?;
        Ok(())
    }

    /// Remove a listener registered with [`Node::on`]. Returns whether it
    /// was registered.
    pub fn off(&self, kind: impl IntoEventKind, listener: &Listener) -> Result<bool> {
        let kind = kind.into_event_kind()?;
        Ok(self.inner().listeners.borrow_mut().remove(kind, None, listener))
    }

    /// Remove a listener registered with [`Node::on_prop`].
    pub fn off_prop(
        &self,
        kind: impl IntoEventKind,
        key: impl Into<Key>,
        listener: &Listener,
    ) -> Result<bool> {
        let kind = kind.into_event_kind()?;
        let key = self.normalize(key.into());
        Ok(self.inner().listeners.borrow_mut().remove(kind, Some(&key), listener))
    }

    /// Remove every listener of `kind`. Returns how many were removed.
    pub fn off_all(&self, kind: impl IntoEventKind) -> Result<usize> {
        let kind = kind.into_event_kind()?;
        Ok(self.inner().listeners.borrow_mut().clear(kind))
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.inner().listeners.borrow().count(kind)
    }

    /// Fire `event` on this node.
    ///
    /// Listeners run with this node as receiver, in registration order,
    /// over the set registered when the event fired.
    pub fn trigger(&self, event: Event) {
        let listeners = self.inner().listeners.borrow().matching(&event);
        if listeners.is_empty() {
            return;
        }
        tracing::trace!(event = %event.kind(), listeners = listeners.len(), "dispatch");
        for listener in listeners {
            listener.call(self, &event);
        }
    }
}
