//! Reactive Accessors
//!
//! This module implements the accessor layer: nodes wrapping nested objects
//! and arrays, computed properties, dependency tracking and events.
//!
//! # Concepts
//!
//! ## Nodes
//!
//! A [`Node`] wraps one object or array of a raw structure. Reading a
//! property returns either a primitive or a child node for a nested
//! container. Children are created lazily and reused, so the same path keeps
//! yielding the same node until its slot is overwritten.
//!
//! ## Computed Properties
//!
//! A property whose raw value is a computed function is evaluated on read.
//! The function receives a [`Tracker`], and every read through the tracker
//! registers the evaluating property as a dependent of the property read.
//! Writing a property re-evaluates and notifies everything that depends on
//! it, then notifies the parent so ancestors observe in-place mutation.
//!
//! ## Events
//!
//! Nodes emit `change` when a value actually differs, `update` whenever a
//! property is written or invalidated, and `insert` / `delete` for array
//! structure changes.
//!
//! # Implementation Notes
//!
//! The tree is single-threaded: nodes are `Rc`-shared and mutable state sits
//! behind `RefCell`. Child to parent and node to root links are `Weak`, and
//! dependency edges hold their reader weakly, so dropping the root handle
//! frees the whole tree.

mod array;
mod context;
mod events;
mod iter;
mod node;
mod snapshot;
mod tracker;

pub use events::{Event, EventKind, IntoEventKind, Listener};
pub use node::{Node, Op, Slot};
pub use tracker::Tracker;

pub(crate) use events::Listeners;
pub(crate) use node::NodeInner;
