//! Trellis Core
//!
//! This crate provides a reactive accessor layer over plain nested state.
//! It implements:
//!
//! - Nodes wrapping objects and arrays, with lazily created child nodes
//! - Computed properties with automatic dependency tracking
//! - Change/update propagation through dependents and up to ancestors
//! - Per-node events, array mutation and enumeration adapters
//! - JSON and MessagePack snapshots
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `value`: the raw structure the caller owns (`Value`, `Object`, `Array`)
//! - `graph`: the per-node dependency table
//! - `reactive`: nodes, tracking, events and the array adapters
//! - `config`: per-tree options
//! - `error`: the crate error type
//!
//! # Example
//!
//! ```rust
//! use trellis_core::{Node, Object, Value};
//!
//! let state = Object::new()
//!     .with("b", 3)
//!     .with("a", Value::computed(|t| Ok(Value::from(t.number("b")?.unwrap_or(0.0) * 2.0))));
//! let root = Node::wrap(state)?;
//!
//! assert_eq!(root.get("a")?.as_f64(), Some(6.0));
//!
//! // Writing `b` recomputes `a` and fires `change` for both.
//! root.set("b", 5)?;
//! assert_eq!(root.get("a")?.as_f64(), Some(10.0));
//! # Ok::<(), trellis_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod reactive;
pub mod value;

pub use config::Options;
pub use error::{Error, Result};
pub use reactive::{Event, EventKind, Listener, Node, Op, Slot, Tracker};
pub use value::{Access, Array, Computed, Key, Object, Value};
