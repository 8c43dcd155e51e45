//! Raw Storage Model
//!
//! This module defines the plain nested structure that nodes wrap: leaf
//! values, shared object/array containers, and computed functions.
//!
//! Containers are reference handles. Wrapping a structure in a node does not
//! copy it, and the caller may keep its own handles to any part of it.

mod computed;
mod container;
mod equality;
mod key;

use std::fmt;

pub use computed::{Access, Computed};
pub use container::{Array, Container, Object, MAX_INDEX};
pub use equality::{deep_eq, identical, natural_order, shallow_clone};
pub use key::Key;

use crate::error::Result;
use crate::reactive::Tracker;

/// A value stored in the raw structure.
#[derive(Clone)]
pub enum Value {
    /// Absent. Reading a missing property yields this.
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
    /// A formula evaluated on read (see [`Computed`]).
    Computed(Computed),
}

impl Value {
    /// A read-only computed property.
    pub fn computed<F>(compute: F) -> Self
    where
        F: Fn(&Tracker) -> Result<Value> + 'static,
    {
        Value::Computed(Computed::getter(compute))
    }

    /// A computed property with custom write semantics.
    pub fn computed_rw<F>(compute: F) -> Self
    where
        F: Fn(&Tracker, Access) -> Result<Value> + 'static,
    {
        Value::Computed(Computed::new(compute))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Value::Computed(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The container behind this value, if it is an object or array.
    pub fn as_container(&self) -> Option<Container> {
        match self {
            Value::Object(object) => Some(Container::Object(object.clone())),
            Value::Array(array) => Some(Container::Array(array.clone())),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_eq(self, other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("Undefined"),
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(array) => fmt::Debug::fmt(array, f),
            Value::Object(object) => fmt::Debug::fmt(object, f),
            Value::Computed(computed) => fmt::Debug::fmt(computed, f),
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i32, i64, u32, u64, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Computed> for Value {
    fn from(computed: Computed) -> Self {
        Value::Computed(computed)
    }
}

impl From<Container> for Value {
    fn from(container: Container) -> Self {
        container.to_value()
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Array::from(items))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                items.into_iter().map(Value::from).collect::<Array>().into()
            }
            serde_json::Value::Object(map) => map.into_iter().collect::<Object>().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn imports_json_documents() {
        let value = Value::from(json!({ "name": "ada", "tags": ["x", "y"], "age": 36 }));
        let Value::Object(object) = value else {
            panic!("expected object");
        };
        assert_eq!(object.get("name"), Some(Value::from("ada")));
        assert_eq!(object.get("age").and_then(|v| v.as_f64()), Some(36.0));
        match object.get("tags") {
            Some(Value::Array(tags)) => assert_eq!(tags.len(), 2),
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn container_view() {
        assert!(Value::from(Object::new()).as_container().is_some());
        assert!(Value::from(3).as_container().is_none());
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
