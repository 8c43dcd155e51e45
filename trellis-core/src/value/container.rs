//! Shared object and array storage.
//!
//! The caller owns the raw structure. `Object` and `Array` are reference
//! handles, so cloning one never copies the contents: a node and the code
//! that built the structure keep looking at the same live storage.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::{Key, Value};
use crate::error::{Error, Result};

/// Largest index an array slot can be written at (the JavaScript limit,
/// `2^32 - 2`). Writes past the end pad the gap, so this also bounds growth.
pub const MAX_INDEX: usize = u32::MAX as usize - 1;

/// A shared, insertion-ordered mapping from names to values.
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<IndexMap<String, Value>>>);

impl Object {
    /// An empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// The value stored under `name`. Containers come back as shared handles.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.borrow().get(name).cloned()
    }

    /// Store `value` under `name`, returning the previous value. A new name
    /// is appended; an existing one keeps its position.
    pub fn insert(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().insert(name.into(), value.into())
    }

    /// Remove `name`, preserving the order of the remaining entries.
    pub fn remove(&self, name: &str) -> Option<Value> {
        self.0.borrow_mut().shift_remove(name)
    }

    /// Whether `name` has an entry, even an `Undefined` one.
    pub fn contains(&self, name: &str) -> bool {
        self.0.borrow().contains_key(name)
    }

    /// Property names in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Whether both handles point at the same storage.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn borrow(&self) -> Ref<'_, IndexMap<String, Value>> {
        self.0.borrow()
    }

    /// A new object holding the same entries. Nested containers stay shared.
    pub fn shallow_clone(&self) -> Object {
        Object(Rc::new(RefCell::new(self.0.borrow().clone())))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(map) => f.debug_map().entries(map.iter()).finish(),
            Err(_) => f.write_str("Object(<borrowed>)"),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Object(Rc::new(RefCell::new(map)))
    }
}

/// A shared, growable list of values.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    /// An empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// The element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Store `value` at `index`, padding with `Undefined` when writing past
    /// the end.
    ///
    /// Fails with [`Error::InvalidIndex`] beyond [`MAX_INDEX`].
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Result<()> {
        if index > MAX_INDEX {
            return Err(Error::InvalidIndex {
                key: Key::Index(index),
            });
        }
        let mut items = self.0.borrow_mut();
        if index >= items.len() {
            items.resize(index + 1, Value::Undefined);
        }
        items[index] = value.into();
        Ok(())
    }

    /// Append `value` to the end.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Number of elements, including `Undefined` padding.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// A copy of the elements. Nested containers stay shared.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Whether both handles point at the same storage.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.0.borrow_mut()
    }

    /// A new array holding the same elements. Nested containers stay shared.
    pub fn shallow_clone(&self) -> Array {
        Array(Rc::new(RefCell::new(self.0.borrow().clone())))
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(items) => f.debug_list().entries(items.iter()).finish(),
            Err(_) => f.write_str("Array(<borrowed>)"),
        }
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Array(Rc::new(RefCell::new(items)))
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Array::from(iter.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}

/// The storage a node wraps: either an object or an array.
#[derive(Debug, Clone)]
pub enum Container {
    Object(Object),
    Array(Array),
}

impl Container {
    pub fn is_array(&self) -> bool {
        matches!(self, Container::Array(_))
    }

    /// Rewrite `key` into the form this container stores it under.
    pub fn normalize(&self, key: Key) -> Key {
        match (self, key) {
            (Container::Array(_), Key::Name(name)) => match name.parse::<usize>() {
                Ok(index) => Key::Index(index),
                Err(_) => Key::Name(name),
            },
            (Container::Object(_), Key::Index(index)) => Key::Name(index.to_string()),
            (_, key) => key,
        }
    }

    /// Raw read. Absent slots yield `Undefined`.
    pub fn get(&self, key: &Key) -> Value {
        let found = match (self, key) {
            (Container::Object(object), key) => object.get(&key.to_name()),
            (Container::Array(array), key) => key.as_index().and_then(|index| array.get(index)),
        };
        found.unwrap_or(Value::Undefined)
    }

    /// Raw write.
    pub fn set(&self, key: &Key, value: Value) -> Result<()> {
        match self {
            Container::Object(object) => {
                object.insert(key.to_name(), value);
            }
            Container::Array(array) => {
                let index = key.as_index().ok_or_else(|| Error::InvalidIndex { key: key.clone() })?;
                array.set(index, value)?;
            }
        }
        Ok(())
    }

    /// Element count for arrays, entry count for objects.
    pub fn len(&self) -> usize {
        match self {
            Container::Object(object) => object.len(),
            Container::Array(array) => array.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_value(&self) -> Value {
        match self {
            Container::Object(object) => Value::Object(object.clone()),
            Container::Array(array) => Value::Array(array.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let object = Object::new().with("a", 1);
        let alias = object.clone();
        alias.insert("a", 2);
        assert_eq!(object.get("a"), Some(Value::from(2)));
        assert!(object.ptr_eq(&alias));
    }

    #[test]
    fn shallow_clone_detaches_top_level_only() {
        let inner = Array::from_iter([1, 2]);
        let object = Object::new().with("list", inner.clone());
        let copy = object.shallow_clone();

        copy.insert("extra", true);
        assert!(!object.contains("extra"));

        match copy.get("list") {
            Some(Value::Array(list)) => assert!(list.ptr_eq(&inner)),
            other => panic!("expected shared array, got {other:?}"),
        }
    }

    #[test]
    fn array_set_pads_with_undefined() {
        let array = Array::from_iter([1]);
        array.set(3, "x").unwrap();
        assert_eq!(array.len(), 4);
        assert_eq!(array.get(1), Some(Value::Undefined));
        assert_eq!(array.get(3), Some(Value::from("x")));
    }

    #[test]
    fn normalize_keys_per_container() {
        let array = Container::Array(Array::new());
        assert_eq!(array.normalize(Key::from("2")), Key::Index(2));

        let object = Container::Object(Object::new());
        assert_eq!(object.normalize(Key::from(2)), Key::from("2"));
    }

    #[test]
    fn array_rejects_out_of_range_indices() {
        let array = Array::from_iter([1]);
        for index in [usize::MAX, MAX_INDEX + 1, 1_000_000_000_000] {
            let err = array.set(index, 2).unwrap_err();
            assert!(matches!(err, Error::InvalidIndex { key } if key == Key::Index(index)));
        }
        assert_eq!(array.len(), 1);

        // The same bound applies to numeric names.
        let container = Container::Array(array);
        let key = container.normalize(Key::from(usize::MAX.to_string()));
        assert!(container.set(&key, Value::Null).is_err());
    }

    #[test]
    fn array_rejects_named_writes() {
        let array = Container::Array(Array::new());
        let err = array.set(&Key::from("name"), Value::Null).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { .. }));
    }
}
