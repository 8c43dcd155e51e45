//! Array Enumeration Adapter
//!
//! Read-only iteration over an array-backed node. Callbacks receive each
//! element as a [`Slot`] read through the node (so nested containers arrive
//! as child nodes and computed elements are evaluated) together with its
//! index. Results that hand elements back (`filter`, `find`) return the raw
//! elements, as native iteration would.
//!
//! The element count is captured when iteration starts. A callback that
//! shrinks the array sees `Undefined` for the vanished tail.

use super::{Node, Slot};
use crate::error::Result;
use crate::value::{Key, Value};

impl Node {
    fn element_count(&self) -> Result<usize> {
        Ok(self.array()?.len())
    }

    fn element(&self, index: usize) -> Result<Slot> {
        self.read(&Key::Index(index))
    }

    fn raw_element(&self, index: usize) -> Result<Value> {
        Ok(self.array()?.get(index).unwrap_or_default())
    }

    /// Call `f` with every element slot and its index.
    pub fn for_each<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(Slot, usize) -> Result<()>,
    {
        for index in 0..self.element_count()? {
            f(self.element(index)?, index)?;
        }
        Ok(())
    }

    /// Collect `f`'s result for every element.
    pub fn map<T, F>(&self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(Slot, usize) -> Result<T>,
    {
        let count = self.element_count()?;
        let mut mapped = Vec::with_capacity(count);
        for index in 0..count {
            mapped.push(f(self.element(index)?, index)?);
        }
        Ok(mapped)
    }

    /// Raw elements for which `predicate` holds.
    pub fn filter<F>(&self, mut predicate: F) -> Result<Vec<Value>>
    where
        F: FnMut(&Slot, usize) -> Result<bool>,
    {
        let mut kept = Vec::new();
        for index in 0..self.element_count()? {
            if predicate(&self.element(index)?, index)? {
                kept.push(self.raw_element(index)?);
            }
        }
        Ok(kept)
    }

    /// First raw element for which `predicate` holds.
    pub fn find<F>(&self, predicate: F) -> Result<Option<Value>>
    where
        F: FnMut(&Slot, usize) -> Result<bool>,
    {
        match self.find_index(predicate)? {
            Some(index) => self.raw_element(index).map(Some),
            None => Ok(None),
        }
    }

    /// Index of the first element for which `predicate` holds.
    pub fn find_index<F>(&self, mut predicate: F) -> Result<Option<usize>>
    where
        F: FnMut(&Slot, usize) -> Result<bool>,
    {
        for index in 0..self.element_count()? {
            if predicate(&self.element(index)?, index)? {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Whether `predicate` holds for any element. Stops at the first match.
    pub fn some<F>(&self, predicate: F) -> Result<bool>
    where
        F: FnMut(&Slot, usize) -> Result<bool>,
    {
        Ok(self.find_index(predicate)?.is_some())
    }

    /// Whether `predicate` holds for all elements. Stops at the first miss.
    pub fn every<F>(&self, mut predicate: F) -> Result<bool>
    where
        F: FnMut(&Slot, usize) -> Result<bool>,
    {
        let failed = self.find_index(|slot, index| Ok(!predicate(slot, index)?))?;
        Ok(failed.is_none())
    }

    /// Fold the elements into an accumulator, starting from `init`.
    pub fn reduce<T, F>(&self, init: T, mut f: F) -> Result<T>
    where
        F: FnMut(T, Slot, usize) -> Result<T>,
    {
        let mut acc = init;
        for index in 0..self.element_count()? {
            acc = f(acc, self.element(index)?, index)?;
        }
        Ok(acc)
    }
}
