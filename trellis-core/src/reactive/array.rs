//! Array Mutation Adapter
//!
//! The seven mutating array operations. Each one applies the native mutation
//! to the raw array, refreshes the tracked length, drops the node's entire
//! cache and every child node (indices may have shifted), fires structural
//! events, and finally propagates an update to the parent slot holding the
//! array.
//!
//! | operation | events                                       |
//! |-----------|----------------------------------------------|
//! | `push`    | `insert(len - 1, 1)`                         |
//! | `pop`     | `delete(len, 1)`                             |
//! | `unshift` | `insert(0, 1)`                               |
//! | `shift`   | `delete(0, 1)`                               |
//! | `reverse` | `delete(0, len)` then `insert(0, len)`       |
//! | `sort`    | `delete(0, len)` then `insert(0, len)`       |
//! | `splice`  | `delete(start, removed)` then `insert(start, inserted)` |

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::{Event, Node};
use crate::error::{Error, Result};
use crate::value::{natural_order, Array, Container, Value};

impl Node {
    pub(crate) fn array(&self) -> Result<&Array> {
        match self.container() {
            Container::Array(array) => Ok(array),
            Container::Object(_) => Err(Error::NotAnArray),
        }
    }

    /// Append an element. Returns the new length.
    pub fn push(&self, value: impl Into<Value>) -> Result<usize> {
        let len = {
            let mut items = self.array()?.borrow_mut();
            items.push(value.into());
            items.len()
        };
        self.structural_change("push", &[Event::Insert { index: len - 1, count: 1 }])?;
        Ok(len)
    }

    /// Remove the last element.
    pub fn pop(&self) -> Result<Option<Value>> {
        let (removed, len) = {
            let mut items = self.array()?.borrow_mut();
            let removed = items.pop();
            (removed, items.len())
        };
        if removed.is_some() {
            self.structural_change("pop", &[Event::Delete { index: len, count: 1 }])?;
        }
        Ok(removed)
    }

    /// Remove the first element.
    pub fn shift(&self) -> Result<Option<Value>> {
        let removed = {
            let mut items = self.array()?.borrow_mut();
            (!items.is_empty()).then(|| items.remove(0))
        };
        if removed.is_some() {
            self.structural_change("shift", &[Event::Delete { index: 0, count: 1 }])?;
        }
        Ok(removed)
    }

    /// Prepend an element. Returns the new length.
    pub fn unshift(&self, value: impl Into<Value>) -> Result<usize> {
        let len = {
            let mut items = self.array()?.borrow_mut();
            items.insert(0, value.into());
            items.len()
        };
        self.structural_change("unshift", &[Event::Insert { index: 0, count: 1 }])?;
        Ok(len)
    }

    /// Reverse the elements in place.
    pub fn reverse(&self) -> Result<()> {
        let len = {
            let mut items = self.array()?.borrow_mut();
            items.reverse();
            items.len()
        };
        self.structural_change("reverse", &replaced(len))
    }

    /// Sort in place using [`natural_order`].
    pub fn sort(&self) -> Result<()> {
        self.sort_by(natural_order)
    }

    /// Sort in place with a comparator.
    pub fn sort_by<F>(&self, compare: F) -> Result<()>
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        // The comparator runs on a detached copy; no borrow is held.
        let mut items = self.array()?.to_vec();
        items.sort_by(compare);
        let len = items.len();
        *self.array()?.borrow_mut() = items;
        self.structural_change("sort", &replaced(len))
    }

    /// Remove `delete_count` elements starting at `start` and insert `items`
    /// in their place. Both bounds clamp to the array. Returns the removed
    /// elements.
    pub fn splice(
        &self,
        start: usize,
        delete_count: usize,
        items: Vec<Value>,
    ) -> Result<Vec<Value>> {
        let inserted = items.len();
        let (start, removed) = {
            let mut current = self.array()?.borrow_mut();
            let start = start.min(current.len());
            let end = start.saturating_add(delete_count).min(current.len());
            let removed: Vec<Value> = current.splice(start..end, items).collect();
            (start, removed)
        };

        let mut events: SmallVec<[Event; 2]> = SmallVec::new();
        if !removed.is_empty() {
            events.push(Event::Delete {
                index: start,
                count: removed.len(),
            });
        }
        if inserted > 0 {
            events.push(Event::Insert {
                index: start,
                count: inserted,
            });
        }
        self.structural_change("splice", &events)?;
        Ok(removed)
    }

    fn structural_change(&self, op: &'static str, events: &[Event]) -> Result<()> {
        self.refresh_len();
        self.forget_all();
        tracing::debug!(op, len = ?self.len(), "array mutation");

        for event in events {
            self.trigger(event.clone());
        }
        if let (Some(parent), Some(prop)) = (self.parent(), self.prop()) {
            parent.propagate(prop)?;
        }
        Ok(())
    }
}

fn replaced(len: usize) -> [Event; 2] {
    [
        Event::Delete { index: 0, count: len },
        Event::Insert { index: 0, count: len },
    ]
}
