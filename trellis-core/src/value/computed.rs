//! Computed (formula) properties.
//!
//! A computed property stores a function instead of a plain value. Reading
//! the property evaluates the function; writing it hands the incoming value to
//! the same function, which decides how to map it onto the structure.
//!
//! The function reads other properties through the [`Tracker`] it receives.
//! Every read made that way is recorded as a dependency, so writes to those
//! properties re-evaluate this one.
//!
//! ```rust,ignore
//! let totals = Object::new()
//!     .with("price", 4)
//!     .with("qty", 3)
//!     .with("total", Value::computed(|t| {
//!         let price = t.get("price")?.as_f64().unwrap_or(0.0);
//!         let qty = t.get("qty")?.as_f64().unwrap_or(0.0);
//!         Ok(Value::from(price * qty))
//!     }));
//! ```

use std::fmt;
use std::rc::Rc;

use super::Value;
use crate::error::Result;
use crate::reactive::Tracker;

/// Which form of the computed function is being invoked.
#[derive(Debug, Clone)]
pub enum Access {
    /// Produce the property's current value.
    Get,
    /// Apply a write of the given value.
    Set(Value),
}

type ComputeFn = dyn Fn(&Tracker, Access) -> Result<Value>;

/// A shared computed function. Identity is the allocation, so two clones of
/// the same `Computed` compare identical.
#[derive(Clone)]
pub struct Computed(Rc<ComputeFn>);

impl Computed {
    /// A computed property handling both reads and writes.
    ///
    /// The value returned for [`Access::Set`] is ignored.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn(&Tracker, Access) -> Result<Value> + 'static,
    {
        Self(Rc::new(compute))
    }

    /// A read-only formula. Writes evaluate the formula and discard the result.
    pub fn getter<F>(compute: F) -> Self
    where
        F: Fn(&Tracker) -> Result<Value> + 'static,
    {
        Self::new(move |tracker, _| compute(tracker))
    }

    pub(crate) fn call(&self, tracker: &Tracker, access: Access) -> Result<Value> {
        (self.0)(tracker, access)
    }

    pub fn ptr_eq(&self, other: &Computed) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Computed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Computed({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}
