//! Equality and ordering helpers used by the cache layer and the array
//! adapters.

use std::cmp::Ordering;

use super::Value;

/// Structural equality.
///
/// Containers compare by contents (object key order is ignored), computed
/// functions by identity. `NaN` never equals itself.
pub fn deep_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Computed(a), Value::Computed(b)) => a.ptr_eq(b),
        (Value::Array(a), Value::Array(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let (a, b) = (a.borrow(), b.borrow());
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| deep_eq(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let (a, b) = (a.borrow(), b.borrow());
            a.len() == b.len()
                && a.iter().all(|(key, x)| b.get(key).is_some_and(|y| deep_eq(x, y)))
        }
        _ => false,
    }
}

/// Reference/primitive identity: what a write compares before deciding
/// whether anything was replaced.
pub fn identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
        (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
        (Value::Computed(a), Value::Computed(b)) => a.ptr_eq(b),
        (Value::Array(_) | Value::Object(_) | Value::Computed(_), _)
        | (_, Value::Array(_) | Value::Object(_) | Value::Computed(_)) => false,
        _ => deep_eq(a, b),
    }
}

/// Copy the top level of a container so later in-place mutation of the
/// source container is observable by comparison. Primitives are returned as-is.
pub fn shallow_clone(value: &Value) -> Value {
    match value {
        Value::Array(array) => Value::Array(array.shallow_clone()),
        Value::Object(object) => Value::Object(object.shallow_clone()),
        other => other.clone(),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
        Value::Computed(_) => 6,
        Value::Undefined => 7,
    }
}

/// Total order used by the default array sort: values group by type
/// (`Undefined` last), numbers compare numerically and strings lexically.
pub fn natural_order(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => rank(a).cmp(&rank(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Array, Computed, Object};

    #[test]
    fn objects_compare_by_contents_ignoring_order() {
        let a = Object::new().with("x", 1).with("y", "two");
        let b = Object::new().with("y", "two").with("x", 1);
        assert!(deep_eq(&a.into(), &b.into()));
    }

    #[test]
    fn nested_difference_is_detected() {
        let a = Object::new().with("list", Array::from_iter([1, 2, 3]));
        let b = Object::new().with("list", Array::from_iter([1, 2, 4]));
        assert!(!deep_eq(&a.into(), &b.into()));
    }

    #[test]
    fn nan_is_never_equal() {
        let nan = Value::Number(f64::NAN);
        assert!(!deep_eq(&nan, &nan.clone()));
    }

    #[test]
    fn identity_differs_from_equality() {
        let a = Value::from(Array::from_iter([1]));
        let b = Value::from(Array::from_iter([1]));
        assert!(deep_eq(&a, &b));
        assert!(!identical(&a, &b));
        assert!(identical(&a, &a.clone()));
        assert!(identical(&Value::from(3), &Value::from(3)));
    }

    #[test]
    fn computed_compare_by_identity() {
        let f = Computed::getter(|_| Ok(Value::Null));
        let g = Computed::getter(|_| Ok(Value::Null));
        assert!(deep_eq(&f.clone().into(), &f.clone().into()));
        assert!(!deep_eq(&f.into(), &g.into()));
    }

    #[test]
    fn shallow_clone_detects_in_place_mutation() {
        let live = Array::from_iter([1, 2]);
        let snapshot = shallow_clone(&live.clone().into());
        live.push(3);
        assert!(!deep_eq(&snapshot, &live.into()));
    }

    #[test]
    fn natural_order_groups_types() {
        let mut values = vec![
            Value::Undefined,
            Value::from("b"),
            Value::from(10),
            Value::Null,
            Value::from(2),
            Value::from("a"),
        ];
        values.sort_by(natural_order);
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::from(2),
                Value::from(10),
                Value::from("a"),
                Value::from("b"),
                Value::Undefined,
            ]
        );
    }
}
