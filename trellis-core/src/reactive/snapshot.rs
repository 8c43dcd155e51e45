//! Snapshot Export
//!
//! Plain, detached copies of the structure a node wraps. Computed properties
//! and private names are left out, so a snapshot holds only stored data.

use serde_json::{Map, Number};

use super::Node;
use crate::config::Options;
use crate::error::Result;
use crate::value::Value;

impl Node {
    /// Snapshot this node's structure as JSON.
    ///
    /// Object properties that are computed, `Undefined` or named with the
    /// private prefix are omitted. Inside arrays, `Undefined` and computed
    /// elements become `null` so indices are preserved.
    pub fn to_json(&self) -> serde_json::Value {
        snapshot(&self.values(), self.options())
    }

    /// [`Node::to_json`] rendered as a compact JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    /// The same snapshot encoded as MessagePack.
    pub fn to_msgpack(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec(&self.to_json())?)
    }
}

fn snapshot(value: &Value, options: &Options) -> serde_json::Value {
    match value {
        Value::Undefined | Value::Null | Value::Computed(_) => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => number(*n),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(array) => {
            let items = array.borrow();
            serde_json::Value::Array(items.iter().map(|item| snapshot(item, options)).collect())
        }
        Value::Object(object) => {
            let entries = object.borrow();
            let map: Map<String, serde_json::Value> = entries
                .iter()
                .filter(|(name, value)| {
                    !options.is_private(name) && !value.is_computed() && !value.is_undefined()
                })
                .map(|(name, value)| (name.clone(), snapshot(value, options)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Integral numbers that fit `i64` serialize as integers. `i64::MAX as f64`
/// is 2^63 and does not fit, hence the exclusive upper bound.
fn number(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&n) {
        return serde_json::Value::from(n as i64);
    }
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}
