//! Hashable identity of an `id` / `pid` value

use serde_json::Value;
use std::fmt;

/// Identity of an identifier value, usable as a lookup key
///
/// JSON values are not hashable, so identifiers are folded into this
/// canonical form. Integral numbers compare numerically regardless of how
/// they were written (`1` and `1.0` are the same key), while a number and a
/// string never match (`1` and `"1"` differ).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    Null,
    Bool(bool),
    Int(i128),
    /// Non-integral float, stored by bit pattern
    Float(u64),
    String(String),
    /// Arrays and objects, keyed by their compact JSON text
    Composite(String),
}

impl NodeKey {
    /// Read the key stored under `field` in a record
    ///
    /// Returns `None` if the field is absent.
    pub fn of(record: &crate::Record, field: &str) -> Option<Self> {
        record.get(field).map(NodeKey::from)
    }
}

impl From<&Value> for NodeKey {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => NodeKey::Null,
            Value::Bool(b) => NodeKey::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    NodeKey::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    NodeKey::Int(i128::from(u))
                } else {
                    let f = n.as_f64().unwrap_or(f64::NAN);
                    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e38 {
                        NodeKey::Int(f as i128)
                    } else {
                        NodeKey::Float(f.to_bits())
                    }
                }
            }
            Value::String(s) => NodeKey::String(s.clone()),
            other => NodeKey::Composite(other.to_string()),
        }
    }
}

impl From<Value> for NodeKey {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => NodeKey::String(s),
            other => NodeKey::from(&other),
        }
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        NodeKey::String(s.to_string())
    }
}

impl From<i64> for NodeKey {
    fn from(i: i64) -> Self {
        NodeKey::Int(i128::from(i))
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Null => write!(f, "null"),
            NodeKey::Bool(b) => write!(f, "{}", b),
            NodeKey::Int(i) => write!(f, "{}", i),
            NodeKey::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            NodeKey::String(s) => write!(f, "{:?}", s),
            NodeKey::Composite(json) => write!(f, "{}", json),
        }
    }
}
