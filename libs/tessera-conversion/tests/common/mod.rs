//! Test infrastructure: a host-native value model and converters from JSON
//! into every supported representation, so one input can be checked
//! against all of them.

#![allow(dead_code)]

use tessera_conversion::DocumentValue;

/// Host-native document node, independent of any serialization crate.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<NativeValue>),
    Object(Vec<(String, NativeValue)>),
}

impl DocumentValue for NativeValue {
    fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            NativeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn is_array(&self) -> bool {
        matches!(self, NativeValue::Array(_))
    }

    fn array_len(&self) -> usize {
        match self {
            NativeValue::Array(items) => items.len(),
            _ => 0,
        }
    }

    fn array_member(&self, index: usize) -> Option<&Self> {
        match self {
            NativeValue::Array(items) => items.get(index),
            _ => None,
        }
    }
}

/// A scalar that fails the test if anything treats it as an array.
#[derive(Debug)]
pub struct Scalar(pub NativeValue);

impl DocumentValue for Scalar {
    fn as_bool(&self) -> Option<bool> {
        self.0.as_bool()
    }

    fn as_number(&self) -> Option<f64> {
        self.0.as_number()
    }

    fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    fn is_array(&self) -> bool {
        false
    }

    fn array_len(&self) -> usize {
        panic!("array_len called on a scalar")
    }

    fn array_member(&self, _index: usize) -> Option<&Self> {
        panic!("array_member called on a scalar")
    }
}

pub fn to_native(value: &serde_json::Value) -> NativeValue {
    match value {
        serde_json::Value::Null => NativeValue::Null,
        serde_json::Value::Bool(b) => NativeValue::Bool(*b),
        serde_json::Value::Number(n) => NativeValue::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => NativeValue::String(s.clone()),
        serde_json::Value::Array(items) => NativeValue::Array(items.iter().map(to_native).collect()),
        serde_json::Value::Object(map) => NativeValue::Object(
            map.iter().map(|(k, v)| (k.clone(), to_native(v))).collect(),
        ),
    }
}

/// `None` when the value holds a null, which TOML cannot express.
pub fn to_toml(value: &serde_json::Value) -> Option<toml::Value> {
    Some(match value {
        serde_json::Value::Null => return None,
        serde_json::Value::Bool(b) => toml::Value::Boolean(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => toml::Value::Integer(i),
            None => toml::Value::Float(n.as_f64()?),
        },
        serde_json::Value::String(s) => toml::Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            toml::Value::Array(items.iter().map(to_toml).collect::<Option<_>>()?)
        }
        serde_json::Value::Object(map) => {
            let mut table = toml::map::Map::new();
            for (k, v) in map {
                table.insert(k.clone(), to_toml(v)?);
            }
            toml::Value::Table(table)
        }
    })
}

pub fn to_hcl(value: &serde_json::Value) -> hcl::Value {
    match value {
        serde_json::Value::Null => hcl::Value::Null,
        serde_json::Value::Bool(b) => hcl::Value::Bool(*b),
        serde_json::Value::Number(n) => n
            .as_f64()
            .and_then(hcl::Number::from_f64)
            .map_or(hcl::Value::Null, hcl::Value::Number),
        serde_json::Value::String(s) => hcl::Value::String(s.clone()),
        serde_json::Value::Array(items) => hcl::Value::Array(items.iter().map(to_hcl).collect()),
        serde_json::Value::Object(map) => hcl::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), to_hcl(v))).collect(),
        ),
    }
}
