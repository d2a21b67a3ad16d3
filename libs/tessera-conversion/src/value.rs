/// Read-only view of one node of a parsed style document.
///
/// This is everything the converters need from a document tree. Any
/// representation can take part by implementing these six accessors:
///
/// - Scalars (`as_bool`, `as_number`, `as_str`): `None` when the node is
///   of another kind. Booleans are never numbers and numbers are never
///   strings.
/// - Arrays (`is_array`, `array_len`, `array_member`): `array_len` is 0
///   and `array_member` is `None` for non-arrays; `array_member` is also
///   `None` past the end.
///
/// Accessors never produce conversion errors; deciding what a mismatch
/// means is the converter's job.
pub trait DocumentValue {
    fn as_bool(&self) -> Option<bool>;
    fn as_number(&self) -> Option<f64>;
    fn as_str(&self) -> Option<&str>;
    fn is_array(&self) -> bool;
    fn array_len(&self) -> usize;
    fn array_member(&self, index: usize) -> Option<&Self>;
}

#[cfg(feature = "json")]
impl DocumentValue for serde_json::Value {
    #[inline]
    fn as_bool(&self) -> Option<bool> {
        serde_json::Value::as_bool(self)
    }

    #[inline]
    fn as_number(&self) -> Option<f64> {
        serde_json::Value::as_f64(self)
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        serde_json::Value::as_str(self)
    }

    #[inline]
    fn is_array(&self) -> bool {
        serde_json::Value::is_array(self)
    }

    fn array_len(&self) -> usize {
        self.as_array().map_or(0, Vec::len)
    }

    fn array_member(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }
}

/// TOML keeps integers and floats apart; both are numbers here.
#[cfg(feature = "toml")]
impl DocumentValue for toml::Value {
    #[inline]
    fn as_bool(&self) -> Option<bool> {
        toml::Value::as_bool(self)
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            toml::Value::Integer(i) => Some(*i as f64),
            toml::Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        toml::Value::as_str(self)
    }

    #[inline]
    fn is_array(&self) -> bool {
        matches!(self, toml::Value::Array(_))
    }

    fn array_len(&self) -> usize {
        match self {
            toml::Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    fn array_member(&self, index: usize) -> Option<&Self> {
        match self {
            toml::Value::Array(items) => items.get(index),
            _ => None,
        }
    }
}

#[cfg(feature = "hcl")]
impl DocumentValue for hcl::Value {
    fn as_bool(&self) -> Option<bool> {
        match self {
            hcl::Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            hcl::Value::Number(number) => number.as_f64(),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            hcl::Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn is_array(&self) -> bool {
        matches!(self, hcl::Value::Array(_))
    }

    fn array_len(&self) -> usize {
        match self {
            hcl::Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    fn array_member(&self, index: usize) -> Option<&Self> {
        match self {
            hcl::Value::Array(items) => items.get(index),
            _ => None,
        }
    }
}
