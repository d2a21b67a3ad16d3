//! Base cases every other converter is built on.

use crate::converter::Convert;
use crate::error::{Error, Result};
use crate::value::DocumentValue;

impl Convert for bool {
    fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| Error::type_mismatch("value must be a boolean"))
    }
}

impl Convert for f64 {
    fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
        value
            .as_number()
            .ok_or_else(|| Error::type_mismatch("value must be a number"))
    }
}

/// Narrowed to the renderer's float width; no range check.
impl Convert for f32 {
    fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
        f64::convert(value).map(|number| number as f32)
    }
}

impl Convert for String {
    fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| Error::type_mismatch("value must be a string"))
    }
}
