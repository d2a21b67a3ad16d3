//! Variable-length sequences of numbers and strings.

use crate::converter::Convert;
use crate::error::{Error, Result};
use crate::value::DocumentValue;

/// Convert every member in order, stopping at the first failure.
fn members<T, V>(value: &V, message: &'static str) -> Result<Vec<T>>
where
    T: Convert,
    V: DocumentValue,
{
    if !value.is_array() {
        return Err(Error::shape("value must be an array"));
    }

    let len = value.array_len();
    let mut result = Vec::with_capacity(len);
    for index in 0..len {
        let member = value
            .array_member(index)
            .and_then(|member| T::convert(member).ok())
            .ok_or_else(|| Error::element(message))?;
        result.push(member);
    }
    Ok(result)
}

impl Convert for Vec<f64> {
    fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
        members(value, "value must be an array of numbers")
    }
}

impl Convert for Vec<f32> {
    fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
        members(value, "value must be an array of numbers")
    }
}

impl Convert for Vec<String> {
    fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
        members(value, "value must be an array of strings")
    }
}
