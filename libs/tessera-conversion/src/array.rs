//! Fixed-arity numeric tuples: `[f64; N]` and `[f32; N]` for N = 2, 3, 4.
//!
//! Wrong shape and bad members report the same message; which member
//! was wrong is not surfaced. Every member is checked before success.

use crate::converter::Convert;
use crate::error::{Error, Result};
use crate::value::DocumentValue;

fn numbers<T, V, const N: usize>(value: &V, message: &'static str) -> Result<[T; N]>
where
    T: Convert + Copy + Default,
    V: DocumentValue,
{
    if !value.is_array() || value.array_len() != N {
        return Err(Error::shape(message));
    }

    let mut result = [T::default(); N];
    for (index, slot) in result.iter_mut().enumerate() {
        *slot = value
            .array_member(index)
            .and_then(|member| T::convert(member).ok())
            .ok_or_else(|| Error::element(message))?;
    }
    Ok(result)
}

macro_rules! fixed_arity {
    ($($len:literal => $word:literal),* $(,)?) => {$(
        impl Convert for [f64; $len] {
            fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
                numbers(value, concat!("value must be an array of ", $word, " numbers"))
            }
        }

        impl Convert for [f32; $len] {
            fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
                numbers(value, concat!("value must be an array of ", $word, " numbers"))
            }
        }
    )*};
}

fixed_arity! {
    2 => "two",
    3 => "three",
    4 => "four",
}
