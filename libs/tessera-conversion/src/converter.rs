use crate::error::Result;
use crate::value::DocumentValue;

/// A type that can be produced from a document value.
///
/// Solves one task: check that a value has the right shape for `Self` and
/// build it, or say precisely what was expected. One implementation per
/// target type; adding a target type never touches existing ones.
///
/// Implementations are pure: the same value content always yields the
/// same result, and nothing is kept between calls.
pub trait Convert: Sized {
    fn convert<V: DocumentValue>(value: &V) -> Result<Self>;
}

/// Convert `value` into `T`.
///
/// ```
/// use tessera_conversion::convert;
/// use serde_json::json;
///
/// let offset: [f64; 2] = convert(&json!([0, -2.5])).unwrap();
/// assert_eq!(offset, [0.0, -2.5]);
///
/// let error = convert::<bool>(&json!("yes")).unwrap_err();
/// assert_eq!(error.to_string(), "value must be a boolean");
/// ```
pub fn convert<T: Convert>(value: &impl DocumentValue) -> Result<T> {
    T::convert(value).inspect_err(|error| {
        tracing::trace!(
            target_type = std::any::type_name::<T>(),
            kind = %error.kind(),
            error = %error,
            "conversion failed"
        );
    })
}
