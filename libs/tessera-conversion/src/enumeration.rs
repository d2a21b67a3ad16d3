use crate::converter::Convert;
use crate::error::{Error, Result};
use crate::value::DocumentValue;

/// A fieldless enum with a canonical name for every constant.
///
/// `NAMES` is a static bijection between constants and their canonical
/// (lowercase, hyphenated) names. Lookups are exact: no case folding,
/// no prefixes, no aliases.
///
/// Usually derived:
///
/// ```
/// use tessera_conversion::{convert, Enumeration};
/// use serde_json::json;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
/// enum SymbolPlacement {
///     Point,
///     Line,
///     LineCenter,
/// }
///
/// assert_eq!(SymbolPlacement::LineCenter.name(), "line-center");
/// assert_eq!(convert(&json!("line")), Ok(SymbolPlacement::Line));
/// ```
pub trait Enumeration: Copy + 'static {
    /// Every constant paired with its canonical name, in declaration order.
    const NAMES: &'static [(Self, &'static str)];

    fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(_, canonical)| *canonical == name)
            .map(|(constant, _)| *constant)
    }

    fn name(self) -> &'static str;
}

impl<T: Enumeration> Convert for T {
    fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
        let name = String::convert(value)?;
        T::from_name(&name).ok_or_else(Error::invalid_enumeration)
    }
}
