use std::borrow::Cow;
use std::fmt;

/// Category of a conversion error.
///
/// Every kind describes invalid input shape or type. None of them is
/// recoverable at this layer: the caller reports the message and stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Not a boolean, number or string.
    Type,
    /// Not an array, or an array of the wrong length.
    Shape,
    /// An array member of the wrong kind.
    Element,
    /// A string that names no constant of the target enumeration.
    Enumeration,
    /// A string that is not a valid color.
    Color,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => f.write_str("type"),
            ErrorKind::Shape => f.write_str("shape"),
            ErrorKind::Element => f.write_str("element"),
            ErrorKind::Enumeration => f.write_str("enumeration"),
            ErrorKind::Color => f.write_str("color"),
        }
    }
}

/// Conversion error, returned by every converter.
///
/// `Display` prints the message exactly as produced, so it can be shown
/// to whoever wrote the style document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

/// Outcome of a conversion: one typed value or one [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn type_mismatch(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Type, message)
    }

    pub fn shape(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Shape, message)
    }

    pub fn element(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Element, message)
    }

    pub fn invalid_enumeration() -> Self {
        Self::new(ErrorKind::Enumeration, "value must be a valid enumeration value")
    }

    pub fn invalid_color() -> Self {
        Self::new(ErrorKind::Color, "value must be a valid color")
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Add context to the error, preserving the original ErrorKind.
    ///
    /// Produces: `"context: original message"`. Converters never call this;
    /// it is for callers that know which field they were converting.
    pub fn with_context(self, ctx: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: Cow::Owned(format!("{ctx}: {}", self.message)),
        }
    }
}
