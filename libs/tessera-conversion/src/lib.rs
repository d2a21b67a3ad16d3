//! Typed conversion of loosely-typed style document values.
//!
//! A style document arrives as an untyped tree (JSON, TOML, HCL, or a
//! host's native object model). This crate is the boundary where a node
//! of that tree becomes a typed value, or a precise message explaining
//! what was expected.
//!
//! - [`DocumentValue`] - what a tree node must offer (value.rs)
//! - [`Convert`] / [`convert`] - type-indexed dispatch (converter.rs)
//! - [`Error`] - one error per failed conversion (error.rs)
//! - primitives, enumerations, colors, fixed-arity tuples, sequences
//!
//! ```
//! use tessera_conversion::{convert, Color};
//! use serde_json::json;
//!
//! let color: Color = convert(&json!("#ff0000")).unwrap();
//! assert_eq!(color, Color::new(1.0, 0.0, 0.0, 1.0));
//!
//! let error = convert::<Vec<String>>(&json!(["a", 1, "c"])).unwrap_err();
//! assert_eq!(error.to_string(), "value must be an array of strings");
//! ```

// Lets `#[derive(Enumeration)]` expand to the same paths inside this crate.
extern crate self as tessera_conversion;

mod array;
pub mod color;
pub mod converter;
mod css;
pub mod enumeration;
pub mod error;
mod primitive;
mod sequence;
pub mod value;

pub use color::Color;
pub use converter::{convert, Convert};
pub use enumeration::Enumeration;
pub use error::{Error, ErrorKind, Result};
pub use value::DocumentValue;

#[cfg(feature = "derive")]
pub use tessera_conversion_derive::Enumeration;
