use std::fmt;
use std::str::FromStr;

use crate::converter::Convert;
use crate::css;
use crate::error::{Error, Result};
use crate::value::DocumentValue;

/// RGBA color, components in `[0, 1]`, not premultiplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From 8-bit channels and a `[0, 1]` alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            a,
        )
    }

    /// Parse a CSS color: a named color, `#rgb`, `#rgba`, `#rrggbb`,
    /// `#rrggbbaa`, `rgb()`, `rgba()`, `hsl()` or `hsla()`.
    pub fn parse(input: &str) -> Option<Self> {
        css::parse(input)
    }

    /// Channels multiplied by alpha, as the renderer blends them.
    pub fn premultiplied(self) -> [f32; 4] {
        [self.r * self.a, self.g * self.a, self.b * self.a, self.a]
    }

    fn channel8(component: f32) -> u8 {
        (component.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// `rgba(r, g, b, a)` with 0-255 channels; parses back to the same color
/// for any color that came out of [`Color::parse`].
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            Self::channel8(self.r),
            Self::channel8(self.g),
            Self::channel8(self.b),
            self.a
        )
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s).ok_or_else(Error::invalid_color)
    }
}

impl Convert for Color {
    fn convert<V: DocumentValue>(value: &V) -> Result<Self> {
        String::convert(value)?.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
