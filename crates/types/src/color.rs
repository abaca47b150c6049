use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// An ARGB color with byte channels.
///
/// Values are immutable once constructed. Colors arrive either from a card
/// document hex string or from a host configuration lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Fully transparent black, the fallback for unrecognized color strings.
    pub const TRANSPARENT: Color = Color { a: 0, r: 0, g: 0, b: 0 };

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Parses a color from a hex string.
    ///
    /// Expected formats are `#AARRGGBB` (with alpha channel) and `#RRGGBB`
    /// (without alpha channel, implied fully opaque). Anything else,
    /// including strings without a leading `#`, yields [`Color::TRANSPARENT`].
    /// Hosts routinely hand over named or otherwise unsupported color values;
    /// those are ignored rather than rejected, so this never fails.
    pub fn from_string(value: &str) -> Self {
        let Some(hex) = value.strip_prefix('#') else {
            return Self::TRANSPARENT;
        };
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::TRANSPARENT;
        }
        match hex.len() {
            8 => Self {
                a: channel(hex, 0),
                r: channel(hex, 1),
                g: channel(hex, 2),
                b: channel(hex, 3),
            },
            6 => Self {
                a: 0xFF,
                r: channel(hex, 0),
                g: channel(hex, 1),
                b: channel(hex, 2),
            },
            _ => Self::TRANSPARENT,
        }
    }

    /// Returns the hover variant of this color: each RGB channel darkened
    /// by a quarter of its value, alpha unchanged.
    pub fn hovered(&self) -> Self {
        const HOVER_INCREMENT: f32 = 0.25;
        let darken = |c: u8| c - (c as f32 * HOVER_INCREMENT) as u8;
        Self {
            a: self.a,
            r: darken(self.r),
            g: darken(self.g),
            b: darken(self.b),
        }
    }
}

fn channel(hex: &str, index: usize) -> u8 {
    // The caller has already validated that `hex` is pure ASCII hex digits.
    u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16).unwrap_or(0)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColorVisitor;

        impl de::Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex color string like \"#AARRGGBB\" or \"#RRGGBB\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Color, E>
            where
                E: de::Error,
            {
                Ok(Color::from_string(value))
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}
