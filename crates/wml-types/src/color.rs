//! Color values: `auto` or a 6-hex-digit RGB triple.

use core::fmt;

use crate::TypeError;

/// An RGB triple decoded from a 6-hex-digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parse exactly six hex digits, e.g. `4472C4`.
    pub fn from_hex(raw: &str) -> Result<Self, TypeError> {
        if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TypeError::Color(raw.to_string()));
        }
        let channel = |range: core::ops::Range<usize>| {
            u8::from_str_radix(&raw[range], 16).map_err(|_| TypeError::Color(raw.to_string()))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// An `ST_HexColor` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// The literal `auto` token: the consumer picks a color.
    Auto,
    /// An explicit RGB value.
    Rgb(Rgb),
}

impl Color {
    /// Decode a raw color string. The `auto` literal is recognized before
    /// hex parsing is attempted.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        if raw == "auto" {
            return Ok(Color::Auto);
        }
        Rgb::from_hex(raw).map(Color::Rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => f.write_str("auto"),
            Color::Rgb(rgb) => rgb.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_is_recognized_before_hex() {
        assert_eq!(Color::parse("auto"), Ok(Color::Auto));
    }

    #[test]
    fn hex_roundtrip() {
        let color = Color::parse("4472C4").unwrap();
        assert_eq!(
            color,
            Color::Rgb(Rgb {
                r: 0x44,
                g: 0x72,
                b: 0xC4
            })
        );
        assert_eq!(color.to_string(), "4472C4");
    }

    #[test]
    fn malformed_values_fail() {
        for raw in ["fff", "GGGGGG", "auto ", "4472C4FF"] {
            assert!(matches!(Color::parse(raw), Err(TypeError::Color(_))));
        }
    }
}
