//! RGB color value with a canonical `#RRGGBB` text form
//!
//! Project files store cells as hex strings (or null for unset), so the
//! serde representation is the hex form, not a struct. Parsing accepts
//! either case; formatting always emits uppercase.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color (8 bits per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Expand to RGBA bytes at full opacity (for rasterization)
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, 255)
    }

    /// Canonical `#RRGGBB` form
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Error type for hex color parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    input: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?} - expected #RRGGBB", self.input)
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };

        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err())?;
        Ok(Rgb::new(r, g, b))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Rgb;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a color string in #RRGGBB form")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Rgb, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let red: Rgb = "#FF0000".parse().unwrap();
        assert_eq!(red, Rgb::new(255, 0, 0));
        assert_eq!(red.hex(), "#FF0000");

        // Lowercase accepted on parse, uppercase on output
        let teal: Rgb = "#008080".parse().unwrap();
        assert_eq!("#00ff80".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 128));
        assert_eq!(teal.hex(), "#008080");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("FF0000".parse::<Rgb>().is_err()); // missing '#'
        assert!("#FF00".parse::<Rgb>().is_err()); // too short
        assert!("#FF0000AA".parse::<Rgb>().is_err()); // too long
        assert!("#GG0000".parse::<Rgb>().is_err()); // not hex
        assert!("#€€".parse::<Rgb>().is_err()); // not ascii
        assert!("".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_to_rgba_full_opacity() {
        assert_eq!(Rgb::WHITE.to_rgba(), [255, 255, 255, 255]);
        assert_eq!(Rgb::new(18, 52, 86).to_rgba(), [18, 52, 86, 255]);
    }

    #[test]
    fn test_serde_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 128, 0)).unwrap();
        assert_eq!(json, "\"#FF8000\"");

        let back: Rgb = serde_json::from_str("\"#ff8000\"").unwrap();
        assert_eq!(back, Rgb::new(255, 128, 0));

        // Option<Rgb> maps unset to null
        let none: Option<Rgb> = serde_json::from_str("null").unwrap();
        assert_eq!(none, None);
        assert!(serde_json::from_str::<Rgb>("\"#nope\"").is_err());
    }
}
