//! Group Colors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entity::DomainError;

/// An RGBA color as stored in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub fn argb(&self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Lowercase `rrggbb`, the form used inside `<col=...>` tags
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:08X}", self.argb())
        }
    }
}

impl FromStr for Color {
    type Err = DomainError;

    /// Accepts `#RRGGBB`, `#AARRGGBB` or a signed decimal ARGB integer
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || DomainError::InvalidInput(format!("invalid color '{}'", s));

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return match hex.len() {
                6 => Ok(Color::from_argb(0xFF00_0000 | value)),
                8 => Ok(Color::from_argb(value)),
                _ => Err(invalid()),
            };
        }

        s.parse::<i32>()
            .map(|v| Color::from_argb(v as u32))
            .map_err(|_| invalid())
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("#8000ff00".parse::<Color>().unwrap(), Color { r: 0, g: 255, b: 0, a: 0x80 });
        assert!("#FFF".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
        assert!("#+FFFFF".parse::<Color>().is_err());
        assert!("#-FFFFF".parse::<Color>().is_err());
    }

    #[test]
    fn test_parse_signed_argb() {
        // opaque red as a signed 32-bit integer
        assert_eq!("-65536".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert!("red".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let c = Color::rgb(0x12, 0xab, 0xef);
        assert_eq!(c.to_string(), "#12ABEF");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
        assert_eq!(c.to_hex(), "12abef");

        let translucent = Color { r: 1, g: 2, b: 3, a: 4 };
        assert_eq!(translucent.to_string(), "#04010203");
    }
}
