use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// An opaque RGB color as understood by `\definecolor{..}{RGB}{..}`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;

        let component = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = component(&hex[0..1].repeat(2), "red")?;
                let g = component(&hex[1..2].repeat(2), "green")?;
                let b = component(&hex[2..3].repeat(2), "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            6 => {
                let r = component(&hex[0..2], "red")?;
                let g = component(&hex[2..4], "green")?;
                let b = component(&hex[4..6], "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            _ => Err(format!("Invalid hex color length: expected 3 or 6, got {}", hex.len())),
        }
    }
}

/// Renders the comma separated triple used by the `RGB` color model.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_hex() {
        assert_eq!(Color::parse_hex("#f00").unwrap(), Color::RED);
        assert_eq!(Color::parse_hex("#0000FF").unwrap(), Color::BLUE);
        assert!(Color::parse_hex("00ff00").is_err());
        assert!(Color::parse_hex("#12345").is_err());
    }

    #[test]
    fn test_display_is_rgb_triple() {
        assert_eq!(Color::rgb(12, 34, 56).to_string(), "12,34,56");
    }

    #[test]
    fn test_deserialize_from_string_or_map() {
        let from_hex: Color = serde_json::from_str("\"#808080\"").unwrap();
        let from_map: Color = serde_json::from_str(r#"{"r":128,"g":128,"b":128}"#).unwrap();
        assert_eq!(from_hex, Color::gray(128));
        assert_eq!(from_hex, from_map);
    }
}
