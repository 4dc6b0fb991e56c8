//! Color representation

use std::fmt;

/// Color used by fonts and borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Hex string without `#`; the automatic color has none
    pub fn to_hex(&self) -> Option<String> {
        match self {
            Color::Rgb { r, g, b } => Some(format!("{:02X}{:02X}{:02X}", r, g, b)),
            Color::Auto => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_hex() {
            Some(hex) => write!(f, "#{}", hex),
            None => write!(f, "auto"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Color::rgb(255, 128, 0).to_hex().as_deref(), Some("FF8000"));
        assert_eq!(Color::BLACK.to_string(), "#000000");
        assert_eq!(Color::Auto.to_hex(), None);
        assert_eq!(Color::default().to_string(), "auto");
    }
}
