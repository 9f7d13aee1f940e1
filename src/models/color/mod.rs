//! Color values shared by site configuration and article presentation.
//!
//! Backend rows carry colors as hex text; this module owns the parse into
//! concrete channel values and the validation used by the models.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` string. The leading `#` is optional;
    /// alpha defaults to fully opaque.
    pub fn from_hex_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
        Some(RgbaColor::new(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            if hex.len() == 8 { channel(6)? } else { 255 },
        ))
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}

/// Check if a string is a valid `#RRGGBB` or `#RRGGBBAA` color code.
pub fn is_valid_hex_color(color: &str) -> bool {
    let color = color.trim();
    if !color.starts_with('#') {
        return false;
    }
    let hex = &color[1..];
    matches!(hex.len(), 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
