//! Site configuration model.
//!
//! A single row fetched once per view activation. The board renders
//! nothing until this row is present; see the board service for the gate.

use serde::{Deserialize, Serialize};

use super::color::{is_valid_hex_color, RgbaColor};

/// The one-row site configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Backend row identifier
    pub id: Option<i64>,
    /// Presentation accent color as hex text (e.g. "#0A2291")
    pub accent_color: String,
}

impl SiteConfig {
    pub fn new(accent_color: impl Into<String>) -> Self {
        Self {
            id: None,
            accent_color: accent_color.into(),
        }
    }

    /// Parsed accent color, or `None` when the stored text is malformed.
    pub fn accent_rgba(&self) -> Option<RgbaColor> {
        RgbaColor::from_hex_str(&self.accent_color)
    }

    /// Validate the configuration row.
    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_hex_color(&self.accent_color) {
            return Err("Accent color must be in hex format (#RRGGBB or #RRGGBBAA)".to_string());
        }
        Ok(())
    }
}
