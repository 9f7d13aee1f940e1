//! Category model for grouping articles.
//!
//! Categories come from their own backend table and drive the client-side
//! filter chips; the color is presentation-only.

use serde::{Deserialize, Serialize};

use super::color::is_valid_hex_color;

/// A category an article can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Backend row identifier
    pub id: Option<i64>,
    /// Display name of the category
    pub name: String,
    /// Hex color code for the filter chip (e.g. "#3B82F6")
    pub color: String,
}

impl Category {
    /// Create a new category with the given name and color.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Validate the category data.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong);
        }

        if !is_valid_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor);
        }

        Ok(())
    }
}

/// Validation errors for Category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong,
    InvalidColor,
}

impl std::fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong => write!(f, "Category name must be 50 characters or less"),
            Self::InvalidColor => write!(f, "Invalid color format (use hex like #FF0000)"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_new() {
        let cat = Category::new("Sports", "#3B82F6");
        assert_eq!(cat.name, "Sports");
        assert_eq!(cat.color, "#3B82F6");
        assert!(cat.id.is_none());
    }

    #[test]
    fn test_validate_valid_category() {
        let cat = Category::new("Sports", "#3B82F6");
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let cat = Category::new("   ", "#3B82F6");
        assert_eq!(cat.validate(), Err(CategoryValidationError::EmptyName));
    }

    #[test]
    fn test_validate_name_too_long() {
        let cat = Category::new("a".repeat(51), "#3B82F6");
        assert_eq!(cat.validate(), Err(CategoryValidationError::NameTooLong));
    }

    #[test]
    fn test_validate_invalid_color() {
        let cat = Category::new("Sports", "3B82F6");
        assert_eq!(cat.validate(), Err(CategoryValidationError::InvalidColor));
    }

    #[test]
    fn test_deserializes_from_backend_row() {
        let row = r##"{"id": 7, "name": "Culture", "color": "#10B981"}"##;
        let cat: Category = serde_json::from_str(row).unwrap();
        assert_eq!(cat.id, Some(7));
        assert_eq!(cat.name, "Culture");
        assert!(cat.validate().is_ok());
    }
}
