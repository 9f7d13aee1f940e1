//! Image references and the ordered sequence a card's carousel walks.

use serde::{Deserialize, Serialize};

/// Reference to one hosted image asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Public URL of the asset
    pub url: String,
    /// Optional alternative text
    #[serde(default)]
    pub alt_text: Option<String>,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: None,
        }
    }
}

/// Ordered image list for one card: the primary image (if any) first,
/// followed by the additional images in backend order.
///
/// Positions are fixed once built; duplicate URLs are kept as distinct
/// positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSequence {
    images: Vec<ImageRef>,
}

impl ImageSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the sequence from a record's image fields.
    pub fn from_parts(primary: Option<ImageRef>, additional: &[ImageRef]) -> Self {
        let mut images = Vec::with_capacity(additional.len() + 1);
        if let Some(primary) = primary {
            images.push(primary);
        }
        images.extend_from_slice(additional);
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }
}
