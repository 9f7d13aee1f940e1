// Article module
// Content record model for the news/events board

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::color::is_valid_hex_color;
use super::image::{ImageRef, ImageSequence};

/// One content record as delivered by the hosted backend.
///
/// `event_date` and `event_time` are kept as the text the backend stores
/// ("YYYY-MM-DD" and "HH:MM"); the countdown engine owns their parsing so
/// malformed rows degrade to the expired state instead of failing the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Calendar date of the event this article announces ("YYYY-MM-DD")
    #[serde(default)]
    pub event_date: Option<String>,
    /// Time of day of the event ("HH:MM")
    #[serde(default)]
    pub event_time: Option<String>,
    /// Primary image, rendered first in the carousel
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// Additional images in backend order
    #[serde(default)]
    pub additional_images: Vec<ImageRef>,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Presentation-only hex color for the card
    #[serde(default)]
    pub display_color: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Local>>,
}

impl Article {
    /// Create a new article with the required title.
    ///
    /// # Examples
    /// ```
    /// use event_board::models::article::Article;
    ///
    /// let article = Article::new("Spring concert").unwrap();
    /// assert_eq!(article.title, "Spring concert");
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Article title cannot be empty".to_string());
        }

        Ok(Self {
            id: None,
            title,
            content: None,
            location: None,
            event_date: None,
            event_time: None,
            image: None,
            additional_images: Vec::new(),
            category_id: None,
            display_color: None,
            created_at: None,
        })
    }

    /// Create a builder for constructing articles with optional fields
    pub fn builder() -> ArticleBuilder {
        ArticleBuilder::new()
    }

    /// Validate the article
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Article title cannot be empty".to_string());
        }

        if let Some(ref color) = self.display_color {
            if !is_valid_hex_color(color) {
                return Err("Display color must be in hex format (#RRGGBB or #RRGGBBAA)".to_string());
            }
        }

        Ok(())
    }

    /// The card's image sequence: primary image first, then the rest.
    pub fn image_sequence(&self) -> ImageSequence {
        ImageSequence::from_parts(self.image.clone(), &self.additional_images)
    }

    /// Whether the record carries both halves of an event target.
    pub fn has_event_schedule(&self) -> bool {
        self.event_date.is_some() && self.event_time.is_some()
    }
}

/// Builder for creating articles with optional fields
pub struct ArticleBuilder {
    title: Option<String>,
    content: Option<String>,
    location: Option<String>,
    event_date: Option<String>,
    event_time: Option<String>,
    image: Option<ImageRef>,
    additional_images: Vec<ImageRef>,
    category_id: Option<i64>,
    display_color: Option<String>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            content: None,
            location: None,
            event_date: None,
            event_time: None,
            image: None,
            additional_images: Vec::new(),
            category_id: None,
            display_color: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the event date ("YYYY-MM-DD")
    pub fn event_date(mut self, date: impl Into<String>) -> Self {
        self.event_date = Some(date.into());
        self
    }

    /// Set the event time of day ("HH:MM")
    pub fn event_time(mut self, time: impl Into<String>) -> Self {
        self.event_time = Some(time.into());
        self
    }

    pub fn image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    pub fn additional_image(mut self, image: ImageRef) -> Self {
        self.additional_images.push(image);
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Set the display color (hex format)
    pub fn display_color(mut self, color: impl Into<String>) -> Self {
        self.display_color = Some(color.into());
        self
    }

    /// Build the article
    pub fn build(self) -> Result<Article, String> {
        let title = self.title.ok_or("Article title is required")?;

        let article = Article {
            id: None,
            title,
            content: self.content,
            location: self.location,
            event_date: self.event_date,
            event_time: self.event_time,
            image: self.image,
            additional_images: self.additional_images,
            category_id: self.category_id,
            display_color: self.display_color,
            created_at: None,
        };

        article.validate()?;
        Ok(article)
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
