//! Record source boundary.
//!
//! The board never knows how rows are fetched; hosted-backend clients
//! implement [`ContentRepository`] outside this crate. [`InMemoryRepository`]
//! serves tests and callers that already hold deserialized rows.

use anyhow::Result;
use serde::Deserialize;

use crate::models::article::Article;
use crate::models::category::Category;
use crate::models::site_config::SiteConfig;

/// Opaque source of board records.
pub trait ContentRepository {
    /// All published articles, in display order.
    fn fetch_articles(&self) -> Result<Vec<Article>>;

    /// All categories available for filtering.
    fn fetch_categories(&self) -> Result<Vec<Category>>;

    /// The single site configuration row, if one exists yet.
    fn fetch_site_config(&self) -> Result<Option<SiteConfig>>;
}

/// Repository over rows already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    pub articles: Vec<Article>,
    pub categories: Vec<Category>,
    pub site_config: Option<SiteConfig>,
}

/// Shape of a combined backend payload.
#[derive(Debug, Deserialize)]
struct RowPayload {
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    site_config: Option<SiteConfig>,
}

impl InMemoryRepository {
    pub fn new(
        articles: Vec<Article>,
        categories: Vec<Category>,
        site_config: Option<SiteConfig>,
    ) -> Self {
        Self {
            articles,
            categories,
            site_config,
        }
    }

    /// Build a repository from a JSON payload of backend rows.
    pub fn from_json(payload: &str) -> Result<Self> {
        let rows: RowPayload = serde_json::from_str(payload)?;
        Ok(Self {
            articles: rows.articles,
            categories: rows.categories,
            site_config: rows.site_config,
        })
    }
}

impl ContentRepository for InMemoryRepository {
    fn fetch_articles(&self) -> Result<Vec<Article>> {
        Ok(self.articles.clone())
    }

    fn fetch_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn fetch_site_config(&self) -> Result<Option<SiteConfig>> {
        Ok(self.site_config.clone())
    }
}
