//! Per-view board state: readiness gating, filtering, and card refresh.
//!
//! One [`BoardService`] is created when a view activates and dropped when
//! it tears down. It owns the fetched records and each card's carousel and
//! countdown state; an external once-per-second drive calls
//! [`BoardService::refresh_countdowns`].

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::models::article::Article;
use crate::models::category::Category;
use crate::models::color::RgbaColor;
use crate::models::site_config::SiteConfig;
use crate::services::carousel::CarouselIndexer;
use crate::services::countdown::{self, CountdownState};
use crate::services::repository::ContentRepository;

/// Lifecycle phase of a board view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    /// The configuration row has not arrived; nothing is rendered.
    AwaitingConfig,
    /// Configuration is present and cards are visible.
    Ready,
}

/// One article presented as a card, with its carousel and countdown.
#[derive(Debug, Clone)]
pub struct ArticleCard {
    article: Article,
    carousel: CarouselIndexer,
    countdown: CountdownState,
}

impl ArticleCard {
    fn new(article: Article) -> Self {
        let carousel = CarouselIndexer::new(article.image_sequence());
        Self {
            article,
            carousel,
            countdown: CountdownState::EXPIRED,
        }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn carousel(&self) -> &CarouselIndexer {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselIndexer {
        &mut self.carousel
    }

    pub fn countdown(&self) -> CountdownState {
        self.countdown
    }

    /// Recompute this card's countdown; true when the state changed.
    fn refresh_countdown(&mut self, now: DateTime<Local>) -> bool {
        let next = countdown::compute(
            self.article.event_date.as_deref().unwrap_or(""),
            self.article.event_time.as_deref().unwrap_or(""),
            now,
        );
        if next != self.countdown {
            self.countdown = next;
            true
        } else {
            false
        }
    }
}

/// Everything one view fetched, plus its filter state.
pub struct BoardService {
    site_config: Option<SiteConfig>,
    categories: Vec<Category>,
    cards: Vec<ArticleCard>,
    search_query: String,
    category_filter: Option<i64>,
}

impl BoardService {
    /// Fetch all records once, as the view activates, and compute every
    /// card's initial countdown.
    pub fn load_from(repo: &dyn ContentRepository) -> Result<Self> {
        Self::load_from_at(repo, Local::now())
    }

    /// `load_from` with an injected clock, for deterministic tests.
    pub fn load_from_at(repo: &dyn ContentRepository, now: DateTime<Local>) -> Result<Self> {
        let site_config = repo.fetch_site_config()?;
        let categories = repo.fetch_categories()?;
        let articles = repo.fetch_articles()?;

        if site_config.is_none() {
            log::info!("Site configuration row not present; board stays hidden");
        }

        let mut board = Self {
            site_config,
            categories,
            cards: articles.into_iter().map(ArticleCard::new).collect(),
            search_query: String::new(),
            category_filter: None,
        };
        board.refresh_countdowns(now);
        Ok(board)
    }

    pub fn phase(&self) -> BoardPhase {
        if self.site_config.is_some() {
            BoardPhase::Ready
        } else {
            BoardPhase::AwaitingConfig
        }
    }

    /// Accent color from the configuration row, once ready.
    pub fn accent_color(&self) -> Option<RgbaColor> {
        self.site_config.as_ref().and_then(SiteConfig::accent_rgba)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_category_filter(&mut self, category_id: Option<i64>) {
        self.category_filter = category_id;
    }

    /// Cards that pass the readiness gate and the active filters.
    pub fn visible_cards(&self) -> Vec<&ArticleCard> {
        if self.phase() == BoardPhase::AwaitingConfig {
            return Vec::new();
        }
        self.cards
            .iter()
            .filter(|card| self.matches_filters(card.article()))
            .collect()
    }

    /// Total number of fetched cards, ignoring filters and the gate.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Look up a card by its article's backend id, e.g. to drive its
    /// carousel from input events.
    pub fn card_mut(&mut self, article_id: i64) -> Option<&mut ArticleCard> {
        self.cards
            .iter_mut()
            .find(|card| card.article().id == Some(article_id))
    }

    /// Recompute every card's countdown, returning the article ids whose
    /// state changed so the caller knows to repaint.
    pub fn refresh_countdowns(&mut self, now: DateTime<Local>) -> Vec<i64> {
        let mut changed = Vec::new();
        for card in &mut self.cards {
            if card.refresh_countdown(now) {
                if let Some(id) = card.article().id {
                    changed.push(id);
                }
            }
        }
        changed
    }

    fn matches_filters(&self, article: &Article) -> bool {
        if let Some(category_id) = self.category_filter {
            if article.category_id != Some(category_id) {
                return false;
            }
        }
        matches_query(article, &self.search_query)
    }
}

/// Case-insensitive substring match over title, content, and location.
/// An empty query matches everything.
fn matches_query(article: &Article, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    let contains = |text: &str| text.to_lowercase().contains(&query);
    contains(&article.title)
        || article.content.as_deref().is_some_and(contains)
        || article.location.as_deref().is_some_and(contains)
}
