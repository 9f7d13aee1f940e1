// Test fixtures - reusable test data
// Provides consistent backend-shaped rows across test files

use event_board::models::article::Article;
use event_board::models::category::Category;
use event_board::models::image::ImageRef;
use event_board::models::site_config::SiteConfig;
use event_board::services::repository::InMemoryRepository;

/// Sample instants for testing
pub mod clocks {
    use chrono::{DateTime, Local, TimeZone};

    /// Jan 8, 2025 at 14:00 local
    pub fn jan_8_2025_afternoon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 8, 14, 0, 0).unwrap()
    }

    /// Jun 1, 2025 at 09:30 local
    pub fn jun_1_2025_morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
    }
}

/// Sample records for testing
pub mod records {
    use super::*;

    /// An article announcing an event two days after the Jan 8 clock
    pub fn concert() -> Article {
        let mut article = Article::builder()
            .title("Winter concert")
            .content("School orchestra, all welcome")
            .location("Main hall")
            .event_date("2025-01-10")
            .event_time("14:00")
            .image(ImageRef::new("https://cdn.example/concert/cover.jpg"))
            .additional_image(ImageRef::new("https://cdn.example/concert/stage.jpg"))
            .additional_image(ImageRef::new("https://cdn.example/concert/choir.jpg"))
            .category_id(1)
            .build()
            .unwrap();
        article.id = Some(1);
        article
    }

    /// A plain announcement with no event schedule and no images
    pub fn notice() -> Article {
        let mut article = Article::builder()
            .title("Library opening hours")
            .content("New hours from next week")
            .category_id(2)
            .build()
            .unwrap();
        article.id = Some(2);
        article
    }

    /// An article whose event has already passed
    pub fn past_event() -> Article {
        let mut article = Article::builder()
            .title("Autumn fair wrap-up")
            .event_date("2024-10-05")
            .event_time("10:00")
            .build()
            .unwrap();
        article.id = Some(3);
        article
    }

    /// A row with malformed schedule text, as a buggy backend might store
    pub fn malformed_schedule() -> Article {
        let mut article = Article::builder()
            .title("Date TBD")
            .event_date("sometime soon")
            .event_time("afternoon-ish")
            .build()
            .unwrap();
        article.id = Some(4);
        article
    }

    pub fn categories() -> Vec<Category> {
        vec![
            {
                let mut cat = Category::new("Music", "#8B5CF6");
                cat.id = Some(1);
                cat
            },
            {
                let mut cat = Category::new("General", "#3B82F6");
                cat.id = Some(2);
                cat
            },
        ]
    }

    pub fn site_config() -> SiteConfig {
        let mut config = SiteConfig::new("#0A2291");
        config.id = Some(1);
        config
    }
}

/// A fully populated repository, configuration row included
pub fn seeded_repository() -> InMemoryRepository {
    InMemoryRepository::new(
        vec![
            records::concert(),
            records::notice(),
            records::past_event(),
            records::malformed_schedule(),
        ],
        records::categories(),
        Some(records::site_config()),
    )
}

/// The same rows with the configuration row missing
pub fn unconfigured_repository() -> InMemoryRepository {
    InMemoryRepository::new(
        vec![records::concert(), records::notice()],
        records::categories(),
        None,
    )
}
