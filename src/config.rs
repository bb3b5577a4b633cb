// config.rs
use crate::errors::ScrapeError;
use crate::records::Source;
use std::path::PathBuf;
use std::time::Duration;

/// Seed categories for one source website.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub source: Source,
    pub category_urls: Vec<String>,
}

/// Run-wide settings. Defaults mirror the production crawl: polite 2s
/// delay, 3 fetch attempts, 15 pages per category.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub delay: Duration,
    pub max_retries: u32,
    pub max_pages_per_category: u32,
    pub output_path: PathBuf,
    pub sources: Vec<SourceConfig>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            max_retries: 3,
            max_pages_per_category: 15,
            output_path: PathBuf::from("data/raw_listings.csv"),
            sources: vec![
                SourceConfig {
                    source: Source::Jiji,
                    category_urls: vec![
                        "https://jiji.co.ke/nairobi/houses-apartments-for-sale".to_string(),
                        "https://jiji.co.ke/nairobi/land-and-plots-for-sale".to_string(),
                    ],
                },
                SourceConfig {
                    source: Source::BuyRentKenya,
                    category_urls: vec![
                        "https://www.buyrentkenya.com/houses-for-rent".to_string(),
                    ],
                },
            ],
        }
    }
}

impl ScrapeConfig {
    /// Defaults with optional environment overrides
    /// (SCRAPER_MAX_PAGES, SCRAPER_DELAY_SECS, SCRAPER_OUTPUT).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(pages) = env_parse::<u32>("SCRAPER_MAX_PAGES") {
            config.max_pages_per_category = pages;
        }
        if let Some(secs) = env_parse::<u64>("SCRAPER_DELAY_SECS") {
            config.delay = Duration::from_secs(secs);
        }
        if let Ok(path) = std::env::var("SCRAPER_OUTPUT") {
            config.output_path = PathBuf::from(path);
        }

        config
    }

    /// Rejects unusable settings before any network activity.
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.max_pages_per_category == 0 {
            return Err(ScrapeError::Config(
                "max_pages_per_category must be at least 1".to_string(),
            ));
        }
        if self.max_retries == 0 {
            return Err(ScrapeError::Config(
                "max_retries must be at least 1".to_string(),
            ));
        }
        if self.sources.is_empty() {
            return Err(ScrapeError::Config("no sources configured".to_string()));
        }
        for source in &self.sources {
            if source.category_urls.is_empty() {
                return Err(ScrapeError::Config(format!(
                    "no category URLs configured for {}",
                    source.source
                )));
            }
            if source.category_urls.iter().any(|u| u.trim().is_empty()) {
                return Err(ScrapeError::Config(format!(
                    "empty category URL configured for {}",
                    source.source
                )));
            }
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
