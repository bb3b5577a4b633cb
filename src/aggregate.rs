// aggregate.rs
use crate::config::ScrapeConfig;
use crate::errors::ScrapeError;
use crate::fetch::{HttpTransport, PageFetcher, Sleeper, ThreadSleeper, Transport};
use crate::records::{ListingRecord, Source};
use crate::sources::{drive_category, BrkSource, JijiSource, PropertySource};
use std::collections::{HashMap, HashSet};

/// Runs every configured source/category sequentially and merges the
/// results into one deduplicated collection.
pub struct MultiSourceScraper {
    config: ScrapeConfig,
}

impl MultiSourceScraper {
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Vec<ListingRecord>, ScrapeError> {
        let mut fetcher = PageFetcher::<HttpTransport, ThreadSleeper>::new(&self.config)?;
        self.run_with(&mut fetcher)
    }

    /// Same pipeline over an injected fetcher, so tests drive it
    /// against stub transports.
    pub fn run_with<T: Transport, S: Sleeper>(
        &self,
        fetcher: &mut PageFetcher<T, S>,
    ) -> Result<Vec<ListingRecord>, ScrapeError> {
        let mut merged = Vec::new();
        let mut total = 0;

        for source_config in &self.config.sources {
            let scraper = scraper_for(source_config.source);
            let mut collected = Vec::new();

            for category_url in &source_config.category_urls {
                log::info!("Scraping category: {category_url}");
                let run = drive_category(
                    fetcher,
                    scraper.as_ref(),
                    category_url,
                    self.config.max_pages_per_category,
                );
                log::info!(
                    "Collected {} listings from {category_url} ({:?} after {} pages)",
                    run.records.len(),
                    run.state,
                    run.pages_visited,
                );
                collected.extend(run.records);
            }

            total += collected.len();
            let unique = dedup_by_url(collected);
            log::info!(
                "{}: {} listings after URL dedup",
                source_config.source,
                unique.len()
            );
            merged.extend(unique);
        }

        let unique = dedup_cross_source(merged);
        log::info!(
            "Total listings collected: {total}, unique after deduplication: {}",
            unique.len()
        );
        Ok(unique)
    }
}

/// Static source set; no runtime plugin discovery.
fn scraper_for(source: Source) -> Box<dyn PropertySource> {
    match source {
        Source::Jiji => Box::new(JijiSource),
        Source::BuyRentKenya => Box::new(BrkSource),
    }
}

/// Intra-source dedup keyed by URL. Pagination drift shows the same
/// listing on successive snapshots; the last-seen record wins, kept at
/// the position of its first appearance. Records without a URL pass
/// through untouched.
pub fn dedup_by_url(records: Vec<ListingRecord>) -> Vec<ListingRecord> {
    let mut out: Vec<ListingRecord> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for record in records {
        match &record.url {
            Some(url) => match position.get(url) {
                Some(&i) => out[i] = record,
                None => {
                    position.insert(url.clone(), out.len());
                    out.push(record);
                }
            },
            None => out.push(record),
        }
    }

    out
}

/// Cross-source dedup over (price, location, bedrooms, type), since
/// URLs are not comparable between sources. First seen wins. The key
/// is deliberately coarse and can conflate similar units in one
/// building; accepted as-is.
pub fn dedup_cross_source(records: Vec<ListingRecord>) -> Vec<ListingRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.composite_key()))
        .collect()
}
