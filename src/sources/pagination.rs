// pagination.rs
use crate::fetch::{PageFetcher, Sleeper, Transport};
use crate::records::ListingRecord;
use crate::sources::PropertySource;

/// Driver state for one source/category crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveState {
    Fetching,
    Extracting,
    /// End of pagination: an empty page or the max-page ceiling.
    Done,
    /// Fetch retries exhausted; terminal for this category only.
    Aborted,
}

/// Accumulated result of crawling one source/category.
#[derive(Debug)]
pub struct CategoryRun {
    pub records: Vec<ListingRecord>,
    pub state: DriveState,
    pub pages_visited: u32,
}

/// Crawls one category from page 1: fetch, extract, advance. A fetch
/// failure aborts this category; a page with zero candidates is the
/// normal end of pagination, not an error.
pub fn drive_category<T: Transport, S: Sleeper>(
    fetcher: &mut PageFetcher<T, S>,
    source: &dyn PropertySource,
    category_url: &str,
    max_pages: u32,
) -> CategoryRun {
    let mut records = Vec::new();
    let mut state = DriveState::Fetching;
    let mut page = 1;
    let mut pages_visited = 0;
    let mut html = String::new();

    loop {
        state = match state {
            DriveState::Fetching => {
                let page_url = source.page_url(category_url, page);
                log::info!("Scraping {} page {page}/{max_pages}", source.source());
                match fetcher.fetch(&page_url) {
                    Ok(body) => {
                        html = body;
                        DriveState::Extracting
                    }
                    Err(e) => {
                        log::warn!(
                            "Giving up on {} category {category_url} at page {page}: {e}",
                            source.source()
                        );
                        DriveState::Aborted
                    }
                }
            }
            DriveState::Extracting => {
                pages_visited += 1;
                let found = source.extract(&html);
                if found.is_empty() {
                    log::info!("No listings on page {page}, ending pagination");
                    DriveState::Done
                } else {
                    log::info!("Page {page}: {} listings", found.len());
                    records.extend(found);
                    if page >= max_pages {
                        DriveState::Done
                    } else {
                        page += 1;
                        DriveState::Fetching
                    }
                }
            }
            DriveState::Done | DriveState::Aborted => break,
        };
    }

    CategoryRun {
        records,
        state,
        pages_visited,
    }
}
