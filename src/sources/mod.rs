mod brk;
mod jiji;
mod pagination;

pub use brk::BrkSource;
pub use jiji::JijiSource;
pub use pagination::{drive_category, CategoryRun, DriveState};

use crate::records::{ListingRecord, Source};

/// One origin website with its own markup structure and heuristics.
/// The implementation set is statically known; the aggregator
/// dispatches over it directly.
pub trait PropertySource {
    fn source(&self) -> Source;

    /// URL for the given 1-based page of one category. Both current
    /// sources paginate with a `?page=N` query after page 1.
    fn page_url(&self, category_url: &str, page: u32) -> String {
        if page == 1 {
            category_url.to_string()
        } else {
            format!("{category_url}?page={page}")
        }
    }

    /// Extracts validated candidate records from one page of markup.
    /// A single card failing its heuristics is skipped, never fatal to
    /// the page.
    fn extract(&self, html: &str) -> Vec<ListingRecord>;
}
