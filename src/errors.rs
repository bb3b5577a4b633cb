// errors.rs
use std::fmt;

/// Errors that can end a single fetch attempt. Retried by the fetcher;
/// after retries are exhausted the last one is handed to the pagination
/// driver, which aborts that source/category only.
#[derive(Debug, Clone)]
pub enum FetchError {
    Network(String),
    HttpStatus(u16),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::HttpStatus(code) => write!(f, "HTTP status {code}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Errors fatal to a whole run: bad configuration (caught before any
/// network activity) or a failure producing the final dataset.
#[derive(Debug)]
pub enum ScrapeError {
    Config(String),
    Client(String),
    Csv(String),
    Io(String),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ScrapeError::Client(msg) => write!(f, "HTTP client error: {msg}"),
            ScrapeError::Csv(msg) => write!(f, "CSV error: {msg}"),
            ScrapeError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ScrapeError {}
