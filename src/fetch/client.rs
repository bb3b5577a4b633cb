// client.rs
use crate::config::ScrapeConfig;
use crate::errors::{FetchError, ScrapeError};
use crate::fetch::headers;
use crate::fetch::random_user_agent;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT};
use std::time::Duration;

/// One HTTP GET. Seam between the retry loop and the network so tests
/// can fail on demand.
pub trait Transport {
    fn get(&self, url: &str, user_agent: &str) -> Result<String, FetchError>;
}

/// Real transport over a blocking reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScrapeError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, user_agent: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .header(ACCEPT, headers::ACCEPT)
            .header(ACCEPT_LANGUAGE, headers::ACCEPT_LANGUAGE)
            .header(CONNECTION, "keep-alive")
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        resp.text().map_err(|e| FetchError::Network(e.to_string()))
    }
}

/// Where waiting happens. Tests substitute a recorder so the retry
/// loop runs without wall-clock sleeps.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Blocking page fetcher with rotating user-agents, bounded retries
/// and a polite delay after every successful fetch.
pub struct PageFetcher<T: Transport, S: Sleeper> {
    transport: T,
    sleeper: S,
    delay: Duration,
    max_retries: u32,
    backoff: Box<dyn Fn(u32) -> Duration>,
}

impl PageFetcher<HttpTransport, ThreadSleeper> {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let base = config.delay;
        Ok(Self::with_parts(
            HttpTransport::new()?,
            ThreadSleeper,
            config.delay,
            config.max_retries,
            Box::new(move |attempt| base * attempt),
        ))
    }
}

impl<T: Transport, S: Sleeper> PageFetcher<T, S> {
    /// Fully injectable constructor; `backoff` maps an attempt number
    /// (1-based) to the delay slept before the next attempt.
    pub fn with_parts(
        transport: T,
        sleeper: S,
        delay: Duration,
        max_retries: u32,
        backoff: Box<dyn Fn(u32) -> Duration>,
    ) -> Self {
        Self {
            transport,
            sleeper,
            delay,
            max_retries,
            backoff,
        }
    }

    /// Fetches one page. Returns either the full body or the last
    /// failure after `max_retries` attempts; never a partial result.
    pub fn fetch(&mut self, url: &str) -> Result<String, FetchError> {
        let mut last_err = FetchError::Network("no attempts made".to_string());

        for attempt in 1..=self.max_retries {
            match self.transport.get(url, random_user_agent()) {
                Ok(body) => {
                    if !self.delay.is_zero() {
                        self.sleeper.sleep(self.delay);
                    }
                    return Ok(body);
                }
                Err(e) => {
                    log::warn!("Attempt {attempt} failed for {url}: {e}");
                    last_err = e;
                    if attempt < self.max_retries {
                        self.sleeper.sleep((self.backoff)(attempt));
                    }
                }
            }
        }

        log::error!(
            "Failed to fetch {url} after {} attempts",
            self.max_retries
        );
        Err(last_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Fails the first `failures` calls, then returns the body.
    struct FlakyTransport {
        failures: RefCell<u32>,
        body: &'static str,
    }

    impl Transport for FlakyTransport {
        fn get(&self, _url: &str, _user_agent: &str) -> Result<String, FetchError> {
            let mut remaining = self.failures.borrow_mut();
            if *remaining > 0 {
                *remaining -= 1;
                Err(FetchError::Network("connection reset".to_string()))
            } else {
                Ok(self.body.to_string())
            }
        }
    }

    struct RecordingSleeper(Rc<RefCell<Vec<Duration>>>);

    impl Sleeper for RecordingSleeper {
        fn sleep(&mut self, duration: Duration) {
            self.0.borrow_mut().push(duration);
        }
    }

    fn fetcher(
        failures: u32,
        max_retries: u32,
    ) -> (PageFetcher<FlakyTransport, RecordingSleeper>, Rc<RefCell<Vec<Duration>>>) {
        let sleeps = Rc::new(RefCell::new(Vec::new()));
        let fetcher = PageFetcher::with_parts(
            FlakyTransport {
                failures: RefCell::new(failures),
                body: "<html>ok</html>",
            },
            RecordingSleeper(Rc::clone(&sleeps)),
            // Zero polite delay so only backoff sleeps are recorded.
            Duration::ZERO,
            max_retries,
            Box::new(|attempt| Duration::from_millis(100) * attempt),
        );
        (fetcher, sleeps)
    }

    #[test]
    fn two_failures_then_success_within_three_retries() {
        let (mut fetcher, sleeps) = fetcher(2, 3);

        let body = fetcher.fetch("https://example.com/page").unwrap();
        assert_eq!(body, "<html>ok</html>");

        let sleeps = sleeps.borrow();
        assert_eq!(sleeps.len(), 2);
        assert!(sleeps[0] < sleeps[1], "backoff must grow per attempt");
        assert_eq!(sleeps[0], Duration::from_millis(100));
        assert_eq!(sleeps[1], Duration::from_millis(200));
    }

    #[test]
    fn exhausted_retries_return_the_last_error() {
        let (mut fetcher, sleeps) = fetcher(5, 3);

        let err = fetcher.fetch("https://example.com/page").unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        // No sleep after the final failed attempt.
        assert_eq!(sleeps.borrow().len(), 2);
    }

    #[test]
    fn polite_delay_follows_a_successful_fetch() {
        let sleeps = Rc::new(RefCell::new(Vec::new()));
        let mut fetcher = PageFetcher::with_parts(
            FlakyTransport {
                failures: RefCell::new(0),
                body: "ok",
            },
            RecordingSleeper(Rc::clone(&sleeps)),
            Duration::from_secs(2),
            3,
            Box::new(|attempt| Duration::from_secs(2) * attempt),
        );

        fetcher.fetch("https://example.com").unwrap();
        assert_eq!(*sleeps.borrow(), vec![Duration::from_secs(2)]);
    }
}
