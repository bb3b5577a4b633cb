mod client;
mod headers;

pub use client::{HttpTransport, PageFetcher, Sleeper, ThreadSleeper, Transport};
pub use headers::random_user_agent;
