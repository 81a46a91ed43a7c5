//! HTTP transport module
//!
//! Provides the `Transport` abstraction the search service is written
//! against and the reqwest-backed `HttpClient` implementing it.
//!
//! # Features
//!
//! - **Automatic Retries**: Exponential backoff on throttling, 5xx and timeouts
//! - **Rate Limiting**: Token bucket rate limiter using governor

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, Transport};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
