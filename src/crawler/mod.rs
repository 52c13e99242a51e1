//! Crawler module for web page fetching and traversal
//!
//! This module contains the fetch engine and the frontier that drives it:
//! - Per-domain rate limiting and retry with backoff
//! - Robots-gated HTTP fetching with an optional rendering fallback
//! - Breadth-first traversal with dedup, domain scoping, and budgets

mod fetcher;
mod frontier;
mod limiter;
mod render;

pub use fetcher::{build_http_client, FetchError, Fetcher};
pub use frontier::{crawl_site, CrawlTask, FetchedPage};
pub use limiter::{request_with_backoff, RateLimiter, BASE_RETRY_DELAY, MAX_RETRIES};
pub use render::{DisabledRenderer, RenderError, Renderer};
