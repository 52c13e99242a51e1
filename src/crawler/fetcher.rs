//! Fetch engine
//!
//! Obtains a page's HTML under politeness constraints: rate-limiter
//! admission first, then a robots.txt check, then an optional
//! rendering-capable fetch with a plain HTTP GET (wrapped in retry/backoff)
//! as the fallback. Every transport failure is absorbed and logged; the only
//! externally visible outcome of a failed fetch is an absent result.

use crate::config::CrawlerConfig;
use crate::crawler::limiter::{request_with_backoff, RateLimiter, BASE_RETRY_DELAY, MAX_RETRIES};
use crate::crawler::render::Renderer;
use crate::robots::RobotsCache;
use crate::url::extract_domain;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Timeout for a plain HTTP GET
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for a rendering-capable page load
const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the HTTP transport, classified so backoff logging can tell
/// rate-limit responses apart from other failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },
}

/// Builds the HTTP client shared by page fetches and robots.txt lookups
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// The fetch engine for one crawl run.
///
/// Owns the politeness state (rate windows and robots decisions) for the
/// run; both caches are destroyed with it. Never a process-wide singleton.
pub struct Fetcher<R: Renderer> {
    client: Client,
    limiter: RateLimiter,
    robots: RobotsCache,
    renderer: R,
    use_rendering: bool,
}

impl<R: Renderer> Fetcher<R> {
    pub fn new(config: &CrawlerConfig, renderer: R) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(&config.user_agent)?,
            limiter: RateLimiter::new(config.requests_per_minute),
            robots: RobotsCache::new(config.respect_robots, &config.user_agent),
            renderer,
            use_rendering: config.use_rendering,
        })
    }

    /// Fetches a URL's HTML.
    ///
    /// Returns `None` for robots-disallowed URLs (not an error) and for any
    /// terminal transport failure after retries. This method never
    /// propagates an error.
    pub async fn fetch(&mut self, url: &Url) -> Option<String> {
        let domain = extract_domain(url)?;

        self.limiter.admit(&domain).await;

        if !self.robots.is_allowed(&self.client, url).await {
            tracing::info!("Skipping {} - disallowed by robots.txt", url);
            return None;
        }

        if self.use_rendering {
            match self.renderer.render(url, PAGE_LOAD_TIMEOUT).await {
                Ok(html) => {
                    tracing::debug!("Fetched {} via renderer ({} bytes)", url, html.len());
                    return Some(html);
                }
                Err(e) => {
                    tracing::warn!("Rendering failed for {}: {}. Falling back to HTTP", url, e);
                }
            }
        }

        let client = &self.client;
        match request_with_backoff(|| get_html(client, url), MAX_RETRIES, BASE_RETRY_DELAY).await {
            Ok(html) => {
                tracing::debug!("Fetched {} ({} bytes)", url, html.len());
                Some(html)
            }
            Err(e) => {
                tracing::warn!("Failed to retrieve {}: {}", url, e);
                None
            }
        }
    }
}

async fn get_html(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.clone())
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Rate limited on {}", url);
        }
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontierOrdering;
    use crate::crawler::render::DisabledRenderer;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> CrawlerConfig {
        CrawlerConfig {
            max_depth: 1,
            max_pages: 10,
            requests_per_minute: 100,
            respect_robots: true,
            same_domain_only: true,
            use_rendering: false,
            user_agent: "TestBot/1.0".to_string(),
            frontier_ordering: FrontierOrdering::StrictBfs,
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
            .mount(&server)
            .await;

        let mut fetcher = Fetcher::new(&test_config(), DisabledRenderer).unwrap();
        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();

        let html = fetcher.fetch(&url).await;
        assert_eq!(html.as_deref(), Some("<html>hello</html>"));
    }

    #[tokio::test]
    async fn test_robots_disallow_yields_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /private"),
            )
            .mount(&server)
            .await;
        // The page itself is never requested
        Mock::given(method("GET"))
            .and(path("/private/page"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut fetcher = Fetcher::new(&test_config(), DisabledRenderer).unwrap();
        let url = Url::parse(&format!("{}/private/page", server.uri())).unwrap();

        assert!(fetcher.fetch(&url).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistent_error_yields_absent_after_retries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .expect(MAX_RETRIES as u64)
            .mount(&server)
            .await;

        let mut fetcher = Fetcher::new(&test_config(), DisabledRenderer).unwrap();
        let url = Url::parse(&format!("{}/broken", server.uri())).unwrap();

        assert!(fetcher.fetch(&url).await.is_none());
    }

    #[tokio::test]
    async fn test_rendering_failure_falls_back_to_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>fallback</html>"))
            .mount(&server)
            .await;

        let mut config = test_config();
        config.use_rendering = true;

        let mut fetcher = Fetcher::new(&config, DisabledRenderer).unwrap();
        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();

        let html = fetcher.fetch(&url).await;
        assert_eq!(html.as_deref(), Some("<html>fallback</html>"));
    }
}
