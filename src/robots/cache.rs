use crate::robots::RobotsRules;
use crate::url::extract_domain;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Timeout for fetching robots.txt
const ROBOTS_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-domain robots.txt decision cache.
///
/// robots.txt is fetched at most once per domain; the allow/disallow
/// decision for the first URL checked on that domain is memoized and reused
/// for the rest of the cache's lifetime (one fetch engine, one crawl run).
/// Any fetch error or non-200 response caches "allowed" - the crawler fails
/// open rather than stalling on an unreachable robots.txt.
pub struct RobotsCache {
    /// Whether robots.txt is consulted at all
    respect_robots: bool,

    /// User agent matched against robots.txt user-agent blocks
    user_agent: String,

    /// Cached per-domain decisions
    decisions: HashMap<String, bool>,
}

impl RobotsCache {
    pub fn new(respect_robots: bool, user_agent: &str) -> Self {
        Self {
            respect_robots,
            user_agent: user_agent.to_string(),
            decisions: HashMap::new(),
        }
    }

    /// Checks whether a URL may be fetched.
    ///
    /// Returns `true` immediately when politeness is disabled. Otherwise the
    /// domain's robots.txt is fetched (once) and the URL's path is evaluated
    /// against the parsed rules.
    pub async fn is_allowed(&mut self, client: &Client, url: &Url) -> bool {
        if !self.respect_robots {
            return true;
        }

        let Some(domain) = extract_domain(url) else {
            // No host to ask; nothing to disallow
            return true;
        };

        if let Some(&allowed) = self.decisions.get(&domain) {
            return allowed;
        }

        let allowed = self.check_robots(client, url, &domain).await;
        self.decisions.insert(domain, allowed);
        allowed
    }

    async fn check_robots(&self, client: &Client, url: &Url, domain: &str) -> bool {
        let robots_url = match url.join("/robots.txt") {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!("Could not build robots.txt URL for {}: {}", domain, e);
                return true;
            }
        };

        let response = client
            .get(robots_url)
            .timeout(ROBOTS_FETCH_TIMEOUT)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status() == StatusCode::OK => match resp.text().await {
                Ok(body) => {
                    let rules = RobotsRules::parse(&body);
                    let allowed = rules.is_allowed(&self.user_agent, url.path());
                    tracing::debug!(
                        "robots.txt for {}: {} is {}",
                        domain,
                        url.path(),
                        if allowed { "allowed" } else { "disallowed" }
                    );
                    allowed
                }
                Err(e) => {
                    tracing::warn!("Error reading robots.txt body for {}: {}", domain, e);
                    true
                }
            },
            Ok(resp) => {
                tracing::debug!(
                    "robots.txt for {} returned {}, assuming allowed",
                    domain,
                    resp.status()
                );
                true
            }
            Err(e) => {
                tracing::warn!("Error checking robots.txt for {}: {}", domain, e);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_with_robots(body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_disallowed_path_blocked() {
        let server = server_with_robots("User-agent: *\nDisallow: /private").await;
        let client = Client::new();
        let mut cache = RobotsCache::new(true, "TestBot/1.0");

        let blocked = Url::parse(&format!("{}/private/page", server.uri())).unwrap();
        assert!(!cache.is_allowed(&client, &blocked).await);
    }

    #[tokio::test]
    async fn test_allowed_path_passes() {
        let server = server_with_robots("User-agent: *\nDisallow: /private").await;
        let client = Client::new();
        let mut cache = RobotsCache::new(true, "TestBot/1.0");

        let open = Url::parse(&format!("{}/public", server.uri())).unwrap();
        assert!(cache.is_allowed(&client, &open).await);
    }

    #[tokio::test]
    async fn test_missing_robots_fails_open() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = Client::new();
        let mut cache = RobotsCache::new(true, "TestBot/1.0");

        let url = Url::parse(&format!("{}/anything", server.uri())).unwrap();
        assert!(cache.is_allowed(&client, &url).await);
    }

    #[tokio::test]
    async fn test_decision_fetched_once_per_domain() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow:"))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new();
        let mut cache = RobotsCache::new(true, "TestBot/1.0");

        for p in ["/a", "/b", "/c"] {
            let url = Url::parse(&format!("{}{}", server.uri(), p)).unwrap();
            assert!(cache.is_allowed(&client, &url).await);
        }
        // wiremock verifies the expect(1) on drop
    }

    #[tokio::test]
    async fn test_disabled_politeness_skips_fetch() {
        // No server at all: disabled politeness must not touch the network
        let mut cache = RobotsCache::new(false, "TestBot/1.0");
        let client = Client::new();
        let url = Url::parse("http://127.0.0.1:1/never-fetched").unwrap();
        assert!(cache.is_allowed(&client, &url).await);
    }
}
