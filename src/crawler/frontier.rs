//! Crawl frontier
//!
//! Breadth-first traversal from a seed URL: a FIFO queue of (url, depth)
//! tasks, a visited set, domain scoping, and page/depth budgets. After each
//! expansion the pending queue is shuffled (under the default ordering
//! policy) so the request pattern does not follow a predictable
//! breadth-first sweep.

use crate::config::{CrawlerConfig, FrontierOrdering};
use crate::crawler::fetcher::Fetcher;
use crate::crawler::render::Renderer;
use crate::url::{extract_domain, normalize_link};
use rand::seq::SliceRandom;
use scraper::{Html, Selector};
use std::collections::{HashSet, VecDeque};
use url::Url;

/// One unit of crawl work: a URL and the depth it was discovered at
#[derive(Debug, Clone)]
pub struct CrawlTask {
    pub url: Url,
    pub depth: u32,
}

/// A successfully fetched page. Pages keep their collection order; no URL
/// appears twice.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    pub html: String,
}

/// Crawls a site starting from `seed`.
///
/// Terminates when the queue is empty or the collected-page count reaches
/// `max_pages`. Fetch failures and malformed links are per-page and
/// non-fatal; the crawl completes with whatever pages succeeded.
pub async fn crawl_site<R: Renderer>(
    fetcher: &mut Fetcher<R>,
    config: &CrawlerConfig,
    seed: Url,
) -> Vec<FetchedPage> {
    tracing::info!(
        "Starting crawl from {} with max depth {} and max pages {}",
        seed,
        config.max_depth,
        config.max_pages
    );

    let seed_domain = extract_domain(&seed);
    let mut queue: VecDeque<CrawlTask> = VecDeque::new();
    queue.push_back(CrawlTask {
        url: seed,
        depth: 0,
    });

    let mut visited: HashSet<String> = HashSet::new();
    let mut pages: Vec<FetchedPage> = Vec::new();

    while pages.len() < config.max_pages {
        let Some(task) = queue.pop_front() else {
            break;
        };

        if visited.contains(task.url.as_str()) || task.depth > config.max_depth {
            continue;
        }
        visited.insert(task.url.to_string());

        if config.same_domain_only && extract_domain(&task.url) != seed_domain {
            tracing::debug!("Skipping {} - different domain from seed", task.url);
            continue;
        }

        tracing::info!("Crawling: {} (depth: {})", task.url, task.depth);

        let Some(html) = fetcher.fetch(&task.url).await else {
            continue;
        };

        // Pages at the depth budget are leaves: collect their content but do
        // not expand the frontier from them.
        if task.depth < config.max_depth {
            let links = extract_links(&html, &task.url);
            tracing::debug!("Found {} links on {}", links.len(), task.url);

            for link in links {
                if !visited.contains(link.as_str()) {
                    queue.push_back(CrawlTask {
                        url: link,
                        depth: task.depth + 1,
                    });
                }
            }

            if config.frontier_ordering == FrontierOrdering::Shuffled {
                queue.make_contiguous().shuffle(&mut rand::thread_rng());
            }
        }

        pages.push(FetchedPage {
            url: task.url,
            html,
        });
    }

    tracing::info!("Crawl complete. Retrieved {} pages", pages.len());
    pages
}

/// Extracts and normalizes every anchor target on a page. Unparseable and
/// non-document links are silently dropped.
fn extract_links(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(link) = normalize_link(href, Some(base)) {
                links.push(link);
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links_resolves_and_filters() {
        let base = Url::parse("https://example.com/dir/page").unwrap();
        let html = r#"
            <html><body>
                <a href="/about">About</a>
                <a href="child">Child</a>
                <a href="https://other.com/x">Other</a>
                <a href="mailto:a@b.com">Mail</a>
                <a href="/styles.css">Style</a>
            </body></html>
        "#;

        let links = extract_links(html, &base);
        let strings: Vec<&str> = links.iter().map(Url::as_str).collect();

        assert_eq!(
            strings,
            vec![
                "https://example.com/about",
                "https://example.com/dir/child",
                "https://other.com/x",
            ]
        );
    }

    #[test]
    fn test_extract_links_empty_page() {
        let base = Url::parse("https://example.com/").unwrap();
        assert!(extract_links("<html><body>no links</body></html>", &base).is_empty());
    }
}
