//! Scrape orchestration
//!
//! Ties the crawl, extraction, and relevance stages together: walk the site
//! from the seed, pull readable text out of every fetched page, then keep
//! the pages that match the run's instructions.

use crate::config::Config;
use crate::crawler::{crawl_site, Fetcher, Renderer};
use crate::extract::extract;
use crate::relevance::{filter_pages, ExtractedPage, ScrapeOutcome};
use crate::Result;
use tracing::info;
use url::Url;

/// Runs a full scrape described by `config`.
///
/// Returns `NoPages` when the crawl fetched nothing, `NoRelevantContent`
/// when pages were fetched but none survived the relevance filter, and
/// `Content` otherwise. Pages keep crawl order, so the seed page comes
/// first when it was reachable.
pub async fn scrape<R: Renderer>(config: &Config, renderer: R) -> Result<ScrapeOutcome> {
    let seed = Url::parse(&config.seed.url)?;
    info!(seed = %seed, "starting scrape");

    let mut fetcher = Fetcher::new(&config.crawler, renderer)?;
    let fetched = crawl_site(&mut fetcher, &config.crawler, seed).await;
    if fetched.is_empty() {
        info!("crawl produced no pages");
        return Ok(ScrapeOutcome::NoPages);
    }

    let extracted: Vec<ExtractedPage> = fetched
        .iter()
        .map(|page| ExtractedPage {
            url: page.url.to_string(),
            text: extract(&page.html, page.url.as_str()),
        })
        .collect();

    let relevant = filter_pages(&extracted, &config.seed.instructions);
    if relevant.is_empty() {
        info!(fetched = extracted.len(), "no pages matched the instructions");
        return Ok(ScrapeOutcome::NoRelevantContent);
    }

    info!(
        fetched = extracted.len(),
        kept = relevant.len(),
        "scrape complete"
    );
    Ok(ScrapeOutcome::Content(relevant))
}
