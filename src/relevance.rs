//! Relevance filtering
//!
//! Narrows extracted pages to those matching the instructions string's
//! keywords, and wraps the pipeline's result in a `ScrapeOutcome` so
//! downstream consumers can tell an empty crawl apart from a crawl whose
//! pages were all filtered away.

use serde::Serialize;

/// One page's extracted text, keyed by its URL. Pages keep the order they
/// were collected in.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExtractedPage {
    pub url: String,
    pub text: String,
}

/// The pipeline's externally visible result.
///
/// `NoPages` means the crawl itself produced nothing; `NoRelevantContent`
/// means pages were fetched but every one was filtered out. The first-page
/// fallback in `filter_pages` makes the latter unreachable through the
/// standard pipeline, but the variant stays in the API so a caller opting
/// out of the fallback has a place to land.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeOutcome {
    NoPages,
    NoRelevantContent,
    Content(Vec<ExtractedPage>),
}

impl ScrapeOutcome {
    pub fn pages(&self) -> &[ExtractedPage] {
        match self {
            ScrapeOutcome::Content(pages) => pages,
            _ => &[],
        }
    }
}

/// Filters pages by keyword relevance.
///
/// Empty instructions keep every page. Otherwise the instructions string is
/// lowercased and split on whitespace, and a page survives when any keyword
/// occurs as a substring of its lowercased text. When nothing matches but
/// the input was non-empty, exactly the first page (in input order) is
/// returned with its full text, so callers always receive at least one page
/// whenever pages were actually fetched.
pub fn filter_pages(pages: &[ExtractedPage], instructions: &str) -> Vec<ExtractedPage> {
    let keywords: Vec<String> = instructions
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect();

    if keywords.is_empty() {
        return pages.to_vec();
    }
    tracing::debug!("Using keywords for filtering: {:?}", keywords);

    let mut kept: Vec<ExtractedPage> = pages
        .iter()
        .filter(|page| {
            let lowered = page.text.to_lowercase();
            keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
        })
        .cloned()
        .collect();

    tracing::info!(
        "Filtered content from {} pages down to {} pages",
        pages.len(),
        kept.len()
    );

    if kept.is_empty() {
        if let Some(first) = pages.first() {
            tracing::info!("No content matched filters. Returning the first page by default.");
            kept.push(first.clone());
        }
    }

    kept
}
