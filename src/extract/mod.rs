//! Extraction pipeline
//!
//! Reduces one page's raw markup to its primary textual content by trying a
//! fixed priority order of strategies, each behind a minimum-length quality
//! gate. The first strategy to clear its gate wins and later strategies are
//! not attempted. The result is always non-empty: total failure produces a
//! deterministic placeholder naming the URL instead of an empty string.
//!
//! New strategies are added by appending to the table, not by branching
//! logic.

mod strategies;
mod text;

pub use text::normalize_text;

/// One extraction strategy and its acceptance threshold
struct Strategy {
    name: &'static str,
    min_len: usize,
    run: fn(&str) -> Option<String>,
}

/// The fallback chain, in priority order
const STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "dense-text",
        min_len: 50,
        run: strategies::dense_text,
    },
    Strategy {
        name: "readability",
        min_len: 50,
        run: strategies::readability,
    },
    Strategy {
        name: "article-metadata",
        min_len: 50,
        run: strategies::article_metadata,
    },
    Strategy {
        name: "structural",
        min_len: 30,
        run: strategies::structural,
    },
    Strategy {
        name: "strip-tags",
        min_len: 20,
        run: strategies::strip_tags,
    },
];

/// Extracts clean text from a page.
///
/// HTML shorter than 100 characters (trimmed) is rejected up front with an
/// "empty or minimal content" placeholder. Otherwise the strategy chain
/// runs; the winning output is normalized before being returned. When every
/// strategy fails, the title/heading last resort runs, and failing that too
/// the "no content" placeholder names the URL.
pub fn extract(html: &str, url: &str) -> String {
    if html.trim().len() < 100 {
        tracing::warn!("HTML content from {} is too small or empty", url);
        return format!("[Empty or minimal content from {}]", url);
    }

    for strategy in STRATEGIES {
        if let Some(candidate) = (strategy.run)(html) {
            if candidate.len() > strategy.min_len {
                tracing::debug!(
                    "Extracted {} chars from {} with {} strategy",
                    candidate.len(),
                    url,
                    strategy.name
                );
                return normalize_text(&candidate);
            }
        }
    }

    if let Some(fallback) = strategies::title_and_headings(html) {
        tracing::debug!("Using title and headings as fallback for {}", url);
        return normalize_text(&fallback);
    }

    tracing::warn!("All content extraction strategies failed for {}", url);
    format!("[No content could be extracted from {}]", url)
}
