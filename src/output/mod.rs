//! Output artifacts
//!
//! Serializes a finished scrape into a timestamped JSON file so repeated
//! runs against the same site never clobber each other.

use crate::analyze::{self, extract_contact_info, extract_faq, AnalysisReport, ContactInfo, FaqPair};
use crate::relevance::ScrapeOutcome;
use crate::Result;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// One page as it appears in the artifact
#[derive(Debug, Serialize)]
struct PageRecord {
    url: String,
    text: String,
    analysis: AnalysisReport,
    faq: Vec<FaqPair>,
    contact_info: ContactInfo,
}

/// Top-level artifact layout
#[derive(Debug, Serialize)]
struct ContentArtifact {
    scraped_at: DateTime<Utc>,
    instructions: String,
    page_count: usize,
    pages: Vec<PageRecord>,
}

/// Writes the scrape result to `<dir>/web_content_<timestamp>.json`.
///
/// The directory is created if missing. Each page is analyzed on the way
/// out; `NoPages` and `NoRelevantContent` outcomes still produce an
/// artifact, with an empty page list.
///
/// # Arguments
///
/// * `dir` - Output directory
/// * `outcome` - Result of a completed scrape
/// * `instructions` - The relevance instructions the run was filtered with
///
/// # Returns
///
/// The path of the written file.
pub fn write_content_artifact(
    dir: &Path,
    outcome: &ScrapeOutcome,
    instructions: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let pages: Vec<PageRecord> = outcome
        .pages()
        .iter()
        .map(|page| PageRecord {
            url: page.url.clone(),
            text: page.text.clone(),
            analysis: analyze::analyze(&page.text),
            faq: extract_faq(&page.text),
            contact_info: extract_contact_info(&page.text),
        })
        .collect();

    let artifact = ContentArtifact {
        scraped_at: Utc::now(),
        instructions: instructions.to_string(),
        page_count: pages.len(),
        pages,
    };

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("web_content_{stamp}.json"));
    fs::write(&path, serde_json::to_string_pretty(&artifact)?)?;
    info!(path = %path.display(), pages = artifact.page_count, "wrote content artifact");

    Ok(path)
}
