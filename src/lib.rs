//! Petrel: a polite web content harvester
//!
//! This crate crawls a website from a seed URL under politeness constraints
//! (robots.txt, per-domain rate limiting, retry with backoff), reduces each
//! fetched page to clean natural-language text through an ordered chain of
//! extraction strategies, and hands the resulting url -> text mapping to a
//! downstream synthesis stage, optionally narrowed by keyword relevance.

pub mod analyze;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod relevance;
pub mod robots;
pub mod scrape;
pub mod url;

use thiserror::Error;

/// Main error type for petrel operations
#[derive(Debug, Error)]
pub enum PetrelError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Artifact serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for petrel operations
pub type Result<T> = std::result::Result<T, PetrelError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analyze::{analyze, AnalysisReport, Quality};
pub use config::Config;
pub use relevance::{ExtractedPage, ScrapeOutcome};
pub use scrape::scrape;
pub use url::{extract_domain, is_same_domain, normalize_link};
