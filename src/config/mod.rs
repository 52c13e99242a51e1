//! Configuration module for petrel
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files describing one crawl run: politeness budgets, the seed URL with its
//! filtering instructions, and the artifact output directory.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, FrontierOrdering, OutputConfig, SeedConfig};

// Re-export parser functions
pub use parser::load_config;
