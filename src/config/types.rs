use serde::Deserialize;

/// Main configuration structure for petrel
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub seed: SeedConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum depth to crawl from the seed URL
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Maximum number of pages to collect
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,

    /// Maximum requests per minute to a single domain
    #[serde(rename = "requests-per-minute", default = "default_requests_per_minute")]
    pub requests_per_minute: u32,

    /// Whether to honor robots.txt disallow rules
    #[serde(rename = "respect-robots", default = "default_true")]
    pub respect_robots: bool,

    /// Whether to only crawl pages on the seed URL's domain
    #[serde(rename = "same-domain-only", default = "default_true")]
    pub same_domain_only: bool,

    /// Whether to attempt a rendering-capable fetch before plain HTTP
    #[serde(rename = "use-rendering", default)]
    pub use_rendering: bool,

    /// User agent string sent with every request and matched against
    /// robots.txt user-agent blocks
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Frontier ordering policy
    #[serde(rename = "frontier-ordering", default)]
    pub frontier_ordering: FrontierOrdering,
}

/// Ordering policy for the crawl frontier.
///
/// `Shuffled` randomizes the pending queue after every expansion so the
/// request pattern is harder to fingerprint; it trades strict breadth-first
/// order for unpredictability and is the default on purpose. `StrictBfs`
/// keeps plain FIFO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierOrdering {
    #[default]
    Shuffled,
    StrictBfs,
}

/// Seed URL and filtering instructions
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// The URL the crawl starts from
    pub url: String,

    /// Free-text instructions; their words become relevance keywords.
    /// Empty means no filtering.
    #[serde(default)]
    pub instructions: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory where content artifacts are written
    #[serde(default = "default_output_dir")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
        }
    }
}

fn default_max_depth() -> u32 {
    2
}

fn default_max_pages() -> usize {
    50
}

fn default_requests_per_minute() -> u32 {
    20
}

fn default_true() -> bool {
    true
}

fn default_user_agent() -> String {
    "Petrel Web Crawler/1.0".to_string()
}

fn default_output_dir() -> String {
    "outputs".to_string()
}
