//! Petrel main entry point
//!
//! Command-line interface for the Petrel web content harvester.

use anyhow::Context;
use clap::Parser;
use petrel::config::load_config;
use petrel::crawler::DisabledRenderer;
use petrel::output::write_content_artifact;
use petrel::scrape::scrape;
use petrel::ScrapeOutcome;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Petrel: a polite web content harvester
///
/// Petrel crawls a website breadth-first from a seed URL while respecting
/// robots.txt and per-domain rate limits, extracts the readable text from
/// every page, filters it against the run's instructions, and writes the
/// result as a timestamped JSON artifact.
#[derive(Parser, Debug)]
#[command(name = "petrel")]
#[command(version = "1.0.0")]
#[command(about = "A polite web content harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Override the seed URL from the config file
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Override the relevance instructions from the config file
    #[arg(long, value_name = "TEXT")]
    instructions: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let mut config = load_config(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    if let Some(url) = cli.url {
        config.seed.url = url;
    }
    if let Some(instructions) = cli.instructions {
        config.seed.instructions = instructions;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let outcome = scrape(&config, DisabledRenderer).await?;
    match &outcome {
        ScrapeOutcome::NoPages => {
            println!("No pages could be fetched from {}", config.seed.url);
        }
        ScrapeOutcome::NoRelevantContent => {
            println!("Pages were fetched but none matched the instructions");
        }
        ScrapeOutcome::Content(pages) => {
            println!("Scraped {} relevant page(s)", pages.len());
        }
    }

    let path = write_content_artifact(Path::new(&config.output.directory), &outcome, &config.seed.instructions)?;
    println!("Wrote {}", path.display());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("petrel=info,warn"),
            1 => EnvFilter::new("petrel=debug,info"),
            2 => EnvFilter::new("petrel=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &petrel::Config) {
    println!("=== Petrel Dry Run ===\n");

    println!("Seed:");
    println!("  URL: {}", config.seed.url);
    println!("  Instructions: {:?}", config.seed.instructions);

    println!("\nCrawler Configuration:");
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Max pages: {}", config.crawler.max_pages);
    println!("  Requests per minute: {}", config.crawler.requests_per_minute);
    println!("  Respect robots.txt: {}", config.crawler.respect_robots);
    println!("  Same domain only: {}", config.crawler.same_domain_only);
    println!("  Use rendering: {}", config.crawler.use_rendering);
    println!("  User agent: {}", config.crawler.user_agent);
    println!("  Frontier ordering: {:?}", config.crawler.frontier_ordering);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);

    println!("\nConfiguration is valid.");
}
