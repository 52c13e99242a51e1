use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration.
///
/// Checks constraints TOML deserialization cannot express: budget minimums,
/// a non-empty user agent, and a seed URL that parses as http or https.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.crawler.max_pages < 1 {
        return Err(ConfigError::Validation(
            "crawler.max-pages must be at least 1".to_string(),
        ));
    }

    if config.crawler.requests_per_minute < 1 {
        return Err(ConfigError::Validation(
            "crawler.requests-per-minute must be at least 1".to_string(),
        ));
    }

    if config.crawler.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler.user-agent must not be empty".to_string(),
        ));
    }

    let seed = Url::parse(&config.seed.url).map_err(|e| {
        ConfigError::Validation(format!("seed.url is not a valid URL: {}", e))
    })?;

    if seed.scheme() != "http" && seed.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "seed.url must use http or https, got: {}",
            seed.scheme()
        )));
    }

    Ok(())
}
