//! Pipeline configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command
//! runs. A `.env` file in the working directory is honoured.
//!
//! ## Variables
//!
//! - `DATA_DIR` - Root of all persisted files (default: `data`)
//! - `REGISTRY_URL` - Draft-history endpoint (default: league stats service)
//! - `PLACEMENT_SOURCE_DIR` - Directory of profile exports
//!   (default: `<DATA_DIR>/player_profiles`)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout for outbound fetches (default: 10)
//! - `FETCH_RETRIES` - Retry attempts for the registry fetch (default: 3)
//! - `FIRST_DRAFT_YEAR` - First draft year of the default update range (default: 2003)
//! - `NOVELTY_RULE` - `year-and-pick` or `per-year-key` (default: `year-and-pick`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::reconciler::NoveltyRule;
use crate::utils::timeline::current_year;

/// Default draft-history endpoint.
pub const DEFAULT_REGISTRY_URL: &str = "https://stats.nba.com/stats/drafthistory?LeagueID=00";

/// Pipeline configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub registry_url: String,
    pub placement_source_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub fetch_retries: usize,
    pub first_draft_year: i32,
    pub novelty_rule: NoveltyRule,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        let registry_url =
            env::var("REGISTRY_URL").unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string());

        let placement_source_dir = env::var("PLACEMENT_SOURCE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("player_profiles"));

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 10)?;
        let fetch_retries = parse_var("FETCH_RETRIES", 3)?;
        let first_draft_year = parse_var("FIRST_DRAFT_YEAR", 2003)?;

        let novelty_rule = match env::var("NOVELTY_RULE") {
            Ok(v) => v
                .parse::<NoveltyRule>()
                .map_err(anyhow::Error::msg)
                .context("Invalid NOVELTY_RULE")?,
            Err(_) => NoveltyRule::default(),
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            data_dir,
            registry_url,
            placement_source_dir,
            request_timeout_secs,
            fetch_retries,
            first_draft_year,
            novelty_rule,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `request_timeout_secs` is 0
    /// - `fetch_retries` is greater than 10
    /// - `log_format` is not `text` or `json`
    /// - `registry_url` is not an absolute http(s) URL
    /// - `first_draft_year` lies in the future
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        if self.fetch_retries > 10 {
            anyhow::bail!(
                "FETCH_RETRIES is too large (max: 10), got {}",
                self.fetch_retries
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let url = url::Url::parse(&self.registry_url)
            .with_context(|| format!("REGISTRY_URL is not a valid URL: '{}'", self.registry_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "REGISTRY_URL must use http or https, got '{}'",
                self.registry_url
            );
        }

        if self.first_draft_year > current_year() {
            anyhow::bail!(
                "FIRST_DRAFT_YEAR must not be in the future, got {}",
                self.first_draft_year
            );
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Default draft years for a placement update.
    pub fn default_update_years(&self) -> Vec<i32> {
        (self.first_draft_year..=current_year()).collect()
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data directory: {}", self.data_dir.display());
        tracing::info!("  Registry URL: {}", self.registry_url);
        tracing::info!(
            "  Placement source: {}",
            self.placement_source_dir.display()
        );
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Novelty rule: {}", self.novelty_rule);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{v}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
