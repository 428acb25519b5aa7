// src/config/builder.rs

use super::Config;
use crate::cli::Cli;
use crate::constants::{
    API_BASE_ENV, DEFAULT_API_BASE, FETCH_TIMEOUT, LIST_TIMEOUT, USER_AGENT,
};
use crate::errors::{Error, Result};
use crate::github::parse_repo_link;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// A builder for creating a [`Config`] programmatically.
///
/// # Examples
/// ```
/// use ghdir::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .repo_link("https://github.com/acme/widgets/tree/main/src/utils")
///     .destination("downloads")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.location.repo, "widgets");
/// assert_eq!(config.target_dir(), std::path::Path::new("downloads/utils"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    repo_link: Option<String>,
    destination: Option<PathBuf>,
    api_base: Option<String>,
    user_agent: Option<String>,
    list_timeout: Option<Duration>,
    fetch_timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Creates a new, empty `ConfigBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `ConfigBuilder` from parsed command-line arguments.
    ///
    /// The API base URL is taken from the `GHDIR_API_URL` environment variable when set.
    pub fn from_cli(cli: Cli) -> Self {
        let mut builder = Self::new().repo_link(cli.repo_link);
        if let Some(dir) = cli.dir {
            builder = builder.destination(dir);
        }
        if let Ok(api_base) = std::env::var(API_BASE_ENV) {
            log::debug!("Using API base from {}: {}", API_BASE_ENV, api_base);
            builder = builder.api_base(api_base);
        }
        builder
    }

    /// Sets the GitHub folder link to download. Required.
    pub fn repo_link(mut self, link: impl Into<String>) -> Self {
        self.repo_link = Some(link.into());
        self
    }

    /// Sets the local directory to download into. Defaults to `.`.
    pub fn destination(mut self, dir: impl Into<PathBuf>) -> Self {
        self.destination = Some(dir.into());
        self
    }

    /// Overrides the GitHub API base URL.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Overrides the per-call listing timeout.
    pub fn list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = Some(timeout);
        self
    }

    /// Overrides the per-file download timeout.
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Validates the settings and builds the final `Config`.
    ///
    /// # Errors
    /// * `Error::Argument` if the link is missing, the destination is empty, or the
    ///   API base is not a usable http(s) URL.
    /// * `Error::InvalidLinkFormat` if the link does not name a GitHub folder.
    pub fn build(self) -> Result<Config> {
        let link = self
            .repo_link
            .ok_or_else(|| Error::Argument("GitHub repository link is required".to_string()))?;
        let location = parse_repo_link(&link)?;

        let destination = self.destination.unwrap_or_else(|| PathBuf::from("."));
        if destination.as_os_str().is_empty() {
            return Err(Error::Argument(
                "--dir flag requires a directory path".to_string(),
            ));
        }

        let api_base = parse_api_base(self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE))?;

        Ok(Config {
            location,
            destination,
            api_base,
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
            list_timeout: self.list_timeout.unwrap_or(LIST_TIMEOUT),
            fetch_timeout: self.fetch_timeout.unwrap_or(FETCH_TIMEOUT),
        })
    }
}

/// Parses and checks the API base URL.
fn parse_api_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| Error::Argument(format!("invalid API base URL '{}': {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(Error::Argument(format!(
            "invalid API base URL '{}': must be an http(s) URL",
            raw
        )));
    }
    Ok(url)
}
