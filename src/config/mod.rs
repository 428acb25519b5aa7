//! Defines the core `Config` struct for a download run.
//!
//! This module consolidates the settings parsed and validated from the CLI (or
//! set programmatically through [`ConfigBuilder`]), making them available to the
//! rest of the application in a structured and type-safe manner.

use crate::github::RepoLocation;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub use builder::ConfigBuilder;
mod builder;

/// Holds everything a single download run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// The remote subtree to mirror.
    pub location: RepoLocation,
    /// The local directory the root folder is created in.
    pub destination: PathBuf,
    /// Base URL of the GitHub API (`https://api.github.com` unless overridden).
    pub api_base: Url,
    /// `User-Agent` header value for every request.
    pub user_agent: String,
    /// Timeout for each directory listing call.
    pub list_timeout: Duration,
    /// Timeout for each file download.
    pub fetch_timeout: Duration,
}

impl Config {
    /// The local folder the remote subtree is mirrored into:
    /// `destination` joined with the last segment of the remote path.
    pub fn target_dir(&self) -> PathBuf {
        self.destination.join(self.location.root_folder_name())
    }
}
