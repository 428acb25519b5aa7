// src/constants.rs

use std::time::Duration;

/// Base URL of the GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Environment variable that overrides [`DEFAULT_API_BASE`].
pub const API_BASE_ENV: &str = "GHDIR_API_URL";

/// `User-Agent` sent with every request. GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("ghdir/", env!("CARGO_PKG_VERSION"));

/// `Accept` header for the contents API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Timeout for a single directory listing call.
pub const LIST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for a single file download. Longer than listing since payloads are larger.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Buffer size for streaming file bodies to disk.
pub const DOWNLOAD_CHUNK_SIZE: usize = 64 * 1024;
