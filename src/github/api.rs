// src/github/api.rs
//! Lists directory contents through the GitHub contents API.

use super::url::RepoLocation;
use crate::config::Config;
use crate::constants::GITHUB_ACCEPT;
use crate::errors::{Error, Result};
use crate::local::is_plain_file_name;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Represents a file or directory item exactly as the GitHub Contents API returns it.
#[derive(Deserialize, Debug)]
struct ContentItem {
    name: String,
    path: String,
    #[serde(rename = "type")]
    item_type: String,
    download_url: Option<String>,
}

/// One item in a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name, used as the local file or folder name.
    pub name: String,
    /// Full path inside the repository.
    pub path: String,
    /// Whether this is a file (with its download locator) or a directory.
    pub kind: EntryKind,
}

/// The kind of a listing [`Entry`]. Only files carry a download locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    File { download_url: String },
    Dir,
}

impl Entry {
    /// Creates a file entry.
    pub fn file(name: &str, path: &str, download_url: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: EntryKind::File {
                download_url: download_url.to_string(),
            },
        }
    }

    /// Creates a directory entry.
    pub fn dir(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: EntryKind::Dir,
        }
    }
}

/// A blocking client for the GitHub contents API and raw file downloads.
pub struct GithubClient {
    pub(super) http: Client,
    api_base: Url,
    location: RepoLocation,
    list_timeout: Duration,
    pub(super) fetch_timeout: Duration,
}

impl GithubClient {
    /// Builds a client from the run configuration.
    ///
    /// # Errors
    /// Returns `Error::ClientBuild` if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|source| Error::ClientBuild { source })?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            location: config.location.clone(),
            list_timeout: config.list_timeout,
            fetch_timeout: config.fetch_timeout,
        })
    }

    /// Builds `<api_base>/repos/<owner>/<repo>/contents/<path>?ref=<branch>`.
    fn contents_url(&self, path: &str) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Argument(format!("invalid API base URL: {}", self.api_base)))?
            .pop_if_empty()
            .extend([
                "repos",
                self.location.owner.as_str(),
                self.location.repo.as_str(),
                "contents",
            ])
            .extend(path.split('/').filter(|s| !s.is_empty()));
        url.query_pairs_mut()
            .append_pair("ref", &self.location.branch);
        Ok(url)
    }

    /// Lists the entries of one remote directory, in the order the server returns them.
    ///
    /// Entries of a kind other than `file` or `dir` (symlinks, submodules) are skipped
    /// with a warning, as are files without a download URL.
    ///
    /// # Errors
    /// * `Error::NotFound` if the repository, branch, or path does not exist.
    /// * `Error::AccessDenied` if GitHub answers 403 or 429 (private repository or rate limit).
    /// * `Error::Http`, `Error::UnexpectedStatus`, `Error::Decode` for transport failures.
    /// * `Error::InvalidEntry` if an entry name is not a plain file name.
    pub fn list_directory(&self, path: &str) -> Result<Vec<Entry>> {
        let url = self.contents_url(path)?;
        log::debug!("Fetching directory contents from: {}", url);

        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, GITHUB_ACCEPT)
            .timeout(self.list_timeout)
            .send()
            .map_err(|source| Error::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| Error::Http {
            url: url.to_string(),
            source,
        })?;

        check_listing_status(status, url.as_str(), &body)?;
        parse_listing(url.as_str(), &body)
    }
}

/// Maps a non-OK listing status to the matching error.
fn check_listing_status(status: StatusCode, url: &str, body: &str) -> Result<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(Error::NotFound),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(Error::AccessDenied {
            status: status.as_u16(),
        }),
        other => Err(Error::UnexpectedStatus {
            url: url.to_string(),
            status: other.as_u16(),
            body: body.trim().to_string(),
        }),
    }
}

/// Decodes a contents API response body into typed entries.
fn parse_listing(url: &str, body: &str) -> Result<Vec<Entry>> {
    let json_value: Value = serde_json::from_str(body).map_err(|e| Error::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    // The API returns a single object if the path is a file, or an array for a directory.
    if !json_value.is_array() {
        return Err(Error::Decode {
            url: url.to_string(),
            reason: "expected a directory listing; the path may name a file".to_string(),
        });
    }

    let items: Vec<ContentItem> = serde_json::from_value(json_value).map_err(|e| Error::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        let kind = match (item.item_type.as_str(), item.download_url) {
            ("dir", _) => EntryKind::Dir,
            ("file", Some(download_url)) => EntryKind::File { download_url },
            ("file", None) => {
                log::warn!("Skipping file with no download_url: {}", item.path);
                continue;
            }
            (other, _) => {
                log::warn!("Skipping '{}' of unsupported type '{}'", item.path, other);
                continue;
            }
        };
        if !is_plain_file_name(&item.name) {
            return Err(Error::InvalidEntry { name: item.name });
        }
        entries.push(Entry {
            name: item.name,
            path: item.path,
            kind,
        });
    }
    Ok(entries)
}
