//! Handles parsing of GitHub folder links.

use crate::errors::{Error, Result};
use crate::local::is_plain_file_name;
use once_cell::sync::Lazy;
use regex::Regex;

/// The four coordinates identifying a remote subtree to mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch, tag, or commit. Cannot contain `/`.
    pub branch: String,
    /// Path of the folder inside the repository, without a trailing slash.
    pub path: String,
}

impl RepoLocation {
    /// Name of the local folder the subtree is mirrored into: the last segment of `path`.
    ///
    /// # Examples
    /// ```
    /// use ghdir::github::parse_repo_link;
    ///
    /// let loc = parse_repo_link("https://github.com/acme/widgets/tree/main/src/utils").unwrap();
    /// assert_eq!(loc.root_folder_name(), "utils");
    /// ```
    pub fn root_folder_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Regex for GitHub folder links: `.../(tree|blob)/branch/path`
static GITHUB_FOLDER_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://github\.com/([^/]+)/([^/]+)/(?:tree|blob)/([^/]+)/(.+)$").unwrap()
});

/// Parses a GitHub folder link into a [`RepoLocation`].
///
/// The branch is always the single segment after `tree` or `blob`; branch names
/// containing `/` cannot be expressed and their remainder ends up in the path.
///
/// # Errors
/// Returns `Error::InvalidLinkFormat` if the link has the wrong scheme or host,
/// is missing any of the owner, repo, branch, or path segments, or if the owner,
/// repo, or any path segment is `.`, `..`, or empty.
///
/// # Examples
/// ```
/// use ghdir::github::{parse_repo_link, RepoLocation};
///
/// let loc = parse_repo_link("https://github.com/rust-lang/cargo/tree/master/src/cargo/").unwrap();
/// assert_eq!(loc, RepoLocation {
///     owner: "rust-lang".to_string(),
///     repo: "cargo".to_string(),
///     branch: "master".to_string(),
///     path: "src/cargo".to_string(),
/// });
///
/// assert!(parse_repo_link("https://github.com/rust-lang/cargo").is_err());
/// ```
pub fn parse_repo_link(link: &str) -> Result<RepoLocation> {
    let invalid = || Error::InvalidLinkFormat {
        link: link.to_string(),
    };
    let trimmed = link.trim().trim_end_matches('/');
    let caps = GITHUB_FOLDER_LINK_RE.captures(trimmed).ok_or_else(invalid)?;

    let location = RepoLocation {
        owner: caps[1].to_string(),
        repo: caps[2].to_string(),
        branch: caps[3].to_string(),
        path: caps[4].to_string(),
    };

    // The last path segment becomes a local folder that may be removed on overwrite.
    let segments_ok = is_plain_file_name(&location.owner)
        && is_plain_file_name(&location.repo)
        && location.path.split('/').all(is_plain_file_name);
    if !segments_ok {
        return Err(invalid());
    }
    log::debug!("Parsed repository link: {:?}", location);
    Ok(location)
}
