// src/github/mod.rs
//! Talks to GitHub: parses folder links, lists directories through the
//! contents API, and downloads raw files.

// Declare the sub-modules.
mod api;
mod download;
mod url;

// Re-export the public-facing API.
pub use api::{Entry, EntryKind, GithubClient};
pub use url::{parse_repo_link, RepoLocation};
