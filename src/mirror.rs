// src/mirror.rs
//! Recursively mirrors a remote directory tree onto the local filesystem.
//!
//! The traversal is depth-first and strictly sequential: one listing or download
//! is in flight at a time, entries are handled in the order the server listed
//! them, and the first failure anywhere aborts the whole run.

use crate::errors::{Error, Result};
use crate::github::{Entry, EntryKind, GithubClient};
use crate::local::ensure_dir;
use crate::progress::ProgressReporter;
use std::path::Path;

/// The remote side of a mirror: something that can list directories and fetch files.
pub trait RemoteTree {
    /// Lists the entries of the remote directory at `remote_path`.
    fn list(&self, remote_path: &str) -> Result<Vec<Entry>>;
    /// Writes the bytes behind `download_url` to `dest`.
    fn fetch(&self, download_url: &str, dest: &Path) -> Result<()>;
}

impl RemoteTree for GithubClient {
    fn list(&self, remote_path: &str) -> Result<Vec<Entry>> {
        self.list_directory(remote_path)
    }

    fn fetch(&self, download_url: &str, dest: &Path) -> Result<()> {
        self.download_file(download_url, dest)
    }
}

/// Mirrors the remote directory `remote_path` into the existing local directory `local_path`.
///
/// An empty listing is reported through `progress` and treated as success.
///
/// # Errors
/// Returns the first error encountered. Listing failures are wrapped in
/// `Error::Listing` and download failures in `Error::Download`, each naming the
/// remote path; errors from nested directories are passed up unchanged.
/// Nothing is cleaned up: a failure leaves a partially populated local tree.
pub fn mirror_tree<T: RemoteTree + ?Sized>(
    remote: &T,
    remote_path: &str,
    local_path: &Path,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    let entries = remote.list(remote_path).map_err(|e| Error::Listing {
        remote_path: remote_path.to_string(),
        source: Box::new(e),
    })?;

    if entries.is_empty() {
        log::warn!("Remote directory '{}' returned no entries", remote_path);
        progress.directory_empty(remote_path);
        return Ok(());
    }

    for entry in entries {
        let item_local_path = local_path.join(&entry.name);

        match &entry.kind {
            EntryKind::Dir => {
                ensure_dir(&item_local_path)?;
                progress.directory_entered(&entry.path);
                mirror_tree(remote, &entry.path, &item_local_path, progress)?;
            }
            EntryKind::File { download_url } => {
                progress.file_started(&entry.name);
                remote
                    .fetch(download_url, &item_local_path)
                    .map_err(|e| Error::Download {
                        remote_path: entry.path.clone(),
                        source: Box::new(e),
                    })?;
            }
        }
    }

    Ok(())
}
