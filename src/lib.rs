//! `ghdir` is a library and command-line tool for downloading a single folder
//! of a public GitHub repository, without cloning the whole repository.
//!
//! Given a link such as `https://github.com/owner/repo/tree/branch/path`, it
//! lists the folder through the GitHub contents API, recurses into every
//! subdirectory, and streams each file's raw bytes to disk, mirroring the
//! remote structure under a local folder named after the last path segment.
//!
//! The pieces are usable on their own:
//! 1.  **Parse**: [`github::parse_repo_link`] turns a link into a [`RepoLocation`].
//! 2.  **List / fetch**: [`github::GithubClient`] talks to the API.
//! 3.  **Mirror**: [`mirror::mirror_tree`] walks any [`mirror::RemoteTree`] depth-first.
//!
//! # Example: Library Usage
//!
//! ```no_run
//! use ghdir::progress::ConsoleProgress;
//! use ghdir::{run, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .repo_link("https://github.com/rust-lang/cargo/tree/master/src/doc")
//!     .destination("downloads")
//!     .build()
//!     .unwrap();
//!
//! let stdin = std::io::stdin();
//! let target = run(&config, &ConsoleProgress, &mut stdin.lock(), &mut std::io::stdout()).unwrap();
//! println!("Files saved to: {}", target.display());
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod github;
pub mod local;
pub mod mirror;
pub mod progress;
pub mod prompt;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use errors::{Error, ErrorKind, Result};
pub use github::{Entry, EntryKind, RepoLocation};

use crate::github::GithubClient;
use crate::progress::ProgressReporter;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Downloads the folder described by `config` and returns the local path it was saved to.
///
/// The destination directory is created if needed. If the target folder already
/// exists, the user is asked (question on `out`, one line read from `input`)
/// whether to overwrite it; on "yes" it is removed before the download starts.
///
/// # Errors
/// * `Error::UserAborted` if the user declines the overwrite. The existing folder is untouched.
/// * Any error from the traversal, wrapped with the remote path where it occurred.
///   The partially downloaded tree is left in place.
pub fn run(
    config: &Config,
    progress: &dyn ProgressReporter,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<PathBuf> {
    local::ensure_dir(&config.destination)?;

    let target = config.target_dir();
    if target.exists() {
        if !prompt::confirm_overwrite(&target, input, out)? {
            log::info!("Overwrite of '{}' declined", target.display());
            return Err(Error::UserAborted);
        }
        local::remove_existing(&target)?;
        writeln!(out, "Directory removed.").map_err(|e| errors::io_error_with_path(e, "<stdout>"))?;
    }

    local::ensure_dir(&target)?;

    let client = GithubClient::new(config)?;
    mirror::mirror_tree(&client, &config.location.path, &target, progress)?;

    Ok(target)
}
