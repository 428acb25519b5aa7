// src/local.rs

//! Local filesystem operations used while mirroring.

use crate::errors::{io_error_with_path, Result};
use std::fs;
use std::path::{Component, Path};

/// True if `name` is exactly one normal path component (no separators, not `.` or `..`).
///
/// # Examples
/// ```
/// use ghdir::local::is_plain_file_name;
///
/// assert!(is_plain_file_name("utils"));
/// assert!(!is_plain_file_name(".."));
/// assert!(!is_plain_file_name("a/b"));
/// ```
pub fn is_plain_file_name(name: &str) -> bool {
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Creates `path` and any missing parents. Succeeds if it already exists.
///
/// # Examples
/// ```
/// use ghdir::local::ensure_dir;
///
/// let tmp = tempfile::tempdir().unwrap();
/// let nested = tmp.path().join("a/b/c");
/// ensure_dir(&nested).unwrap();
/// ensure_dir(&nested).unwrap();
/// assert!(nested.is_dir());
/// ```
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| io_error_with_path(e, path))
}

/// Removes whatever is at `path`: a directory recursively, otherwise the single file.
pub fn remove_existing(path: &Path) -> Result<()> {
    log::debug!("Removing existing '{}'", path.display());
    let metadata = fs::symlink_metadata(path).map_err(|e| io_error_with_path(e, path))?;
    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| io_error_with_path(e, path))
}
