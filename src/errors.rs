//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes every failure the
//! downloader can hit, and `ErrorKind`, a flat classification that stays the
//! same no matter how deep in the remote tree the failure happened.

use thiserror::Error;

/// A specialized `Result` type for `ghdir` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `ghdir`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Input Errors ---
    /// The repository link did not match the supported GitHub folder URL shape.
    #[error("invalid GitHub repository link '{link}'. Expected format: https://github.com/owner/repo/tree/branch/path")]
    InvalidLinkFormat {
        /// The link as given by the user.
        link: String,
    },

    /// A bad or missing command-line argument or configuration value.
    #[error("{0}")]
    Argument(String),

    // --- Remote Errors ---
    /// The repository, branch, or path does not exist.
    #[error("repository, branch, or path not found")]
    NotFound,

    /// GitHub refused the request: a private repository or rate limiting.
    #[error("rate limit exceeded or repository is private (HTTP {status})")]
    AccessDenied {
        /// The HTTP status returned by the server.
        status: u16,
    },

    /// The HTTP request itself failed (connection, timeout, body read).
    #[error("request to '{url}' failed: {source}")]
    Http {
        /// The URL that was requested.
        url: String,
        /// The underlying `reqwest::Error`.
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed (TLS or backend initialization).
    #[error("failed to build HTTP client: {source}")]
    ClientBuild {
        /// The underlying `reqwest::Error`.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status other than 200 OK.
    #[error("server returned status {status} for '{url}': {body}")]
    UnexpectedStatus {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The (possibly empty) response body.
        body: String,
    },

    /// The listing response could not be understood.
    #[error("failed to parse response from '{url}': {reason}")]
    Decode {
        /// The URL that was requested.
        url: String,
        /// What went wrong while decoding.
        reason: String,
    },

    /// A listing entry carried a name that cannot be used as a local file name.
    #[error("listing contains an entry with an unusable name: '{name}'")]
    InvalidEntry {
        /// The offending entry name.
        name: String,
    },

    // --- Local Errors ---
    /// Error occurring during file or directory access (create, write, remove).
    #[error("I/O error accessing path '{path}': {source}")]
    LocalIo {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The user declined to overwrite an existing target directory.
    #[error("download aborted by user")]
    UserAborted,

    // --- Traversal Context ---
    /// A directory listing failed while mirroring `remote_path`.
    #[error("failed to get directory contents for {remote_path}: {source}")]
    Listing {
        /// The remote path being listed.
        remote_path: String,
        /// The error that caused the failure.
        #[source]
        source: Box<Error>,
    },

    /// A file download failed while mirroring `remote_path`.
    #[error("failed to download file {remote_path}: {source}")]
    Download {
        /// The remote path of the file.
        remote_path: String,
        /// The error that caused the failure.
        #[source]
        source: Box<Error>,
    },
}

/// The category of an [`Error`], independent of traversal context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The repository link could not be parsed.
    InvalidLinkFormat,
    /// A bad or missing argument or configuration value.
    ArgumentError,
    /// The repository, branch, or path does not exist.
    NotFound,
    /// A private repository or rate limiting.
    AccessDenied,
    /// Network, timeout, status, or response decoding failure.
    TransportError,
    /// A local file or directory could not be created, written, or removed.
    LocalIoError,
    /// The user declined to overwrite an existing directory.
    UserAborted,
}

impl Error {
    /// Returns the kind of this error, looking through `Listing`/`Download` wrappers.
    ///
    /// # Examples
    /// ```
    /// use ghdir::errors::{Error, ErrorKind};
    ///
    /// let err = Error::Listing {
    ///     remote_path: "src/utils".to_string(),
    ///     source: Box::new(Error::NotFound),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidLinkFormat { .. } => ErrorKind::InvalidLinkFormat,
            Error::Argument(_) => ErrorKind::ArgumentError,
            Error::NotFound => ErrorKind::NotFound,
            Error::AccessDenied { .. } => ErrorKind::AccessDenied,
            Error::Http { .. }
            | Error::ClientBuild { .. }
            | Error::UnexpectedStatus { .. }
            | Error::Decode { .. }
            | Error::InvalidEntry { .. } => ErrorKind::TransportError,
            Error::LocalIo { .. } => ErrorKind::LocalIoError,
            Error::UserAborted => ErrorKind::UserAborted,
            Error::Listing { source, .. } | Error::Download { source, .. } => source.kind(),
        }
    }
}

/// Helper function to create an `Error::LocalIo` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::LocalIo {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let error = io_error_with_path(source_error, &path);

        match &error {
            Error::LocalIo {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected Error::LocalIo"),
        }
        assert_eq!(error.kind(), ErrorKind::LocalIoError);
    }

    #[test]
    fn test_kind_sees_through_nested_wrappers() {
        let err = Error::Listing {
            remote_path: "a".to_string(),
            source: Box::new(Error::Download {
                remote_path: "a/b.txt".to_string(),
                source: Box::new(Error::AccessDenied { status: 403 }),
            }),
        };
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
    }

    #[test]
    fn test_wrapped_message_names_remote_path() {
        let err = Error::Download {
            remote_path: "src/utils/a.go".to_string(),
            source: Box::new(Error::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.contains("src/utils/a.go"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_client_build_failure_is_transport() {
        // Any reqwest::Error will do; a request to an unparsable URL yields a builder error.
        let source = reqwest::blocking::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let err = Error::ClientBuild { source };
        assert_eq!(err.kind(), ErrorKind::TransportError);
        assert!(err.to_string().starts_with("failed to build HTTP client"));
    }

    #[test]
    fn test_transport_kinds() {
        let decode = Error::Decode {
            url: "u".to_string(),
            reason: "bad json".to_string(),
        };
        let status = Error::UnexpectedStatus {
            url: "u".to_string(),
            status: 500,
            body: String::new(),
        };
        let entry = Error::InvalidEntry {
            name: "..".to_string(),
        };
        assert_eq!(decode.kind(), ErrorKind::TransportError);
        assert_eq!(status.kind(), ErrorKind::TransportError);
        assert_eq!(entry.kind(), ErrorKind::TransportError);
    }
}
