// src/progress.rs

//! Defines a trait for reporting progress while a remote tree is mirrored.

/// A trait for reporting traversal progress, abstracting over where the lines go.
///
/// # Examples
///
/// ```
/// use ghdir::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// // A mock reporter that records every event.
/// struct Recorder {
///     events: Mutex<Vec<String>>,
/// }
/// impl ProgressReporter for Recorder {
///     fn directory_entered(&self, remote_path: &str) {
///         self.events.lock().unwrap().push(format!("dir {remote_path}"));
///     }
///     fn file_started(&self, name: &str) {
///         self.events.lock().unwrap().push(format!("file {name}"));
///     }
///     fn directory_empty(&self, _remote_path: &str) {}
/// }
///
/// let reporter = Recorder { events: Mutex::new(Vec::new()) };
/// reporter.file_started("a.go");
/// assert_eq!(*reporter.events.lock().unwrap(), vec!["file a.go"]);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Called when a remote subdirectory is created locally and about to be listed.
    fn directory_entered(&self, remote_path: &str);
    /// Called right before a file download begins.
    fn file_started(&self, name: &str);
    /// Called when a listing comes back empty. This is a warning, not an error.
    fn directory_empty(&self, remote_path: &str);
}

/// A `ProgressReporter` that does nothing.
///
/// Used by library callers that do not want console output.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn directory_entered(&self, _remote_path: &str) {}
    fn file_started(&self, _name: &str) {}
    fn directory_empty(&self, _remote_path: &str) {}
}

/// Prints one line per discovered entry to stdout.
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn directory_entered(&self, remote_path: &str) {
        println!("📁 {}/", remote_path);
    }

    fn file_started(&self, name: &str) {
        println!("📄 {}", name);
    }

    fn directory_empty(&self, remote_path: &str) {
        println!("Warning: Directory '{}' is empty or doesn't exist", remote_path);
    }
}
