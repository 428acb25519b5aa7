// src/github/download.rs
//! Streams raw file contents to disk.

use super::api::GithubClient;
use crate::constants::DOWNLOAD_CHUNK_SIZE;
use crate::errors::{io_error_with_path, Error, Result};
use reqwest::StatusCode;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

impl GithubClient {
    /// Downloads the file at `download_url` into `dest`, creating or truncating it.
    ///
    /// The body is streamed in chunks rather than buffered whole, so large files
    /// never sit fully in memory.
    ///
    /// # Errors
    /// * `Error::Http` if the request fails.
    /// * `Error::Decode` if the connection drops while reading the body.
    /// * `Error::UnexpectedStatus` if the server does not answer 200 OK.
    /// * `Error::LocalIo` if `dest` cannot be created or written.
    pub fn download_file(&self, download_url: &str, dest: &Path) -> Result<()> {
        log::debug!("Downloading file from: {}", download_url);

        let mut response = self
            .http
            .get(download_url)
            .timeout(self.fetch_timeout)
            .send()
            .map_err(|source| Error::Http {
                url: download_url.to_string(),
                source,
            })?;

        if response.status() != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                url: download_url.to_string(),
                status: response.status().as_u16(),
                body: String::new(),
            });
        }

        let file = File::create(dest).map_err(|e| io_error_with_path(e, dest))?;
        let mut writer = BufWriter::new(file);
        let written = copy_body(&mut response, &mut writer, download_url, dest)?;
        writer.flush().map_err(|e| io_error_with_path(e, dest))?;

        log::debug!("Wrote {} bytes to '{}'", written, dest.display());
        Ok(())
    }
}

/// Copies `body` into `out`, keeping read failures (transport) apart from write failures (local).
fn copy_body<R: Read, W: Write>(body: &mut R, out: &mut W, url: &str, dest: &Path) -> Result<u64> {
    let mut buf = vec![0u8; DOWNLOAD_CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = match body.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(Error::Decode {
                    url: url.to_string(),
                    reason: format!("failed to read response body: {}", e),
                })
            }
        };
        out.write_all(&buf[..n])
            .map_err(|e| io_error_with_path(e, dest))?;
        total += n as u64;
    }
}
