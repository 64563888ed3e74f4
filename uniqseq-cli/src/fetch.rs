//! Word list download.
//!
//! Fetching is kept out of the core so the extractor never touches the
//! network. There are no retries: any failure aborts the run.

use std::fs;
use std::path::Path;

use uniqseq_core::{Error, Result};

/// Downloads `url` and returns the response body.
///
/// # Errors
///
/// Returns [`Error::InputAcquisition`] on connection failures, non-success
/// HTTP statuses and body read errors.
#[cfg(feature = "fetch")]
pub fn fetch_word_list(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("uniqseq/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::input(url, e))?;

    let response = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|e| Error::input(url, e))?;

    let body = response.bytes().map_err(|e| Error::input(url, e))?;
    tracing::debug!(url, bytes = body.len(), "downloaded word list");
    Ok(body.to_vec())
}

#[cfg(not(feature = "fetch"))]
pub fn fetch_word_list(url: &str) -> Result<Vec<u8>> {
    Err(Error::input(
        url,
        "downloading requires the `fetch` feature; pass --input instead",
    ))
}

/// Writes a copy of the downloaded word list to `path`.
pub fn save_download(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| Error::output(path, e))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved downloaded word list");
    Ok(())
}
