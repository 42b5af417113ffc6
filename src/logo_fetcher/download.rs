//! Single-file download with manual redirect handling
//!
//! The client never follows redirects on its own; 301/302 responses are
//! chased through the `Location` header with an explicit hop cap, and
//! the whole attempt runs under one deadline. Bodies stream to disk
//! chunk by chunk.

use futures::StreamExt;
use reqwest::{Client, StatusCode, redirect};
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

use crate::config::FetchConfig;
use crate::utils::constants::CHROME_USER_AGENT;

/// Failure of one download attempt.
///
/// Never escapes the fetch loop; every variant is recoverable-per-item.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("redirect limit of {limit} exceeded")]
    RedirectLimit { limit: usize },
    #[error("redirect response without a usable Location header")]
    MissingLocation,
    #[error("download failed with status: {0}")]
    HttpStatus(StatusCode),
    #[error("download timeout after {secs} seconds")]
    Timeout { secs: u64 },
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Build the download client.
///
/// Redirect following is disabled so the fetch path sees 301/302
/// responses itself and can enforce the hop cap.
pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().redirect(redirect::Policy::none()).build()
}

/// Download `url` to `dest`, following 301/302 redirects up to
/// `config.max_redirects` hops, bounded by
/// `config.download_timeout_secs`.
///
/// Returns the number of body bytes written. On failure a partial file
/// may remain at `dest`; removal is the caller's concern.
pub async fn download_to_file(
    client: &Client,
    url: &str,
    dest: &Path,
    config: &FetchConfig,
) -> Result<u64, DownloadError> {
    let secs = config.download_timeout_secs;
    match tokio::time::timeout(
        Duration::from_secs(secs),
        download_inner(client, url, dest, config.max_redirects),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(DownloadError::Timeout { secs }),
    }
}

async fn download_inner(
    client: &Client,
    url: &str,
    dest: &Path,
    max_redirects: usize,
) -> Result<u64, DownloadError> {
    let mut current = Url::parse(url)?;
    let mut hops = 0usize;

    loop {
        let response = client
            .get(current.clone())
            .header("User-Agent", CHROME_USER_AGENT)
            .header("Accept", "image/avif,image/webp,image/apng,image/*,*/*;q=0.8")
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::MOVED_PERMANENTLY || status == StatusCode::FOUND {
            hops += 1;
            if hops > max_redirects {
                return Err(DownloadError::RedirectLimit {
                    limit: max_redirects,
                });
            }

            let location = response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .ok_or(DownloadError::MissingLocation)?;

            // Location may be relative; resolve against the current URL
            current = current.join(location)?;
            debug!("Following redirect ({hops}) to {current}");
            continue;
        }

        if !status.is_success() {
            return Err(DownloadError::HttpStatus(status));
        }

        let mut file = File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;
        return Ok(written);
    }
}
