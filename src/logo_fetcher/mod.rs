//! Logo candidate selection and sequential download
//!
//! Filters extracted image records down to logo candidates, then
//! downloads them one at a time, naming retained files positionally from
//! the company list. Per-item failures never abort the run: the file (if
//! any) is removed, the naming position is reused, and the loop moves to
//! the next candidate. There is no retry, no backoff, and no
//! parallelism.

pub mod download;
pub mod filter;

pub use download::{DownloadError, download_to_file, http_client};
pub use filter::LogoFilter;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::FetchConfig;
use crate::image_extractor::ImageRecord;

/// Outcome of one download attempt. The loop continues after every
/// variant; only `Kept` advances the naming index.
#[derive(Debug)]
pub enum DownloadOutcome {
    Kept { path: PathBuf, bytes: u64 },
    DiscardedSmall { bytes: u64 },
    DiscardedError { error: DownloadError },
}

/// What a fetch run did, for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSummary {
    /// Candidates for which a download was attempted.
    pub attempted: usize,
    /// Files retained in the output directory.
    pub kept: usize,
}

/// Destination filename for the retain position `index`.
///
/// Positional lookup into the company list, with the numeric index as
/// the fallback once the list is exhausted.
#[must_use]
pub fn logo_filename(company_names: &[String], index: usize) -> String {
    match company_names.get(index) {
        Some(name) => format!("logo-{name}.png"),
        None => format!("logo-{index}.png"),
    }
}

/// Filter `records` and download the candidates sequentially until
/// `config.max_logos` files are retained or the list runs out.
pub async fn fetch_logos(records: Vec<ImageRecord>, config: &FetchConfig) -> Result<FetchSummary> {
    let candidates = LogoFilter::from_config(config).apply(records);
    info!("Filtered to {} potential logo images", candidates.len());

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create output directory {}",
                config.output_dir.display()
            )
        })?;

    let client = http_client().context("Failed to build HTTP client")?;

    let mut kept = 0usize;
    let mut attempted = 0usize;

    for record in &candidates {
        if kept >= config.max_logos {
            break;
        }
        attempted += 1;

        let filename = logo_filename(&config.company_names, kept);
        let dest = config.output_dir.join(&filename);

        info!("Downloading: {}", record.source_url);
        match attempt_download(&client, record, &dest, config).await {
            DownloadOutcome::Kept { path, bytes } => {
                info!("Saved as {} ({bytes} bytes)", path.display());
                kept += 1;
            }
            DownloadOutcome::DiscardedSmall { bytes } => {
                info!("Discarded {filename}: {bytes} bytes is too small");
            }
            DownloadOutcome::DiscardedError { error } => {
                warn!("Failed to download {}: {error}", record.source_url);
            }
        }
    }

    Ok(FetchSummary { attempted, kept })
}

/// Run one attempt and classify the result.
///
/// Undersized and failed attempts leave no file behind; removal of a
/// partial file is best effort and its own errors are ignored.
async fn attempt_download(
    client: &reqwest::Client,
    record: &ImageRecord,
    dest: &std::path::Path,
    config: &FetchConfig,
) -> DownloadOutcome {
    match download_to_file(client, &record.source_url, dest, config).await {
        Ok(bytes) if bytes < config.min_file_bytes => {
            let _ = tokio::fs::remove_file(dest).await;
            DownloadOutcome::DiscardedSmall { bytes }
        }
        Ok(bytes) => DownloadOutcome::Kept {
            path: dest.to_path_buf(),
            bytes,
        },
        Err(error) => {
            let _ = tokio::fs::remove_file(dest).await;
            DownloadOutcome::DiscardedError { error }
        }
    }
}
