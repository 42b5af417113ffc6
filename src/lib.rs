pub mod browser_setup;
pub mod config;
pub mod image_extractor;
pub mod logo_fetcher;
pub mod page_loader;
pub mod utils;

pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::FetchConfig;
pub use image_extractor::{ImageKind, ImageRecord, extract_images, parse_css_url};
pub use logo_fetcher::{DownloadError, FetchSummary, LogoFilter, fetch_logos};
pub use page_loader::load_page;

use anyhow::{Context, Result};
use chromiumoxide::browser::Browser;
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Run the whole pipeline: launch a browser, load the page, extract its
/// image resources, and download the logo candidates.
///
/// The browser and its user data directory are acquired once here and
/// released once at the end, whether or not the middle stages succeed.
/// Navigation failure is fatal and propagates; per-download failures are
/// absorbed by the fetch loop.
pub async fn run(config: FetchConfig) -> Result<FetchSummary> {
    let (browser, handler_task, user_data_dir) =
        launch_browser(config.headless, config.chrome_data_dir.clone())
            .await
            .context("Failed to launch browser")?;

    let result = scrape_and_fetch(&browser, &config).await;

    // Only remove the user data dir we created ourselves
    let remove_user_data = config.chrome_data_dir.is_none();
    cleanup_browser(browser, handler_task, user_data_dir, remove_user_data).await;

    result
}

async fn scrape_and_fetch(browser: &Browser, config: &FetchConfig) -> Result<FetchSummary> {
    let page = page_loader::load_page(browser, config).await?;

    let records = extract_images(&page).await?;
    info!("Found {} total images", records.len());

    let summary = fetch_logos(records, config).await?;
    info!(
        "Downloaded {} logos ({} attempts)",
        summary.kept, summary.attempted
    );

    log_output_listing(&config.output_dir).await;

    Ok(summary)
}

/// Close the browser, stop its CDP handler, and drop the profile
/// directory. Every step is best effort; a teardown failure never masks
/// the run result.
async fn cleanup_browser(
    mut browser: Browser,
    handler_task: JoinHandle<()>,
    user_data_dir: PathBuf,
    remove_user_data: bool,
) {
    debug!("Closing browser");
    if let Err(e) = browser.close().await {
        warn!("Failed to close browser: {e}");
    }

    // Wait for the browser process to fully exit before touching its
    // user data directory
    if let Err(e) = browser.wait().await {
        warn!("Failed to wait for browser exit: {e}");
    }

    handler_task.abort();

    if remove_user_data
        && let Err(e) = std::fs::remove_dir_all(&user_data_dir)
    {
        warn!(
            "Failed to clean up Chrome data directory {}: {e}",
            user_data_dir.display()
        );
    }
}

/// Log the final contents of the output directory.
async fn log_output_listing(output_dir: &Path) {
    let mut entries = match tokio::fs::read_dir(output_dir).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                "Failed to list output directory {}: {e}",
                output_dir.display()
            );
            return;
        }
    };

    info!("Output directory {}:", output_dir.display());
    while let Ok(Some(entry)) = entries.next_entry().await {
        let size = entry.metadata().await.map(|m| m.len()).unwrap_or(0);
        info!("  {} ({size} bytes)", entry.file_name().to_string_lossy());
    }
}
