//! Page loading and readiness
//!
//! Navigates the browser to the configured page, bounds every navigation
//! step with an explicit timeout, then waits for the page to go
//! network-quiet before the extractor runs. Navigation failure or
//! timeout is fatal for the run; there is no retry.

use anyhow::Result;
use chromiumoxide::browser::Browser;
use chromiumoxide::page::Page;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::FetchConfig;

/// Upper bound on the network-quiet readiness poll. Exceeding it is not
/// an error; the loader proceeds with whatever has rendered.
const READINESS_POLL_MAX_SECS: u64 = 10;

/// Helper function to wrap async page operations with explicit timeout
///
/// Prevents indefinite hangs on page operations by applying `tokio::time::timeout`.
/// Returns proper error messages distinguishing between timeout and operation failures.
async fn with_page_timeout<F, T>(operation: F, timeout_secs: u64, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "{operation_name} timeout after {timeout_secs} seconds"
        )),
    }
}

/// Open a tab, navigate to `config.page_url`, and wait until the page is
/// quiet enough to extract from.
///
/// The returned page has passed three gates: navigation and the load
/// event (each bounded by `navigation_timeout_secs`, fatal on expiry), a
/// bounded readiness poll for `document.readyState` and image decoding,
/// and the fixed `settle_delay_ms` wait for deferred client-side
/// rendering.
pub async fn load_page(browser: &Browser, config: &FetchConfig) -> Result<Page> {
    info!("Loading page: {}", config.page_url);

    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create page: {e}"))?;

    // Navigate to page
    with_page_timeout(
        async {
            page.goto(config.page_url.as_str())
                .await
                .map_err(|e| anyhow::anyhow!("{e}"))
        },
        config.navigation_timeout_secs,
        "Page navigation",
    )
    .await?;

    // Wait for page load
    with_page_timeout(
        async {
            page.wait_for_navigation()
                .await
                .map_err(|e| anyhow::anyhow!("{e}"))
        },
        config.navigation_timeout_secs,
        "Page load",
    )
    .await?;

    wait_for_network_quiet(&page, READINESS_POLL_MAX_SECS).await;

    // Let lazy-loaded images and animations settle
    debug!("Settling for {}ms", config.settle_delay_ms);
    tokio::time::sleep(Duration::from_millis(config.settle_delay_ms)).await;

    Ok(page)
}

/// Poll the page until it reports quiet readiness or `max_wait_secs`
/// elapses.
///
/// `page.wait_for_navigation()` only covers the HTTP response, not
/// JavaScript execution, CSS application, or image loading. This polls
/// `document.readyState === 'complete'` plus `document.images`
/// completeness so that image natural dimensions are populated before
/// extraction. On timeout it proceeds anyway with a warning.
async fn wait_for_network_quiet(page: &Page, max_wait_secs: u64) {
    let start = Instant::now();
    let max_wait = Duration::from_secs(max_wait_secs);
    let poll_interval = Duration::from_millis(100);

    debug!("Waiting for page readiness (max {max_wait_secs}s)");

    loop {
        if start.elapsed() >= max_wait {
            warn!("Timeout waiting for page readiness after {max_wait_secs}s, proceeding anyway");
            return;
        }

        let ready_state_script = r#"
            (function() {
                return {
                    readyState: document.readyState,
                    imagesLoaded: Array.from(document.images).every(img => img.complete),
                    bodyExists: document.body !== null
                };
            })()
        "#;

        match page.evaluate(ready_state_script).await {
            Ok(result) => {
                if let Ok(value) = result.into_value::<serde_json::Value>() {
                    let ready_state = value.get("readyState").and_then(|v| v.as_str());
                    let images_loaded = value
                        .get("imagesLoaded")
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false);
                    let body_exists = value
                        .get("bodyExists")
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false);

                    if ready_state == Some("complete") && body_exists {
                        debug!(
                            "Page ready after {:.2}s (images loaded: {})",
                            start.elapsed().as_secs_f64(),
                            images_loaded
                        );

                        // readyState can reach 'complete' while images are
                        // still decoding
                        if !images_loaded {
                            debug!("Images still loading, waiting additional 500ms");
                            tokio::time::sleep(Duration::from_millis(500)).await;
                        }

                        return;
                    }
                }
            }
            Err(e) => {
                debug!("Failed to check readyState: {e}, retrying");
            }
        }

        tokio::time::sleep(poll_interval).await;
    }
}
