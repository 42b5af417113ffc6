//! Shared configuration constants for logoscrape
//!
//! This module contains the production default values used to build
//! `FetchConfig::default()`, kept in one place to avoid magic numbers.

/// Page whose rendered DOM is scanned for logo images.
pub const DEFAULT_PAGE_URL: &str = "https://talented-hires-8x1bqp0.gamma.site/";

/// Directory that receives the downloaded logo files, relative to the
/// working directory. Created on first use.
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Company names used positionally to name retained downloads
/// (`logo-<name>.png`). When the list runs out, the retain index is used
/// instead.
pub const DEFAULT_COMPANY_NAMES: &[&str] = &[
    "palantir", "pienso", "gsr", "mersive", "spacelift", "insight", "a16z", "sequoia", "khosla",
];

/// Maximum number of files retained in the output directory.
pub const DEFAULT_MAX_LOGOS: usize = 9;

/// Files smaller than this are deleted after download; tiny responses are
/// tracking pixels or error pages, not logos.
pub const DEFAULT_MIN_FILE_BYTES: u64 = 1000;

/// Substring a candidate URL must contain (the CDN serving real page
/// assets).
pub const DEFAULT_INCLUDE_SUBSTRING: &str = "gamma.app";

/// Substring that disqualifies a candidate URL (decorative theme assets).
pub const DEFAULT_EXCLUDE_SUBSTRING: &str = "theme_images";

/// Size-marker substring that admits background images; the CDN encodes
/// requested dimensions in the URL, and only large renditions are logos.
pub const DEFAULT_SIZE_MARKER_SUBSTRING: &str = "height:400";

/// Deadline for the initial page navigation, in seconds.
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 60;

/// Fixed wait after the page reaches network-quiet readiness, giving
/// lazy-loaded images and animations time to settle.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 5000;

/// Deadline for a single download attempt, in seconds.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 60;

/// Maximum number of 301/302 hops followed before a download fails.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Chrome user agent string sent by both the browser session and the
/// download client.
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
/// Next update: 2025-04-29 (quarterly schedule)
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
