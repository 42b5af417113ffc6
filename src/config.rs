//! Run configuration for a logo fetch
//!
//! All knobs the pipeline consumes live here and are passed explicitly
//! into [`crate::run`]; nothing reads process-wide state. `Default`
//! holds the production values from [`crate::utils::constants`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::constants::{
    DEFAULT_COMPANY_NAMES, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_EXCLUDE_SUBSTRING,
    DEFAULT_INCLUDE_SUBSTRING, DEFAULT_MAX_LOGOS, DEFAULT_MAX_REDIRECTS, DEFAULT_MIN_FILE_BYTES,
    DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_URL,
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_SIZE_MARKER_SUBSTRING,
};

/// Configuration for a single logo-fetch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Page whose rendered DOM is scanned for images.
    pub page_url: String,

    /// Directory receiving the downloaded files. Created if absent.
    pub output_dir: PathBuf,

    /// Names used positionally for retained downloads
    /// (`logo-<name>.png`); the retain index is the fallback once the
    /// list is exhausted.
    pub company_names: Vec<String>,

    /// Stop downloading once this many files are retained.
    pub max_logos: usize,

    /// Downloads smaller than this many bytes are discarded and the
    /// naming position is reused.
    pub min_file_bytes: u64,

    /// A candidate URL must contain this substring.
    pub include_substring: String,

    /// A candidate URL must not contain this substring.
    pub exclude_substring: String,

    /// Background-image candidates additionally require this substring;
    /// `<img>` candidates do not.
    pub size_marker_substring: String,

    /// Deadline for `page.goto()` and the subsequent load wait.
    ///
    /// Navigation past this deadline is fatal for the run.
    pub navigation_timeout_secs: u64,

    /// Fixed wait after network-quiet readiness, for lazy-loaded
    /// content.
    pub settle_delay_ms: u64,

    /// Deadline for one download attempt, redirects included.
    pub download_timeout_secs: u64,

    /// Maximum 301/302 hops per download before failing with
    /// [`crate::logo_fetcher::DownloadError::RedirectLimit`].
    pub max_redirects: usize,

    /// Run the browser headless. Disable for local debugging.
    pub headless: bool,

    /// Chrome user data directory override. When `None`, a per-process
    /// temp directory is used and removed at the end of the run.
    #[serde(skip)]
    pub chrome_data_dir: Option<PathBuf>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            company_names: DEFAULT_COMPANY_NAMES
                .iter()
                .map(ToString::to_string)
                .collect(),
            max_logos: DEFAULT_MAX_LOGOS,
            min_file_bytes: DEFAULT_MIN_FILE_BYTES,
            include_substring: DEFAULT_INCLUDE_SUBSTRING.to_string(),
            exclude_substring: DEFAULT_EXCLUDE_SUBSTRING.to_string(),
            size_marker_substring: DEFAULT_SIZE_MARKER_SUBSTRING.to_string(),
            navigation_timeout_secs: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            headless: true,
            chrome_data_dir: None,
        }
    }
}

impl FetchConfig {
    /// Set the page to scan.
    #[must_use]
    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = url.into();
        self
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replace the positional naming list.
    #[must_use]
    pub fn with_company_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.company_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the retain cap.
    #[must_use]
    pub fn with_max_logos(mut self, max: usize) -> Self {
        self.max_logos = max;
        self
    }

    /// Set the minimum byte size for a retained file.
    #[must_use]
    pub fn with_min_file_bytes(mut self, bytes: u64) -> Self {
        self.min_file_bytes = bytes;
        self
    }

    /// Set the three filter substrings in one call.
    #[must_use]
    pub fn with_filter_substrings(
        mut self,
        include: impl Into<String>,
        exclude: impl Into<String>,
        size_marker: impl Into<String>,
    ) -> Self {
        self.include_substring = include.into();
        self.exclude_substring = exclude.into();
        self.size_marker_substring = size_marker.into();
        self
    }

    /// Set the navigation deadline.
    #[must_use]
    pub fn with_navigation_timeout_secs(mut self, secs: u64) -> Self {
        self.navigation_timeout_secs = secs;
        self
    }

    /// Set the post-idle settle delay.
    #[must_use]
    pub fn with_settle_delay_ms(mut self, ms: u64) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// Set the per-download deadline.
    #[must_use]
    pub fn with_download_timeout_secs(mut self, secs: u64) -> Self {
        self.download_timeout_secs = secs;
        self
    }

    /// Set the redirect hop cap.
    #[must_use]
    pub fn with_max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Toggle headless mode.
    #[must_use]
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set a Chrome user data directory for profile isolation.
    #[must_use]
    pub fn with_chrome_data_dir(mut self, dir: PathBuf) -> Self {
        self.chrome_data_dir = Some(dir);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_production_values() {
        let config = FetchConfig::default();
        assert_eq!(config.company_names.len(), 9);
        assert_eq!(config.max_logos, 9);
        assert_eq!(config.min_file_bytes, 1000);
        assert_eq!(config.company_names[0], "palantir");
        assert!(config.headless);
    }

    #[test]
    fn builders_override_defaults() {
        let config = FetchConfig::default()
            .with_page_url("https://example.com/")
            .with_max_logos(3)
            .with_filter_substrings("cdn.example", "sprites", "w=800");
        assert_eq!(config.page_url, "https://example.com/");
        assert_eq!(config.max_logos, 3);
        assert_eq!(config.include_substring, "cdn.example");
        assert_eq!(config.exclude_substring, "sprites");
        assert_eq!(config.size_marker_substring, "w=800");
    }
}
