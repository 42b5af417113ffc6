//! Candidate filtering
//!
//! The heuristic that separates logo candidates from the rest of the
//! page's imagery, held as data so the rule is testable with arbitrary
//! substrings.

use crate::config::FetchConfig;
use crate::image_extractor::{ImageKind, ImageRecord};

/// URL-substring predicate for logo candidates.
///
/// A record passes when its URL contains `include_substring`, does not
/// contain `exclude_substring`, and either came from an `<img>` element
/// or carries the `size_marker_substring` (background images are mostly
/// decorative; the size marker catches the large renditions that are
/// actually logos).
#[derive(Debug, Clone)]
pub struct LogoFilter {
    pub include_substring: String,
    pub exclude_substring: String,
    pub size_marker_substring: String,
}

impl LogoFilter {
    #[must_use]
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            include_substring: config.include_substring.clone(),
            exclude_substring: config.exclude_substring.clone(),
            size_marker_substring: config.size_marker_substring.clone(),
        }
    }

    /// Check a single record against the rule.
    #[must_use]
    pub fn matches(&self, record: &ImageRecord) -> bool {
        record.source_url.contains(&self.include_substring)
            && !record.source_url.contains(&self.exclude_substring)
            && (record.kind == ImageKind::Img
                || record.source_url.contains(&self.size_marker_substring))
    }

    /// Retain the matching records, preserving order.
    #[must_use]
    pub fn apply(&self, records: Vec<ImageRecord>) -> Vec<ImageRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> LogoFilter {
        LogoFilter {
            include_substring: "gamma.app".to_string(),
            exclude_substring: "theme_images".to_string(),
            size_marker_substring: "height:400".to_string(),
        }
    }

    fn img(url: &str) -> ImageRecord {
        ImageRecord {
            kind: ImageKind::Img,
            source_url: url.to_string(),
            width: None,
            height: None,
        }
    }

    fn background(url: &str) -> ImageRecord {
        ImageRecord::background(url.to_string())
    }

    #[test]
    fn img_on_matching_host_passes() {
        assert!(filter().matches(&img("https://cdn.gamma.app/abc/logo.png")));
    }

    #[test]
    fn other_hosts_are_rejected() {
        assert!(!filter().matches(&img("https://images.other.net/logo.png")));
    }

    #[test]
    fn theme_assets_are_rejected_even_for_img() {
        assert!(!filter().matches(&img("https://cdn.gamma.app/theme_images/swirl.png")));
    }

    #[test]
    fn background_needs_the_size_marker() {
        assert!(!filter().matches(&background("https://cdn.gamma.app/abc/photo.jpg")));
        assert!(filter().matches(&background(
            "https://cdn.gamma.app/resize/height:400/abc/logo.png"
        )));
    }

    #[test]
    fn apply_preserves_order() {
        let records = vec![
            img("https://cdn.gamma.app/a.png"),
            img("https://elsewhere.example/b.png"),
            background("https://cdn.gamma.app/resize/height:400/c.png"),
        ];
        let kept = filter().apply(records);
        assert_eq!(kept.len(), 2);
        assert!(kept[0].source_url.ends_with("a.png"));
        assert!(kept[1].source_url.ends_with("c.png"));
    }
}
