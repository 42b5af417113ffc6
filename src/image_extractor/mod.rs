//! DOM image extraction
//!
//! Runs two synchronous queries against the live DOM of a loaded page:
//! one over `<img>` elements, one over the computed `background-image`
//! of every element. All pass-one records precede all pass-two records,
//! and no deduplication happens across the passes; an image referenced
//! both ways produces two records.

pub mod js_scripts;
pub mod types;

pub use types::{ImageKind, ImageRecord};

use anyhow::{Context, Result};
use chromiumoxide::Page;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use js_scripts::{BACKGROUND_STYLES_SCRIPT, IMG_ELEMENTS_SCRIPT};

/// Matches the first `url(...)` reference in a CSS value, with or
/// without quotes.
static CSS_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"url\(["']?([^"')]+)["']?\)"#).expect("Invalid CSS url() regex")
});

/// Extract the URL out of a CSS `background-image` value.
///
/// Handles `url("…")`, `url('…')`, and unquoted `url(…)`. Returns `None`
/// for `none`, gradients without a `url(...)` term, and anything else
/// that does not match.
#[must_use]
pub fn parse_css_url(value: &str) -> Option<String> {
    CSS_URL_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|url| !url.is_empty())
}

/// Collect every image resource present in the rendered DOM.
pub async fn extract_images(page: &Page) -> Result<Vec<ImageRecord>> {
    // Pass 1: <img> elements in document traversal order
    let js_result = page
        .evaluate(IMG_ELEMENTS_SCRIPT)
        .await
        .context("Failed to execute img extraction script")?;

    let mut records: Vec<ImageRecord> = match js_result.into_value::<serde_json::Value>() {
        Ok(value) => {
            serde_json::from_value(value).context("Failed to parse img records from JS result")?
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to get img records value: {e}")),
    };

    let img_count = records.len();

    // Pass 2: computed background-image of every element
    let js_result = page
        .evaluate(BACKGROUND_STYLES_SCRIPT)
        .await
        .context("Failed to execute background-image extraction script")?;

    let styles: Vec<String> = match js_result.into_value::<serde_json::Value>() {
        Ok(value) => serde_json::from_value(value)
            .context("Failed to parse background styles from JS result")?,
        Err(e) => return Err(anyhow::anyhow!("Failed to get background styles value: {e}")),
    };

    records.extend(
        styles
            .iter()
            .filter_map(|style| parse_css_url(style))
            .map(ImageRecord::background),
    );

    debug!(
        "Extracted images - Img elements: {}, Backgrounds: {}",
        img_count,
        records.len() - img_count
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_double_quoted_url() {
        assert_eq!(
            parse_css_url(r#"url("https://cdn.example.com/logo.png")"#),
            Some("https://cdn.example.com/logo.png".to_string())
        );
    }

    #[test]
    fn parses_single_quoted_url() {
        assert_eq!(
            parse_css_url("url('https://cdn.example.com/logo.png')"),
            Some("https://cdn.example.com/logo.png".to_string())
        );
    }

    #[test]
    fn parses_unquoted_url() {
        assert_eq!(
            parse_css_url("url(https://cdn.example.com/logo.png)"),
            Some("https://cdn.example.com/logo.png".to_string())
        );
    }

    #[test]
    fn takes_first_url_of_layered_backgrounds() {
        let value = r#"url("https://a.example/one.png"), url("https://a.example/two.png")"#;
        assert_eq!(
            parse_css_url(value),
            Some("https://a.example/one.png".to_string())
        );
    }

    #[test]
    fn rejects_none_and_gradients() {
        assert_eq!(parse_css_url("none"), None);
        assert_eq!(
            parse_css_url("linear-gradient(rgb(0, 0, 0), rgb(255, 255, 255))"),
            None
        );
    }

    #[test]
    fn img_kind_round_trips_through_serde() {
        let record: ImageRecord = serde_json::from_value(serde_json::json!({
            "kind": "img",
            "source_url": "https://cdn.example.com/logo.png",
            "width": 128,
            "height": null
        }))
        .expect("record should deserialize");
        assert_eq!(record.kind, ImageKind::Img);
        assert_eq!(record.width, Some(128));
        assert_eq!(record.height, None);
    }
}
