//! Records produced by DOM image extraction

use serde::{Deserialize, Serialize};

/// How an image reaches the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    /// An `<img>` element with a resolved `src`.
    Img,
    /// A CSS `background-image` reference on any element.
    Background,
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageKind::Img => write!(f, "img"),
            ImageKind::Background => write!(f, "background"),
        }
    }
}

/// One image resource found in the rendered DOM.
///
/// Ordering of a record batch reflects DOM traversal order within its
/// extraction pass. Background records carry no dimensions; the computed
/// style does not expose them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub kind: ImageKind,
    /// Absolute URL as resolved by the browser.
    pub source_url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl ImageRecord {
    /// Build a background record from a URL extracted out of a computed
    /// `background-image` value.
    #[must_use]
    pub fn background(source_url: String) -> Self {
        Self {
            kind: ImageKind::Background,
            source_url,
            width: None,
            height: None,
        }
    }
}
