//! JavaScript evaluation scripts
//!
//! This module contains the JavaScript code used to enumerate image
//! resources in the rendered page. Extraction runs as two separate
//! passes over the document, and the passes are never interleaved.

/// First pass: every `<img>` element with a non-empty resolved source.
///
/// The browser resolves `src` to an absolute URL. Natural dimensions are
/// preferred; rendered dimensions are the fallback for images that have
/// not been decoded yet. Zero dimensions serialize as `null`.
pub const IMG_ELEMENTS_SCRIPT: &str = r#"
    (() => {
        const records = [];
        document.querySelectorAll('img').forEach(img => {
            if (img.src) {
                records.push({
                    kind: 'img',
                    source_url: img.src,
                    width: img.naturalWidth || img.width || null,
                    height: img.naturalHeight || img.height || null
                });
            }
        });
        return records;
    })()
"#;

/// Second pass: the computed `background-image` of every element in the
/// document, all tags.
///
/// Returns the raw computed values; the `url(...)` reference is parsed
/// out on the Rust side. Values of `none` and values without a `url(`
/// token are skipped here.
pub const BACKGROUND_STYLES_SCRIPT: &str = r#"
    (() => {
        const styles = [];
        document.querySelectorAll('*').forEach(el => {
            const bg = window.getComputedStyle(el).backgroundImage;
            if (bg && bg !== 'none' && bg.includes('url(')) {
                styles.push(bg);
            }
        });
        return styles;
    })()
"#;
