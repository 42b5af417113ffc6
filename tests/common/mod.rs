//! Test utilities and helper functions for the logoscrape test suite

use anyhow::Result;
use logoscrape::{FetchConfig, ImageKind, ImageRecord};
use mockito::{Mock, Server};
use std::path::Path;
use tempfile::TempDir;

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a fetch configuration pointed at a test output directory.
///
/// The include substring matches mockito's loopback URLs and the
/// company list is the two-name `[x, y]` list used across the download
/// tests.
#[allow(dead_code)]
pub fn test_config(output_dir: &Path) -> FetchConfig {
    FetchConfig::default()
        .with_output_dir(output_dir)
        .with_company_names(["x", "y"])
        .with_filter_substrings("127.0.0.1", "theme_images", "height:400")
        .with_download_timeout_secs(10)
}

/// Builds a PNG-looking payload of exactly `len` bytes.
#[allow(dead_code)]
pub fn png_payload(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    let magic = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    let head = magic.len().min(len);
    bytes[..head].copy_from_slice(&magic[..head]);
    bytes
}

/// Creates a mock endpoint that serves an image payload
#[allow(dead_code)]
pub async fn create_image_mock(server: &mut Server, path: &str, body: &[u8]) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(body.to_vec())
        .create_async()
        .await
}

/// Creates a mock endpoint that returns a redirect
#[allow(dead_code)]
pub async fn create_redirect_mock(server: &mut Server, from: &str, to: &str) -> Mock {
    server
        .mock("GET", from)
        .with_status(302)
        .with_header("location", to)
        .with_body("redirecting")
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error status
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Helper to create test URLs
#[allow(dead_code)]
pub fn test_url(server: &Server, path: &str) -> String {
    format!("{}{}", server.url(), path)
}

/// An `<img>`-sourced record for a URL
#[allow(dead_code)]
pub fn img_record(url: &str) -> ImageRecord {
    ImageRecord {
        kind: ImageKind::Img,
        source_url: url.to_string(),
        width: Some(128),
        height: Some(128),
    }
}

/// Lists the file names present in a directory, sorted
#[allow(dead_code)]
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("output directory should exist")
        .map(|entry| entry.expect("readable entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
