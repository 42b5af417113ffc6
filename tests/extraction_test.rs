//! Browser-driven extraction over a `data:` URL document

mod common;

use common::create_test_dir;
use logoscrape::{FetchConfig, ImageKind, extract_images, launch_browser, load_page};

const TEST_PAGE: &str = "data:text/html,\
<img src='http://assets.invalid/one.png' width='64' height='64'>\
<img src=''>\
<img src='http://assets.invalid/two.png'>\
<div style=\"background-image: url('http://assets.invalid/bg1.png')\">first</div>\
<span style='background-image: url(http://assets.invalid/bg2.png)'>second</span>";

#[tokio::test]
#[ignore] // Requires Chrome/Chromium to be installed
async fn extracts_img_and_background_records_in_two_passes() {
    let dir = create_test_dir().expect("temp dir");
    let config = FetchConfig::default()
        .with_page_url(TEST_PAGE)
        .with_output_dir(dir.path())
        .with_navigation_timeout_secs(30)
        .with_settle_delay_ms(100);

    let (mut browser, handler_task, user_data_dir) = launch_browser(true, None)
        .await
        .expect("failed to launch browser");

    let page = load_page(&browser, &config).await.expect("page should load");
    let records = extract_images(&page).await.expect("extraction should run");

    // Three <img> elements, one with an empty src, plus two backgrounds
    assert_eq!(records.len(), 4);

    // Pass one first, in document order
    assert_eq!(records[0].kind, ImageKind::Img);
    assert_eq!(records[0].source_url, "http://assets.invalid/one.png");
    assert_eq!(records[0].width, Some(64));
    assert_eq!(records[1].kind, ImageKind::Img);
    assert_eq!(records[1].source_url, "http://assets.invalid/two.png");

    // Pass two after, in element traversal order, without dimensions
    assert_eq!(records[2].kind, ImageKind::Background);
    assert_eq!(records[2].source_url, "http://assets.invalid/bg1.png");
    assert_eq!(records[2].width, None);
    assert_eq!(records[3].kind, ImageKind::Background);
    assert_eq!(records[3].source_url, "http://assets.invalid/bg2.png");

    let _ = browser.close().await;
    let _ = browser.wait().await;
    handler_task.abort();
    let _ = std::fs::remove_dir_all(user_data_dir);
}
