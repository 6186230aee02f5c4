//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::adapters::PageDocument;
use crate::config::{DEFAULT_LATEST_CONTAINER, DEFAULT_LIST_CONTAINER, DEFAULT_TABS_CONTAINER};
use crate::domain::entities::{CategoryMapping, FeedDocument, NewsEntry};

/// Two entries out of date order, two categories
pub const SAMPLE_FEED_JSON: &str = r#"{
    "news": [
        {"date": "2024.01.10", "category": "press", "title": "A"},
        {"date": "2024.03.01", "category": "award", "title": "B"}
    ],
    "categories": {"press": "Press", "award": "Award"}
}"#;

/// Create an entry with only the required fields set
pub fn test_entry(title: &str, date: &str, category: &str) -> NewsEntry {
    NewsEntry {
        title: title.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        description: None,
        link: None,
        image: None,
        image_alt: None,
        is_new: false,
    }
}

/// The four categories the default render config knows about
pub fn sample_categories() -> CategoryMapping {
    [
        ("press", "Press"),
        ("award", "Award"),
        ("conference", "Conference"),
        ("notice", "Notice"),
    ]
    .into_iter()
    .collect()
}

/// The document behind `SAMPLE_FEED_JSON`
pub fn sample_document() -> FeedDocument {
    FeedDocument {
        news: vec![
            test_entry("A", "2024.01.10", "press"),
            test_entry("B", "2024.03.01", "award"),
        ],
        categories: [("press", "Press"), ("award", "Award")].into_iter().collect(),
    }
}

/// A larger document covering every category, with a tie on dates
pub fn mixed_document() -> FeedDocument {
    let mut launch = test_entry("Launch", "2024.05.20", "press");
    launch.is_new = true;
    launch.link = Some("https://example.com/launch".to_string());

    let mut prize = test_entry("Prize", "2024.04.02", "award");
    prize.image = Some("img/prize.jpg".to_string());

    FeedDocument {
        news: vec![
            test_entry("Holiday", "2023.12.24", "notice"),
            launch,
            test_entry("Keynote", "2024.04.02", "conference"),
            prize,
            test_entry("Interview", "2024.02.14", "press"),
        ],
        categories: sample_categories(),
    }
}

/// A page with the tab and list containers of the news page
pub fn news_page() -> PageDocument {
    PageDocument::new()
        .with_container(DEFAULT_TABS_CONTAINER)
        .with_container(DEFAULT_LIST_CONTAINER)
}

/// A page with only the latest-news container
pub fn top_page() -> PageDocument {
    PageDocument::new().with_container(DEFAULT_LATEST_CONTAINER)
}

/// Answer a single HTTP request on loopback with a canned response.
///
/// Returns the URL to fetch.
pub async fn serve_once(status: u16, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;

        let response = format!(
            "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}/news.json", addr)
}
