//! Behavior-driven tests for the HTTP price feed
//!
//! A local listener stands in for the price list so the tests exercise the
//! real reqwest client, status handling and catalog deduplication.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use token_swap_bot::config::AppConfig;
use token_swap_bot::feed::{HttpPriceFeed, PriceFeed};
use token_swap_bot::AppError;

const PRICES_JSON: &str = r#"[
    {"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.93},
    {"currency":"USDC","date":"2023-08-29T07:10:30.000Z","price":0.9998},
    {"currency":"eth","date":"2023-08-29T07:10:40.000Z","price":1600.0},
    {"currency":"USDC","date":"2023-08-29T07:10:40.000Z","price":1.0},
    {"currency":"ATOM","date":"2023-08-29T07:10:50.000Z"}
]"#;

/// Serves exactly one HTTP response and returns the feed URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local address");

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while let Ok(read) = socket.read(&mut buf).await {
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/prices.json", addr)
}

fn feed_for(url: String) -> HttpPriceFeed {
    let config = AppConfig {
        price_feed_url: url,
        icon_base_url: "https://icons.test/tokens".to_string(),
        ..AppConfig::default()
    };
    HttpPriceFeed::new(&config)
}

// =============================================================================
// Price Feed: Successful Load
// =============================================================================

#[tokio::test]
async fn when_feed_lists_repeated_currencies_only_the_latest_record_survives() {
    // Given: A feed serving duplicates that differ in case and date
    let url = serve_once("200 OK", PRICES_JSON).await;
    let feed = feed_for(url);

    // When: The catalog is loaded
    let tokens = feed.load().await.expect("feed should load");

    // Then: One token per lower-cased currency, in first-seen order
    let ids: Vec<&str> = tokens.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["eth", "usdc", "atom"]);

    // And: The newest record wins, keeping the served symbol casing
    let eth = &tokens[0];
    assert_eq!(eth.symbol, "ETH");
    assert_eq!(eth.price, Some(1645.93));
    assert_eq!(tokens[1].price, Some(1.0));

    // And: A record without a price is still listed
    assert_eq!(tokens[2].price, None);
    assert_eq!(tokens[2].icon_url, "https://icons.test/tokens/ATOM.svg");
}

// =============================================================================
// Price Feed: Error Handling
// =============================================================================

#[tokio::test]
async fn when_feed_answers_with_server_error_load_reports_the_status() {
    // Given: A feed that fails with HTTP 500
    let url = serve_once("500 Internal Server Error", "oops").await;
    let feed = feed_for(url);

    // When: The catalog is loaded
    let result = feed.load().await;

    // Then: The failure carries the status code
    assert_eq!(
        result,
        Err(AppError::Fetch("HTTP error! status: 500".to_string()))
    );
}

#[tokio::test]
async fn when_feed_body_is_not_a_price_list_load_fails_with_fetch_error() {
    // Given: A feed serving something other than a JSON array
    let url = serve_once("200 OK", r#"{"error":"maintenance"}"#).await;
    let feed = feed_for(url);

    // When: The catalog is loaded
    let result = feed.load().await;

    // Then: A fetch error is reported instead of an empty catalog
    assert!(matches!(result, Err(AppError::Fetch(_))));
}

#[tokio::test]
async fn when_feed_is_unreachable_load_fails_with_fetch_error() {
    // Given: A port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local address");
    drop(listener);
    let feed = feed_for(format!("http://{}/prices.json", addr));

    // When: The catalog is loaded
    let result = feed.load().await;

    // Then: The connection failure surfaces as a fetch error
    assert!(matches!(result, Err(AppError::Fetch(_))));
}
