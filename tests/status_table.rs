//! Tests for status-code table loading and graceful degradation.

use tempfile::TempDir;
use trace_clean::{StatusCodeTable, Tooltip};

const SAMPLE_TABLE: &str = r#"{
    "200": {"message": "OK. The standard response for successful HTTP requests."},
    "301": {"message": "Moved Permanently. This and all future requests should be directed to the given URI."},
    "500": {"message": "Internal Server Error."}
}"#;

#[tokio::test]
async fn test_load_from_local_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("http_status_codes.json");
    std::fs::write(&path, SAMPLE_TABLE).unwrap();

    let table = StatusCodeTable::load(path.to_str().unwrap()).await;
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.resolve("301"),
        Some("Moved Permanently. This and all future requests should be directed to the given URI.")
    );
    assert_eq!(table.resolve("404"), None);
}

#[tokio::test]
async fn test_missing_file_degrades_to_empty_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.json");

    let table = StatusCodeTable::load(path.to_str().unwrap()).await;
    assert!(table.is_empty());
}

#[tokio::test]
async fn test_unparseable_table_degrades_to_empty_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("http_status_codes.json");
    std::fs::write(&path, "<html>definitely not json</html>").unwrap();

    let table = StatusCodeTable::load(path.to_str().unwrap()).await;
    assert!(table.is_empty());
}

#[tokio::test]
async fn test_unreachable_url_degrades_to_empty_table() {
    // The discard port on loopback refuses the connection immediately; the
    // fetch fails and the table degrades rather than erroring.
    let table = StatusCodeTable::load("http://127.0.0.1:9/status.json").await;
    assert!(table.is_empty());
}

#[tokio::test]
async fn test_tooltips_after_degraded_load_never_show() {
    let table = StatusCodeTable::load("/nonexistent/table.json").await;
    let mut tooltip = Tooltip::new();
    tooltip.hover_enter("200", &table);
    assert!(!tooltip.is_visible());
}
