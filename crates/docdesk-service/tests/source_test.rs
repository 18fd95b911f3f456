//! Integration tests for record sources.

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use docdesk_core::error::ErrorKind;
use docdesk_service::seed::seed_records;
use docdesk_service::source::load_table;
use docdesk_service::{
    FileRecordSource, HttpRecordSource, RecordSource, SeedRecordSource, TableState,
};

/// Serve a single HTTP response on a random local port.
async fn serve_once(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}/api")
}

#[tokio::test]
async fn test_seed_source() {
    let records = SeedRecordSource.fetch_all().await.expect("seed");
    assert_eq!(records.len(), 30);
}

#[tokio::test]
async fn test_http_source_success() {
    let body = serde_json::to_string(&seed_records()).expect("serialize");
    let url = serve_once("200 OK", body).await;
    let source = HttpRecordSource::new(&url, Duration::from_secs(5)).expect("client");

    let records = source.fetch_all().await.expect("fetch");

    assert_eq!(records, seed_records());
}

#[tokio::test]
async fn test_http_source_error_status_is_fetch_error() {
    let url = serve_once(
        "500 Internal Server Error",
        r#"{"message":"Server error"}"#.to_string(),
    )
    .await;
    let source = HttpRecordSource::new(&url, Duration::from_secs(5)).expect("client");

    let err = source.fetch_all().await.expect_err("500");

    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert!(err.message.contains("500"));
}

#[tokio::test]
async fn test_http_source_unreachable_is_fetch_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let source = HttpRecordSource::new(&format!("http://{addr}/api"), Duration::from_secs(5))
        .expect("client");
    let err = source.fetch_all().await.expect_err("refused");
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn test_file_source_round_trips_seed_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    let json = serde_json::to_string_pretty(&seed_records()).expect("serialize");
    file.write_all(json.as_bytes()).expect("write");

    let records = FileRecordSource::new(file.path())
        .fetch_all()
        .await
        .expect("load");

    assert_eq!(records.len(), 30);
    assert_eq!(records[16].name, "Finance");
}

#[tokio::test]
async fn test_file_source_missing_or_malformed() {
    let missing = FileRecordSource::new("/definitely/not/here.json")
        .fetch_all()
        .await
        .expect_err("missing");
    assert!(missing.is_fetch_error());

    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(b"{ not json").expect("write");
    let malformed = FileRecordSource::new(file.path())
        .fetch_all()
        .await
        .expect_err("malformed");
    assert!(malformed.is_fetch_error());
}

#[tokio::test]
async fn test_failed_load_leaves_table_loading() {
    let mut table = TableState::new(10);
    let source = FileRecordSource::new("/definitely/not/here.json");

    assert!(load_table(&mut table, &source).await.is_err());
    assert!(table.is_loading());

    let count = load_table(&mut table, &SeedRecordSource).await.expect("seed");
    assert_eq!(count, 30);
    assert!(!table.is_loading());
    assert_eq!(table.page_records().len(), 10);
    // Newest seed rows are the two 15 Jan 2025 entries.
    assert_eq!(table.page_records()[0].created_date, "15 Jan 2025");
}
