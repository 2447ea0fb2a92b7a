//! Fetcher degrade-not-fail tests against a local mock upstream.
//!
//! Each test serves a canned payload from an ephemeral local listener and
//! verifies every failure mode collapses to an empty dataset.

use askgate_server::dataset::{HttpRecordSource, RecordSource};
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;

/// Serve a fixed payload on an ephemeral port; returns the record URL.
async fn mock_upstream(status: StatusCode, payload: &'static str) -> String {
    let app = Router::new().route(
        "/records",
        get(move || async move {
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                payload,
            )
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/records")
}

#[tokio::test]
async fn test_fetch_decodes_record_array() {
    let url = mock_upstream(
        StatusCode::OK,
        r#"[{"acronym": "ICSE", "name": "Intl. Conf. on Software Engineering"},
           {"name": "No Acronym Conf", "deadline": "2026-11-30"}]"#,
    )
    .await;

    let records = HttpRecordSource::new(url).fetch().await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].acronym.as_deref(), Some("ICSE"));
    assert!(records[1].acronym.is_none());
    assert_eq!(records[1].deadline.as_deref(), Some("2026-11-30"));
}

#[tokio::test]
async fn test_non_array_payload_degrades_to_empty() {
    let url = mock_upstream(StatusCode::OK, r#"{"message": "under maintenance"}"#).await;
    assert!(HttpRecordSource::new(url).fetch().await.is_empty());
}

#[tokio::test]
async fn test_upstream_error_status_degrades_to_empty() {
    let url = mock_upstream(StatusCode::INTERNAL_SERVER_ERROR, "oops").await;
    assert!(HttpRecordSource::new(url).fetch().await.is_empty());
}

#[tokio::test]
async fn test_unreachable_upstream_degrades_to_empty() {
    // Grab a free port, then close it so the connection is refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let records = HttpRecordSource::new(format!("http://{addr}/records"))
        .fetch()
        .await;
    assert!(records.is_empty());
}
