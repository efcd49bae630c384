//! Review API client against a local server

use homework_bot::api::{PracticumClient, StatusSource};
use homework_bot::error::TransportError;
use homework_bot::logging::{self, LogSettings};

use super::helpers::{closed_port_url, test_settings, CannedServer};

#[test]
fn test_fetch_sends_token_and_cursor() {
    let server = CannedServer::start(vec![(
        200,
        r#"{"homeworks": [{"homework_name": "hw1", "status": "reviewing"}], "current_date": 1700000100}"#,
    )]);
    let settings = test_settings(&format!("{}/api/user_api/homework_statuses/", server.base_url), "http://unused");
    let client = PracticumClient::new(&settings).unwrap();

    let response = client.fetch(1_700_000_000).unwrap();
    assert_eq!(response["homeworks"][0]["status"], "reviewing");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(
        requests[0].url,
        "/api/user_api/homework_statuses/?from_date=1700000000"
    );
    assert_eq!(
        requests[0].header("authorization"),
        Some("OAuth practicum-token")
    );
}

#[test]
fn test_fetch_non_200_is_status_error() {
    let server = CannedServer::start(vec![(500, r#"{"code": "server_error"}"#)]);
    let settings = test_settings(&format!("{}/", server.base_url), "http://unused");
    let client = PracticumClient::new(&settings).unwrap();

    match client.fetch(0) {
        Err(TransportError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[test]
fn test_fetch_non_200_is_logged_as_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let log = LogSettings {
        file: dir.path().join("fetch.log"),
        default_filter: "debug".to_string(),
    };
    let server = CannedServer::start(vec![(503, r#"{"code": "unavailable"}"#)]);
    let settings = test_settings(&format!("{}/", server.base_url), "http://unused");
    let client = PracticumClient::new(&settings).unwrap();

    let result = tracing::subscriber::with_default(logging::subscriber(&log).unwrap(), || {
        client.fetch(0)
    });
    assert!(matches!(result, Err(TransportError::Status { status: 503, .. })));

    let contents = std::fs::read_to_string(&log.file).unwrap();
    let line = contents
        .lines()
        .find(|l| l.contains("Review API answered HTTP 503, expected 200"))
        .expect("non-200 answer should be logged");
    assert!(line.contains("ERROR"));
}

#[test]
fn test_fetch_invalid_json_is_decode_error() {
    let server = CannedServer::start(vec![(200, "<html>maintenance</html>")]);
    let settings = test_settings(&format!("{}/", server.base_url), "http://unused");
    let client = PracticumClient::new(&settings).unwrap();

    assert!(matches!(client.fetch(0), Err(TransportError::Decode(_))));
}

#[test]
fn test_fetch_connection_refused_is_request_error() {
    let settings = test_settings(&closed_port_url(), "http://unused");
    let client = PracticumClient::new(&settings).unwrap();

    let err = client.fetch(0).unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
    assert!(err.to_string().contains("request to review API failed"));
}
