//! Telegram notifier against a local server

use homework_bot::error::DeliveryError;
use homework_bot::notifier::{Notifier, TelegramNotifier};

use super::helpers::{closed_port_url, test_settings, CannedServer};

#[test]
fn test_send_posts_chat_id_and_text() {
    let server = CannedServer::start(vec![(200, r#"{"ok": true, "result": {"message_id": 1}}"#)]);
    let settings = test_settings("http://unused", &server.base_url);
    let notifier = TelegramNotifier::new(&settings).unwrap();

    notifier.send("987654", "Привет").unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "/bot123:bot-token/sendMessage");
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body, serde_json::json!({"chat_id": "987654", "text": "Привет"}));
}

#[test]
fn test_send_http_error_is_status_error() {
    let server = CannedServer::start(vec![(
        400,
        r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#,
    )]);
    let settings = test_settings("http://unused", &server.base_url);
    let notifier = TelegramNotifier::new(&settings).unwrap();

    match notifier.send("1", "text") {
        Err(DeliveryError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("chat not found"));
        }
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[test]
fn test_send_ok_false_is_rejected() {
    let server = CannedServer::start(vec![(200, r#"{"ok": false, "description": "Forbidden"}"#)]);
    let settings = test_settings("http://unused", &server.base_url);
    let notifier = TelegramNotifier::new(&settings).unwrap();

    assert!(matches!(
        notifier.send("1", "text"),
        Err(DeliveryError::Rejected { ref description }) if description == "Forbidden"
    ));
}

#[test]
fn test_request_error_hides_token() {
    let settings = test_settings("http://unused", closed_port_url().trim_end_matches('/'));
    let notifier = TelegramNotifier::new(&settings).unwrap();

    let err = notifier.send("1", "text").unwrap_err();
    assert!(matches!(err, DeliveryError::Request(_)));
    assert!(!err.to_string().contains("bot-token"));
}
