//! Shared helpers: a canned-response HTTP server and settings builders

use std::io::Read;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use homework_bot::config::{Credentials, Settings};

/// A request as seen by [`CannedServer`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Serves a fixed list of responses, one per request, then stops.
pub struct CannedServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl CannedServer {
    /// Start a server answering each request with the next `(status, body)`.
    pub fn start(responses: Vec<(u16, &str)>) -> Self {
        let server =
            tiny_http::Server::http("127.0.0.1:0").expect("Failed to start tiny_http server");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("Server should listen on an IP address");
        let base_url = format!("http://{addr}");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let responses: Vec<(u16, String)> = responses
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();
        let captured = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let mut request = match server.recv_timeout(Duration::from_secs(10)) {
                    Ok(Some(request)) => request,
                    _ => return,
                };

                let mut request_body = String::new();
                let _ = request.as_reader().read_to_string(&mut request_body);
                captured.lock().unwrap().push(CapturedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    headers: request
                        .headers()
                        .iter()
                        .map(|h| (h.field.to_string(), h.value.to_string()))
                        .collect(),
                    body: request_body,
                });

                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        "Content-Type: application/json"
                            .parse::<tiny_http::Header>()
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            requests,
            handle: Some(handle),
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        // Unserved responses leave the thread waiting in recv_timeout; detach it
        if let Some(handle) = self.handle.take() {
            if handle.is_finished() {
                let _ = handle.join();
            }
        }
    }
}

/// Settings pointing both clients at local servers, with no sleep between cycles.
pub fn test_settings(endpoint: &str, telegram_api_url: &str) -> Settings {
    let mut settings = Settings::new(Credentials {
        practicum_token: "practicum-token".to_string(),
        telegram_token: "123:bot-token".to_string(),
        chat_id: "987654".to_string(),
    });
    settings.endpoint = endpoint.to_string();
    settings.telegram_api_url = telegram_api_url.to_string();
    settings.retry_period = Duration::ZERO;
    settings.connect_timeout = Duration::from_secs(2);
    settings.request_timeout = Duration::from_secs(5);
    settings
}

/// An address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
