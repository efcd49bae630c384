//! HTTP client for the Practicum homework status API.
//!
//! Every request carries bounded connect and total timeouts so a stalled
//! server cannot wedge the poll loop.

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::Settings;
use crate::error::TransportError;

use super::StatusSource;

/// Build a blocking client with the configured timeouts.
pub(crate) fn create_http_client(settings: &Settings) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .user_agent(concat!("homework-bot/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Fetches raw homework state from the review API.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(settings: &Settings) -> Result<Self, TransportError> {
        let client = create_http_client(settings).map_err(TransportError::Request)?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            token: settings.credentials.practicum_token.clone(),
        })
    }

    fn request_url(&self, from_date: i64) -> Result<Url, TransportError> {
        Url::parse_with_params(&self.endpoint, [("from_date", from_date.to_string())]).map_err(
            |e| {
                error!("Invalid review API endpoint {}: {e}", self.endpoint);
                TransportError::InvalidEndpoint {
                    endpoint: self.endpoint.clone(),
                    reason: e.to_string(),
                }
            },
        )
    }
}

impl StatusSource for PracticumClient {
    fn fetch(&self, from_date: i64) -> Result<Value, TransportError> {
        let url = self.request_url(from_date)?;
        debug!("Requesting homework statuses from_date={from_date}");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .send()
            .map_err(|e| {
                error!("Request to review API failed: {e}");
                TransportError::Request(e)
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            error!("Review API answered HTTP {}, expected 200", status.as_u16());
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
                endpoint: self.endpoint.clone(),
            });
        }

        response.json::<Value>().map_err(|e| {
            error!("Review API response could not be decoded: {e}");
            TransportError::Decode(e)
        })
    }
}
