//! Telegram Bot API notifier.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::api::client::create_http_client;
use crate::config::Settings;
use crate::error::DeliveryError;

use super::Notifier;

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends messages through `sendMessage` of the Telegram Bot API.
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    token: String,
}

impl TelegramNotifier {
    pub fn new(settings: &Settings) -> Result<Self, DeliveryError> {
        let client = create_http_client(settings).map_err(DeliveryError::Request)?;
        Ok(Self {
            client,
            api_url: settings.telegram_api_url.trim_end_matches('/').to_string(),
            token: settings.credentials.telegram_token.clone(),
        })
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.token)
    }
}

impl Notifier for TelegramNotifier {
    fn send(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessage { chat_id, text })
            .send()
            // The URL embeds the bot token; keep it out of logs
            .map_err(|e| DeliveryError::Request(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ApiReply = response
            .json()
            .map_err(|e| DeliveryError::Request(e.without_url()))?;
        if reply.ok {
            Ok(())
        } else {
            Err(DeliveryError::Rejected {
                description: reply
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            })
        }
    }
}
