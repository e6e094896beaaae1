//! Delivery of the finished report.

use crate::error::{Error, Result};
use crate::fetch::USER_AGENT;
use crate::summary::print_report;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const SEND_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
    disable_web_page_preview: bool,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    description: Option<String>,
}

/// Posts messages through the Telegram Bot API `sendMessage` method.
pub struct TelegramNotifier {
    client: Client,
    endpoint: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(api_url: &str, token: &str, chat_id: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(SEND_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: send_message_url(api_url, token),
            chat_id: chat_id.into(),
        })
    }
}

pub fn send_message_url(api_url: &str, token: &str) -> String {
    format!("{}/bot{token}/sendMessage", api_url.trim_end_matches('/'))
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        };

        // reqwest errors carry the request URL, which embeds the bot token.
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if status.is_success() {
            debug!(chat_id = %self.chat_id, %status, "message delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Delivery {
            status,
            description: describe_api_error(&body),
        })
    }
}

fn describe_api_error(body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .and_then(|err| err.description)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty response".to_string()
            } else {
                trimmed.to_string()
            }
        })
}

/// Prints the report to stdout instead of sending it.
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        print_report(text);
        Ok(())
    }
}
