use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::error::Error as StdError;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

pub const MAX_ATTEMPTS: usize = 3;
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(25);
pub const RETRY_DELAY: Duration = Duration::from_secs(1);
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Something that can hand back the markup behind a URL.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
    attempts: usize,
    retry_delay: Duration,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            attempts: MAX_ATTEMPTS,
            retry_delay: RETRY_DELAY,
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let mut last_err: Option<Error> = None;
        for attempt in 1..=self.attempts {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    debug!(url, attempt, error = %describe_error(&err), "fetch attempt failed");
                    last_err = Some(err);
                }
            }

            if attempt < self.attempts {
                sleep(self.retry_delay).await;
            }
        }

        let detail = last_err
            .as_ref()
            .map_or_else(|| "unknown error".to_string(), |err| describe_error(err));
        warn!(url, attempts = self.attempts, %detail, "page unavailable");
        Err(Error::Unavailable {
            url: url.to_string(),
            attempts: self.attempts,
            detail,
        })
    }
}

/// Flattens an error and its sources into a single log-friendly line.
pub fn describe_error(error: &(dyn StdError + 'static)) -> String {
    let mut pieces: Vec<String> = Vec::new();
    let mut current = Some(error);
    while let Some(cause) = current {
        let text = cause.to_string();
        if !text.is_empty() {
            if pieces.is_empty() {
                pieces.push(text);
            } else {
                pieces.push(format!("caused by {text}"));
            }
        }
        current = cause.source();
    }

    if pieces.is_empty() {
        format!("{error:?}")
    } else {
        pieces.join(" | ")
    }
}
