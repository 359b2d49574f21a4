//! Reply client for the LINE Messaging API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::error::ReplyError;

/// Base URL of the LINE Messaging API.
const LINE_API_BASE: &str = "https://api.line.me";

/// Sends a reply correlated to an inbound event.
///
/// The webhook handler depends on this trait rather than on the concrete
/// client so tests can substitute a recording fake.
#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Send `text` as the reply for `reply_token` (single-use).
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), ReplyError>;
}

/// LINE Messaging API client authenticated with a channel access token.
pub struct LineClient {
    access_token: SecretString,
    client: reqwest::Client,
    base_url: String,
}

impl LineClient {
    pub fn new(access_token: SecretString) -> Self {
        Self {
            access_token,
            client: reqwest::Client::new(),
            base_url: LINE_API_BASE.to_string(),
        }
    }

    /// Override the API base URL (used by tests pointing at a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl ReplySender for LineClient {
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), ReplyError> {
        let body = serde_json::json!({
            "replyToken": reply_token,
            "messages": [{"type": "text", "text": text}],
        });

        let resp = self
            .client
            .post(self.api_url("/v2/bot/message/reply"))
            .bearer_auth(self.access_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ReplyError::SendFailed {
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ReplyError::Rejected { status, message });
        }

        Ok(())
    }
}
