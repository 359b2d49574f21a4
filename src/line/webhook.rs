//! Serde types for the LINE webhook envelope.
//!
//! Only text message events are acted on; every other event type
//! (follows, stickers, images, ...) deserializes into a catch-all
//! variant and is ignored by the handler.

use serde::Deserialize;

/// Top-level webhook request body: zero or more events for this bot.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEnvelope {
    /// Bot user ID the events were sent to.
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One webhook event, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WebhookEvent {
    /// A user sent a message to the bot.
    #[serde(rename_all = "camelCase")]
    Message {
        /// Single-use token for sending a correlated reply.
        reply_token: String,
        message: MessageContent,
    },
    /// Any event type the bot does not handle.
    #[serde(other)]
    Other,
}

/// Message payload, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageContent {
    Text {
        id: String,
        text: String,
    },
    /// Images, stickers, video and other media the bot ignores.
    #[serde(other)]
    Other,
}
