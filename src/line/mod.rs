//! LINE Messaging API integration: webhook types, signature
//! verification, and the reply client.

pub mod client;
pub mod signature;
pub mod webhook;

pub use client::{LineClient, ReplySender};
pub use signature::{compute_signature, encode_signature, verify_signature};
pub use webhook::{MessageContent, WebhookEnvelope, WebhookEvent};
