//! HTTP server for the webhook bot.
//!
//! Endpoints:
//! - `GET /` — liveness probe, returns a static greeting
//! - `POST /callback` — LINE webhook endpoint; verifies the signature
//!   over the raw body before any parsing, handles each text message
//!   event, and returns `200 OK`

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use thiserror::Error;
use tracing::{debug, warn};

use crate::handler::handle_text;
use crate::line::signature::verify_signature;
use crate::line::webhook::{MessageContent, WebhookEnvelope, WebhookEvent};
use crate::line::ReplySender;
use crate::sheets::RowStore;

/// Header carrying the base64 HMAC-SHA256 signature.
const HEADER_SIGNATURE: &str = "x-line-signature";

/// Shared application state, passed to handlers via Axum's `State`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Channel secret bytes for webhook signature verification.
    channel_secret: Vec<u8>,
    store: Arc<dyn RowStore>,
    replies: Arc<dyn ReplySender>,
}

impl AppState {
    pub fn new(
        channel_secret: impl Into<Vec<u8>>,
        store: Arc<dyn RowStore>,
        replies: Arc<dyn ReplySender>,
    ) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                channel_secret: channel_secret.into(),
                store,
                replies,
            }),
        }
    }

    fn channel_secret(&self) -> &[u8] {
        &self.inner.channel_secret
    }

    fn store(&self) -> &dyn RowStore {
        self.inner.store.as_ref()
    }

    fn replies(&self) -> &dyn ReplySender {
        self.inner.replies.as_ref()
    }
}

/// Errors rejecting a webhook delivery at the transport boundary.
#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("missing x-line-signature header")]
    MissingSignature,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl IntoResponse for CallbackError {
    fn into_response(self) -> Response {
        // All rejections are the client's fault; the platform retries on
        // its own schedule.
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/callback", post(callback_handler))
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Hello, World!"
}

/// Webhook endpoint handler.
///
/// Signature verification happens on the raw body bytes before JSON
/// parsing. Each text message event produces exactly one reply: saved,
/// apologized, or echoed. Reply-send failures are logged but do not
/// change the HTTP response; a non-2xx here would make LINE redeliver
/// the event and duplicate rows (append is not idempotent).
async fn callback_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), CallbackError> {
    let signature = headers
        .get(HEADER_SIGNATURE)
        .and_then(|v| v.to_str().ok())
        .ok_or(CallbackError::MissingSignature)?;

    if !verify_signature(&body, signature, state.channel_secret()) {
        warn!("Invalid webhook signature");
        return Err(CallbackError::InvalidSignature);
    }

    let envelope: WebhookEnvelope = serde_json::from_slice(&body)?;
    debug!(events = envelope.events.len(), "Received webhook");

    for event in envelope.events {
        let WebhookEvent::Message {
            reply_token,
            message: MessageContent::Text { text, .. },
        } = event
        else {
            continue;
        };

        let reply = handle_text(state.store(), &text).await;
        if let Err(e) = state.replies().reply(&reply_token, &reply).await {
            warn!(error = %e, "Failed to send reply");
        }
    }

    Ok((StatusCode::OK, "OK"))
}
