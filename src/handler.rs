//! Per-message orchestration: classify, persist, choose the reply.

use tracing::warn;

use crate::parser::{Classified, classify};
use crate::sheets::{CatalogRow, RowStore};

pub const REPLY_SAVED_WITH_CATEGORY: &str = "カテゴリーとURLを保存しました。";
pub const REPLY_SAVED: &str = "URLを保存しました。";
pub const REPLY_FAILED_WITH_CATEGORY: &str =
    "カテゴリーとURLの保存中にエラーが発生しました。もう一度お試しください。";
pub const REPLY_FAILED: &str = "URLの保存中にエラーが発生しました。もう一度お試しください。";

/// Usage instructions plus an echo of the unrecognized text.
pub fn usage_reply(original: &str) -> String {
    format!("URLを送信してください。\nそれ以外はおうむ返しします。\n{original}")
}

/// Handle one inbound text message and return the reply to send.
///
/// Exactly one outcome per message: saved, apologized, or echoed. Append
/// failures are logged and turned into an apology; the system never
/// retries on its own.
pub async fn handle_text(store: &dyn RowStore, text: &str) -> String {
    match classify(text) {
        Classified::CategoryAndUrl { category, url } => {
            let row = CatalogRow {
                category: Some(category),
                url,
            };
            match store.append_row(&row).await {
                Ok(()) => REPLY_SAVED_WITH_CATEGORY.to_string(),
                Err(e) => {
                    warn!(error = %e, "Failed to append categorized URL");
                    REPLY_FAILED_WITH_CATEGORY.to_string()
                }
            }
        }
        Classified::BareUrl { url } => {
            let row = CatalogRow {
                category: None,
                url,
            };
            match store.append_row(&row).await {
                Ok(()) => REPLY_SAVED.to_string(),
                Err(e) => {
                    warn!(error = %e, "Failed to append URL");
                    REPLY_FAILED.to_string()
                }
            }
        }
        Classified::Unrecognized { original } => usage_reply(&original),
    }
}
