//! Row persistence against the Google Sheets v4 API.

use async_trait::async_trait;
use tracing::debug;

use crate::error::AppendError;
use crate::sheets::auth::{ServiceAccountKey, fetch_access_token};

/// Base URL of the Sheets v4 API.
const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// One parsed catalog entry, consumed immediately by the store.
///
/// Never persisted locally; the spreadsheet is the only store of record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub category: Option<String>,
    pub url: String,
}

/// Appends catalog rows to a spreadsheet-like store.
///
/// Appending is NOT idempotent: calling `append_row` twice with the same
/// row produces two rows. Retrying is left to the human user.
#[async_trait]
pub trait RowStore: Send + Sync {
    async fn append_row(&self, row: &CatalogRow) -> Result<(), AppendError>;
}

/// `RowStore` backed by one pre-configured Google Sheets worksheet.
///
/// Each append authenticates from scratch (JWT-bearer token exchange)
/// and issues a single `values.append` call writing the URL column.
pub struct SheetsStore {
    key: ServiceAccountKey,
    sheet_key: String,
    sheet_name: String,
    client: reqwest::Client,
    base_url: String,
}

impl SheetsStore {
    pub fn new(key: ServiceAccountKey, sheet_key: String, sheet_name: String) -> Self {
        Self {
            key,
            sheet_key,
            sheet_name,
            client: reqwest::Client::new(),
            base_url: SHEETS_API_BASE.to_string(),
        }
    }

    /// Override the API base URL (used by tests pointing at a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn append_endpoint(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.base_url, self.sheet_key, self.sheet_name
        )
    }
}

#[async_trait]
impl RowStore for SheetsStore {
    async fn append_row(&self, row: &CatalogRow) -> Result<(), AppendError> {
        let token = fetch_access_token(&self.client, &self.key).await?;

        // The row shape matches the original sheet: a single URL column.
        // The category only selects the reply wording.
        let body = serde_json::json!({ "values": [[row.url]] });

        let resp = self
            .client
            .post(self.append_endpoint())
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppendError::Network {
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(AppendError::Remote { status, message });
        }

        debug!(url = %row.url, category = ?row.category, "Row appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::auth::ServiceAccountKey;

    fn store() -> SheetsStore {
        let key = ServiceAccountKey {
            client_email: "bot@demo.iam.gserviceaccount.com".to_string(),
            private_key: "unused".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
        };
        SheetsStore::new(key, "sheet-key-123".to_string(), "クリップ".to_string())
    }

    #[test]
    fn append_endpoint_targets_configured_sheet() {
        assert_eq!(
            store().append_endpoint(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-key-123/values/クリップ:append"
        );
    }

    #[test]
    fn base_url_override_applies() {
        let store = store().with_base_url("http://127.0.0.1:9999");
        assert!(
            store
                .append_endpoint()
                .starts_with("http://127.0.0.1:9999/v4/spreadsheets/")
        );
    }
}
