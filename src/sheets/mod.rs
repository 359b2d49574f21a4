//! Google Sheets persistence: service-account auth and the row store.

pub mod auth;
pub mod store;

pub use auth::ServiceAccountKey;
pub use store::{CatalogRow, RowStore, SheetsStore};
