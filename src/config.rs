//! Configuration, sourced from the environment.

use std::path::PathBuf;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default path of the Google service-account key file.
const DEFAULT_CREDENTIALS_PATH: &str = "json/gcp-credentials.json";

/// Default HTTP listen port.
const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration for the bot.
#[derive(Debug)]
pub struct Config {
    /// LINE channel access token (bearer token for the reply API).
    pub channel_access_token: SecretString,
    /// LINE channel secret (HMAC key for webhook signatures).
    pub channel_secret: SecretString,
    /// Spreadsheet key identifying the target spreadsheet.
    pub sheet_key: String,
    /// Sheet/tab name within the spreadsheet.
    pub sheet_name: String,
    /// Path to the service-account credentials JSON file.
    pub credentials_path: PathBuf,
    /// HTTP listen port for the webhook server.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `LINE_CHANNEL_ACCESS_TOKEN`, `LINE_CHANNEL_SECRET`, `SP_SHEET_KEY`
    /// and `SP_SHEET` are required; `GOOGLE_CREDENTIALS_PATH` and `PORT`
    /// have defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let channel_access_token = require_env("LINE_CHANNEL_ACCESS_TOKEN")?;
        let channel_secret = require_env("LINE_CHANNEL_SECRET")?;
        let sheet_key = require_env("SP_SHEET_KEY")?;
        let sheet_name = require_env("SP_SHEET")?;

        let credentials_path = std::env::var("GOOGLE_CREDENTIALS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_PATH));

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("not a valid port number: {raw}"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            channel_access_token: SecretString::from(channel_access_token),
            channel_secret: SecretString::from(channel_secret),
            sheet_key,
            sheet_name,
            credentials_path,
            port,
        })
    }
}

fn require_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}
