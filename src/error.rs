//! Error types for clipsheet.

/// Top-level error type for the bot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Append error: {0}")]
    Append(#[from] AppendError),

    #[error("Reply error: {0}")]
    Reply(#[from] ReplyError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse credentials file: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors appending a row to the spreadsheet.
///
/// Authentication, transport, and remote-rejection failures stay
/// distinguishable here even though the webhook handler answers all of
/// them with the same apology reply.
#[derive(Debug, thiserror::Error)]
pub enum AppendError {
    #[error("Spreadsheet authentication failed: {reason}")]
    Auth { reason: String },

    #[error("Spreadsheet request failed: {reason}")]
    Network { reason: String },

    #[error("Spreadsheet API rejected the request ({status}): {message}")]
    Remote { status: u16, message: String },
}

/// Errors sending a reply back through the messaging platform.
#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("Failed to send reply: {reason}")]
    SendFailed { reason: String },

    #[error("Reply rejected by the platform ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Result type alias for the bot.
pub type Result<T> = std::result::Result<T, Error>;
