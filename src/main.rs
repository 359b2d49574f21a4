use std::sync::Arc;

use anyhow::Context;
use clipsheet::config::Config;
use clipsheet::line::LineClient;
use clipsheet::server::{self, AppState};
use clipsheet::sheets::{ServiceAccountKey, SheetsStore};
use secrecy::ExposeSecret;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    let key = ServiceAccountKey::from_file(&config.credentials_path).with_context(|| {
        format!(
            "failed to load credentials from {}",
            config.credentials_path.display()
        )
    })?;

    eprintln!("clipsheet v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Sheet: {} / {}", config.sheet_key, config.sheet_name);
    eprintln!("   Webhook: http://0.0.0.0:{}/callback\n", config.port);

    let store = Arc::new(SheetsStore::new(
        key,
        config.sheet_key.clone(),
        config.sheet_name.clone(),
    ));
    let replies = Arc::new(LineClient::new(config.channel_access_token));

    let state = AppState::new(
        config.channel_secret.expose_secret().as_bytes(),
        store,
        replies,
    );
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    tracing::info!(port = config.port, "Webhook server started");
    axum::serve(listener, app).await?;

    Ok(())
}
