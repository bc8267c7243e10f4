use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use turnos_api::config::AppConfig;
use turnos_api::routes::{app, AppState};
use turnos_api::store::SqlStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and API_TOKEN.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let pool = PgPoolOptions::new()
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let state = AppState::new(SqlStore::new(pool), config.auth_token.clone());

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("turnos-api listening on http://{bind_addr}");

    axum::serve(listener, app(state)).await.context("server error")?;
    Ok(())
}
