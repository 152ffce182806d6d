use anyhow::Context;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;

use papyrus_api::auth::TokenManager;
use papyrus_api::config::AppConfig;
use papyrus_api::routes;
use papyrus_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().context("configuration")?;

    let tokens = TokenManager::new(
        &config.security.signing_key,
        Duration::hours(config.security.token_ttl_hours),
    )
    .context("token manager")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.connect_timeout_secs,
        ))
        .connect(&config.database.url)
        .await
        .context("database connection")?;

    let state = AppState::postgres(pool, tokens);
    let app = routes::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
