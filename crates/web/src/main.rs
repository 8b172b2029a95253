use anyhow::Context;
use storage::Database;
use tokio::net::TcpListener;

mod app;
mod config;
mod error;
mod features;

use config::Config;

// Requests interleave on one thread, only at storage await points.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Stark Lifter API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config.redacted_database_url()
    );
    let db = Database::new(&config.database_url, config.max_connections)
        .context("Invalid database configuration")?;
    db.connect().await.context("Failed to connect to database")?;

    tracing::info!("Ensuring database schema");
    db.ensure_schema()
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database schema ready");

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let served = axum::serve(listener, app::router(db.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.disconnect().await;
    served.context("Server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
