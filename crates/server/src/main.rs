use anyhow::{Context, Result};
use dotenv::dotenv;
use server::{handler::AppRouter, scheduler::spawn_sweeper, state::AppState};
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::{Telemetry, init_logger},
};
use tokio::sync::broadcast;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let otel_endpoint = std::env::var("OTEL_ENDPOINT")
        .unwrap_or_else(|_| "http://otel-collector:4317".to_string());

    let telemetry = Telemetry::new("marketplace-server", otel_endpoint);
    let providers = telemetry.init().context("Failed to initialize telemetry")?;

    init_logger(providers.logger.clone(), "marketplace-server");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_connections,
        config.db_max_connections,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(config.clone(), pool)
        .await
        .context("Failed to create AppState")?;

    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    let sweeper = config.sweep_enabled.then(|| {
        spawn_sweeper(
            state.di_container.reservation_service.clone(),
            config.sweep_interval_secs,
            shutdown_tx.clone(),
        )
    });

    println!("🚀 Server started successfully");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    let _ = shutdown_tx.send(());
    if let Some(handle) = sweeper {
        let _ = handle.await;
    }

    providers.shutdown()?;

    Ok(())
}

pub async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Running database migrations");

    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
