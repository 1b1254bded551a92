// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use openai_client::OpenAIClient;
use sqlx::postgres::PgPoolOptions;
use studycards_core::domains::auth::JwtService;
use studycards_core::kernel::{
    BaseStudyStore, MemoryStore, OpenAICompletionService, PostgresStore, ServerDeps,
};
use studycards_core::{server::build_app, Config, StoreKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,studycards_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Studycards API");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let store: Arc<dyn BaseStudyStore> = match config.store {
        StoreKind::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;

            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations complete");

            Arc::new(PostgresStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store; data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    // One completion client for the whole process. Retries must finish
    // within the same deadline generation enforces.
    let mut openai = OpenAIClient::new(config.openai_api_key.clone())
        .with_total_timeout(config.completion_timeout)
        .context("Failed to build OpenAI client")?;
    if let Some(base_url) = &config.openai_base_url {
        openai = openai.with_base_url(base_url);
    }
    let completion = Arc::new(OpenAICompletionService::new(openai, &config.openai_model));
    tracing::info!(model = %config.openai_model, "Completion service ready");

    let deps = ServerDeps::new(store, completion, config.completion_timeout);
    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()));

    let app = build_app(deps, jwt_service, &config.allowed_origins);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
