use std::sync::Arc;

use anyhow::Context;
use landdev_core_api::TokenService;
use landdev_core_db::repository::{AgreementRepository, UserRepository};
use landdev_core_document::DocumentRepositories;
use landdev_core_postgres::{init_database, PostgresRepositories};
use landdev_core_server::routes::cors_layer;
use landdev_core_server::{app_router, AppConfig, AppState, StoreBackend};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let stores = open_stores(&config).await?;

    let tokens = TokenService::new(config.secret_key.as_bytes(), config.access_token_expire_minutes);
    let state = AppState::new(stores.agreements, stores.users, tokens, config.bcrypt_cost);

    if let Some(seed) = &config.seed_user {
        state.auth.seed_user(seed).await.context("failed to seed user")?;
    }

    let app = app_router(state).layer(cors_layer(&config.cors_origins).context("invalid CORS_ORIGINS")?);

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    info!(address = %listener.local_addr()?, backend = ?config.store_backend, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(postgres) = stores.postgres {
        postgres.close().await;
        info!("PostgreSQL pool closed");
    }
    info!("shutdown complete");
    Ok(())
}

struct Stores {
    agreements: Arc<dyn AgreementRepository>,
    users: Arc<dyn UserRepository>,
    /// Kept to close the pool on shutdown.
    postgres: Option<PostgresRepositories>,
}

async fn open_stores(config: &AppConfig) -> anyhow::Result<Stores> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .acquire_timeout(config.database_acquire_timeout)
                .connect(database_url)
                .await
                .context("failed to connect to PostgreSQL")?;
            init_database(&pool).await.context("failed to apply migrations")?;
            info!(max_connections = config.database_max_connections, "connected to PostgreSQL");

            let postgres = PostgresRepositories::new(Arc::new(pool));
            let repos = postgres.create_all_repositories();
            Ok(Stores {
                agreements: repos.agreement_repository,
                users: repos.user_repository,
                postgres: Some(postgres),
            })
        }
        StoreBackend::Document => {
            warn!("using the in-process document store; data is lost on shutdown");
            let repos = DocumentRepositories::new().create_all_repositories();
            Ok(Stores {
                agreements: repos.agreement_repository,
                users: repos.user_repository,
                postgres: None,
            })
        }
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to create SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl-C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
