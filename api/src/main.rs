//! User Registry API server

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_registry_api::adapters::{InMemoryUserStore, PostgresUserStore, UserRepositoryAdapter};
use user_registry_api::app::{RegisterUserService, RegisterUserUseCase};
use user_registry_api::config::{Config, StoreBackend};
use user_registry_api::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,user_registry_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting user registry API...");

    // Load configuration
    let config = Config::from_env()?;

    // Select the store adapter and wire the use case on top of it
    let register_user: Arc<dyn RegisterUserUseCase> = match &config.store {
        StoreBackend::Postgres { database_url } => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            let store = Arc::new(PostgresUserStore::new(db));
            store
                .ensure_schema()
                .await
                .context("Failed to create users table")?;

            Arc::new(RegisterUserService::new(Arc::new(
                UserRepositoryAdapter::new(store),
            )))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory user store, registrations are lost on restart");
            let store = Arc::new(InMemoryUserStore::new());

            Arc::new(RegisterUserService::new(Arc::new(
                UserRepositoryAdapter::new(store),
            )))
        }
    };

    let app = router(AppState { register_user }, config.rate_limit.as_ref())?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
