//! Loginapp server entry point.
//!
//! Bootstrap order: configuration, logging, password hasher, store,
//! router, listener. A store that cannot be reached or initialized stops
//! startup.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use loginapp::adapters::auth::Argon2Hasher;
use loginapp::adapters::http::{api_router, AccountAppState, AppState, ToolsAppState};
use loginapp::adapters::memory::{InMemoryUserRepository, InMemoryUserToolsRepository};
use loginapp::adapters::postgres::{
    connect, ensure_schema, PostgresUserRepository, PostgresUserToolsRepository,
};
use loginapp::application::StoreDeadline;
use loginapp::config::{AppConfig, LogFormat};
use loginapp::ports::{PasswordHasher, UserRepository, UserToolsRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level, config.server.log_format);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "Starting loginapp"
    );

    let auth = &config.auth;
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new(
        auth.hash_memory_kib,
        auth.hash_iterations,
        auth.hash_parallelism,
    )?);

    let (users, tools): (Arc<dyn UserRepository>, Arc<dyn UserToolsRepository>) =
        if config.database.in_memory {
            tracing::warn!("Using in-memory store; data is lost on restart");
            (
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryUserToolsRepository::new()),
            )
        } else {
            let pool = connect(&config.database).await.map_err(|e| {
                tracing::error!(error = %e, "Failed to connect to database");
                e
            })?;
            tracing::info!("Database connection established");

            if config.database.ensure_schema {
                ensure_schema(&pool).await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to create tables");
                    e
                })?;
                tracing::info!("Database tables ready");
            }

            (
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Arc::new(PostgresUserToolsRepository::new(pool)),
            )
        };

    let deadline = StoreDeadline::new(config.database.statement_timeout());
    let state = AppState {
        account: AccountAppState {
            users,
            hasher,
            deadline,
        },
        tools: ToolsAppState { tools, deadline },
    };
    let app = api_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
