//! Backend for a recipe and meal-planning application.
//!
//! The schema covers users, groups, recipes, ingredients, menus, pantries,
//! shopping lists and notifications. Only users are exposed over HTTP, at
//! `/api/users`, behind a shared API key.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod db_migration;
pub mod domains;
pub mod errors;
pub mod validation;

use crate::api::AppState;
use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};
use tokio::net::TcpListener;

/// Initialize env_logger. `RUST_LOG` wins; otherwise debug builds log at
/// `debug` and release builds at `info`.
pub fn init_logging() {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

/// Open the database, apply migrations and serve HTTP until a shutdown
/// signal arrives. The pool is closed before returning.
pub async fn run(config: Config) -> ServiceResult<()> {
    log::info!("Opening database");
    let pool = database::connect(&config.database_url, config.max_connections).await?;
    db_migration::initialize_database(&pool).await?;

    let address = config.bind_address();
    let app = api::router(AppState::new(config, pool.clone()));

    log::info!("Binding to {}", address);
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ServiceError::ServiceUnavailable(format!("Failed to bind {}: {}", address, e)))?;
    log::info!("Server running on {}", address);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServiceError::ServiceUnavailable(format!("Server error: {}", e)));

    log::info!("Server shutting down, closing database");
    pool.close().await;
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => log::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                log::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
