use crate::config::Config;
use crate::domains::user::{SqliteUserRepository, UserRepository, UserService};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wire repositories and services over an open pool
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool));
        let user_service = Arc::new(UserService::new(user_repo));

        Self {
            config: Arc::new(config),
            user_service,
        }
    }
}
