use crate::errors::{DbError, DbResult};
use sqlx::SqlitePool;
use std::collections::HashSet;

// Embed all migration SQL files at compile time
const MIGRATION_BASIC: &str = include_str!("../migrations/20240320000000_basic.sql");
const MIGRATION_UPDATED_TRIGGERS: &str = include_str!("../migrations/20240404000000_updated_triggers.sql");

// List of migrations with their names and SQL content, in apply order
const MIGRATIONS: &[(&str, &str)] = &[
    ("20240320000000_basic.sql", MIGRATION_BASIC),
    ("20240404000000_updated_triggers.sql", MIGRATION_UPDATED_TRIGGERS),
];

/// Bring the schema up to date, applying every migration not yet recorded
pub async fn initialize_database(pool: &SqlitePool) -> DbResult<()> {
    log::info!("Starting database migration process");

    create_migrations_table(pool).await?;

    let applied = get_applied_migrations(pool).await?;
    apply_pending_migrations(pool, &applied).await?;

    log::info!("Database migration process completed");
    Ok(())
}

/// Create migrations table if it doesn't exist
async fn create_migrations_table(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS migrations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL
        )"
    )
    .execute(pool)
    .await
    .map_err(|e| DbError::Migration(format!("Failed to create migrations table: {}", e)))?;

    Ok(())
}

/// Names of every migration already applied
async fn get_applied_migrations(pool: &SqlitePool) -> DbResult<HashSet<String>> {
    let names = sqlx::query_scalar::<_, String>("SELECT name FROM migrations")
        .fetch_all(pool)
        .await
        .map_err(|e| DbError::Migration(format!("Failed to read applied migrations: {}", e)))?;

    Ok(names.into_iter().collect())
}

/// Apply pending migrations inside one transaction
async fn apply_pending_migrations(pool: &SqlitePool, applied: &HashSet<String>) -> DbResult<()> {
    let pending = get_pending_migrations(applied);

    if pending.is_empty() {
        log::debug!("No pending migrations to apply");
        return Ok(());
    }

    log::info!("Found {} pending migrations", pending.len());

    let mut tx = pool.begin().await
        .map_err(|e| DbError::Migration(format!("Failed to begin transaction: {}", e)))?;

    for (migration_name, migration_sql) in pending {
        log::info!("Applying migration: {}", migration_name);

        sqlx::raw_sql(migration_sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::Migration(format!("Failed to apply migration {}: {}", migration_name, e)))?;

        let now = chrono::Utc::now().to_rfc3339();
        sqlx::query("INSERT INTO migrations (name, applied_at) VALUES (?, ?)")
            .bind(migration_name)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::Migration(format!("Failed to record migration {}: {}", migration_name, e)))?;
    }

    tx.commit().await
        .map_err(|e| DbError::Migration(format!("Failed to commit migrations: {}", e)))?;

    Ok(())
}

/// Determine which migrations need to be applied
fn get_pending_migrations(applied: &HashSet<String>) -> Vec<(&'static str, &'static str)> {
    MIGRATIONS
        .iter()
        .filter(|(name, _)| !applied.contains(*name))
        .copied()
        .collect()
}
