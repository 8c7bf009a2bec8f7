use crate::errors::{DbError, DomainError, DomainResult, ValidationError};
use crate::domains::user::types::{User, NewUser, UpdateUser, UserRow};
use crate::domains::core::convert::{format_timestamp, now};
use crate::domains::core::repository::{HardDeletable, FindById};
use chrono::Duration;
use sqlx::{SqlitePool, query, query_as, query_scalar};
use async_trait::async_trait;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync + FindById<User> + HardDeletable {
    /// Find all users with a positive identifier, ordered by id
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    /// Insert a new user. The password must already be hashed.
    async fn create(&self, user: NewUser) -> DomainResult<User>;

    /// Overwrite the mutable fields of an existing user. The password must
    /// already be hashed.
    async fn update(&self, id: i64, update: UpdateUser) -> DomainResult<User>;

    /// Check if email is unique
    async fn is_email_unique(&self, email: &str, exclude_id: Option<i64>) -> DomainResult<bool>;
}

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository instance
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Turn a UNIQUE violation on `user_email` into a validation error so a lost
/// race against the pre-insert check still reads as a client error.
fn map_write_error(e: sqlx::Error) -> DomainError {
    let db_err = DbError::from(e);
    if db_err.is_unique_violation() {
        DomainError::Validation(ValidationError::unique("user_email"))
    } else {
        DomainError::Database(db_err)
    }
}

#[async_trait]
impl FindById<User> for SqliteUserRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<User> {
        let row = query_as::<_, UserRow>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?
            .ok_or_else(|| DomainError::EntityNotFound("User".to_string(), id))?;

        row.into_entity()
    }
}

#[async_trait]
impl HardDeletable for SqliteUserRepository {
    fn entity_name(&self) -> &'static str {
        "users"
    }

    async fn hard_delete(&self, id: i64) -> DomainResult<()> {
        let result = query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EntityNotFound("User".to_string(), id));
        }

        log::debug!("Hard deleted {} row {}", self.entity_name(), id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let rows = query_as::<_, UserRow>("SELECT * FROM users WHERE id > 0 ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            users.push(row.into_entity()?);
        }

        Ok(users)
    }

    async fn create(&self, user: NewUser) -> DomainResult<User> {
        // One instant for both columns so created == updated on insert
        let now = format_timestamp(&now());

        let result = query(
            "INSERT INTO users (
                username, user_email, user_password, user_pfp, user_created, user_updated
            ) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&user.username)
        .bind(&user.user_email)
        .bind(&user.user_password)
        .bind(&user.user_pfp)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        self.find_by_id(result.last_insert_rowid()).await
    }

    async fn update(&self, id: i64, update: UpdateUser) -> DomainResult<User> {
        let existing = self.find_by_id(id).await?;

        // user_updated must move forward even when the clock has not
        let now = now();
        let user_updated = if now > existing.user_updated {
            now
        } else {
            existing.user_updated + Duration::microseconds(1)
        };

        // Must stay one autocommit statement so concurrent writers wait out
        // busy_timeout instead of failing a lock upgrade with SQLITE_BUSY
        let result = query(
            "UPDATE users SET
                username = ?, user_email = ?, user_password = ?, user_pfp = ?, user_updated = ?
            WHERE id = ?"
        )
        .bind(&update.username)
        .bind(&update.user_email)
        .bind(&update.user_password)
        .bind(&update.user_pfp)
        .bind(format_timestamp(&user_updated))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EntityNotFound("User".to_string(), id));
        }

        self.find_by_id(id).await
    }

    async fn is_email_unique(&self, email: &str, exclude_id: Option<i64>) -> DomainResult<bool> {
        let count: i64 = match exclude_id {
            Some(id) => {
                query_scalar("SELECT COUNT(*) FROM users WHERE user_email = ? AND id != ?")
                    .bind(email)
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| DomainError::Database(DbError::from(e)))?
            },
            None => {
                query_scalar("SELECT COUNT(*) FROM users WHERE user_email = ?")
                    .bind(email)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| DomainError::Database(DbError::from(e)))?
            }
        };

        Ok(count == 0)
    }
}
