use crate::errors::{ServiceError, ServiceResult, DomainError, ValidationError};
use crate::domains::user::types::{User, NewUser, UpdateUser};
use crate::domains::user::repository::UserRepository;
use crate::auth::{hash_password, verify_password};
use crate::validation::Validate;
use std::sync::Arc;

/// Service for user-related operations
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new user service
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Get all users
    pub async fn get_users(&self) -> ServiceResult<Vec<User>> {
        let users = self.user_repo.find_all()
            .await
            .map_err(ServiceError::Domain)?;

        Ok(users)
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: i64) -> ServiceResult<User> {
        let user = self.user_repo.find_by_id(id)
            .await
            .map_err(ServiceError::Domain)?;

        Ok(user)
    }

    /// Create a new user. Fails without touching storage when the email is
    /// already in use.
    pub async fn create_user(&self, user: NewUser) -> ServiceResult<User> {
        user.validate().map_err(ServiceError::Domain)?;

        if !self.is_email_unique(&user.user_email, None).await? {
            log::warn!("Rejected user creation: email {} already in use", user.user_email);
            return Err(ServiceError::Domain(DomainError::Validation(
                ValidationError::unique("user_email"),
            )));
        }

        let mut user_with_hash = user;
        user_with_hash.user_password = hash_password(&user_with_hash.user_password)?;

        let new_user = self.user_repo.create(user_with_hash)
            .await
            .map_err(ServiceError::Domain)?;

        log::info!("Created user {}", new_user.id);
        Ok(new_user)
    }

    /// Update an existing user. `user_created` is left as stored.
    pub async fn update_user(&self, id: i64, update: UpdateUser) -> ServiceResult<User> {
        // Not-found wins over validation so a bad id reads as 404
        let existing = self.user_repo.find_by_id(id)
            .await
            .map_err(ServiceError::Domain)?;

        update.validate().map_err(ServiceError::Domain)?;

        if update.user_email != existing.user_email
            && !self.is_email_unique(&update.user_email, Some(id)).await?
        {
            log::warn!("Rejected update of user {}: email {} already in use", id, update.user_email);
            return Err(ServiceError::Domain(DomainError::Validation(
                ValidationError::unique("user_email"),
            )));
        }

        // Keep the stored hash when the password did not change
        let mut update_with_hash = update;
        if !verify_password(&update_with_hash.user_password, &existing.user_password) {
            update_with_hash.user_password = hash_password(&update_with_hash.user_password)?;
        } else {
            update_with_hash.user_password = existing.user_password;
        }

        let updated_user = self.user_repo.update(id, update_with_hash)
            .await
            .map_err(ServiceError::Domain)?;

        log::info!("Updated user {}", id);
        Ok(updated_user)
    }

    /// Hard delete a user and, through cascade, everything that references it
    pub async fn delete_user(&self, id: i64) -> ServiceResult<()> {
        match self.user_repo.hard_delete(id).await {
            Ok(()) => {
                log::info!("Deleted user {}", id);
                Ok(())
            }
            Err(e @ DomainError::EntityNotFound(..)) => {
                log::warn!("Attempted to delete non-existent user {}", id);
                Err(ServiceError::Domain(e))
            }
            Err(e) => Err(ServiceError::Domain(e)),
        }
    }

    /// Check if email is unique
    pub async fn is_email_unique(&self, email: &str, exclude_id: Option<i64>) -> ServiceResult<bool> {
        let result = self.user_repo.is_email_unique(email, exclude_id)
            .await
            .map_err(ServiceError::Domain)?;

        Ok(result)
    }
}
