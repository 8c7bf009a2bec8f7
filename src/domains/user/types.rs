use crate::domains::core::convert::parse_timestamp;
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use sqlx::FromRow;

pub const USERNAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 100;
pub const PASSWORD_MAX_LEN: usize = 255;
pub const PFP_MAX_LEN: usize = 255;

/// Core User entity - represents an account in the system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub user_email: String,
    /// Argon2 PHC string, never the plain password
    pub user_password: String,
    pub user_pfp: Option<String>,
    pub user_created: DateTime<Utc>,
    pub user_updated: DateTime<Utc>,
}

/// NewUser DTO - used when creating a new user.
///
/// Legacy clients post the full user shape (`id`, `user_created`,
/// `user_updated`); those fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub user_email: String,
    pub user_password: String, // Plain text password (will be hashed)
    #[serde(default)]
    pub user_pfp: Option<String>,
}

fn validate_user_fields(
    username: &str,
    user_email: &str,
    user_password: &str,
    user_pfp: Option<&String>,
) -> DomainResult<()> {
    ValidationBuilder::new("username", Some(username.to_string()))
        .required()
        .not_blank()
        .max_length(USERNAME_MAX_LEN)
        .validate()?;

    ValidationBuilder::new("user_email", Some(user_email.to_string()))
        .required()
        .email()
        .max_length(EMAIL_MAX_LEN)
        .validate()?;

    ValidationBuilder::new("user_password", Some(user_password.to_string()))
        .required()
        .max_length(PASSWORD_MAX_LEN)
        .validate()?;

    ValidationBuilder::new("user_pfp", user_pfp.cloned())
        .max_length(PFP_MAX_LEN)
        .validate()?;

    Ok(())
}

impl Validate for NewUser {
    fn validate(&self) -> DomainResult<()> {
        validate_user_fields(
            &self.username,
            &self.user_email,
            &self.user_password,
            self.user_pfp.as_ref(),
        )
    }
}

/// UpdateUser DTO - full replacement of the mutable user fields.
/// `user_created` is not part of it and cannot be changed after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub username: String,
    pub user_email: String,
    pub user_password: String,
    #[serde(default)]
    pub user_pfp: Option<String>,
}

impl Validate for UpdateUser {
    fn validate(&self) -> DomainResult<()> {
        validate_user_fields(
            &self.username,
            &self.user_email,
            &self.user_password,
            self.user_pfp.as_ref(),
        )
    }
}

/// UserRow - SQLite row representation for mapping from database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub user_email: String,
    pub user_password: String,
    pub user_pfp: Option<String>,
    pub user_created: String,
    pub user_updated: String,
}

impl UserRow {
    /// Convert database row to domain entity
    pub fn into_entity(self) -> DomainResult<User> {
        Ok(User {
            id: self.id,
            username: self.username,
            user_email: self.user_email,
            user_password: self.user_password,
            user_pfp: self.user_pfp,
            user_created: parse_timestamp(&self.user_created)?,
            user_updated: parse_timestamp(&self.user_updated)?,
        })
    }
}

/// UserResponse DTO - used for API responses (excludes the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub user_email: String,
    pub user_pfp: Option<String>,
    pub user_created: DateTime<Utc>,
    pub user_updated: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            user_email: user.user_email,
            user_pfp: user.user_pfp,
            user_created: user.user_created,
            user_updated: user.user_updated,
        }
    }
}

/// Envelope returned by a successful update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdated {
    pub message: String,
    pub user_data: UserResponse,
}

impl UserUpdated {
    pub fn new(user: User) -> Self {
        Self {
            message: "User successfully updated".to_string(),
            user_data: user.into(),
        }
    }
}

/// Envelope returned by a successful delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDeleted {
    pub message: String,
}

impl Default for UserDeleted {
    fn default() -> Self {
        Self {
            message: "User deleted successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DomainError, ValidationError};

    fn new_user() -> NewUser {
        NewUser {
            username: "ana".to_string(),
            user_email: "ana@example.com".to_string(),
            user_password: "secret".to_string(),
            user_pfp: None,
        }
    }

    #[test]
    fn test_new_user_validation() {
        assert!(new_user().validate().is_ok());

        let mut user = new_user();
        user.user_email = "not-an-email".to_string();
        assert!(matches!(
            user.validate(),
            Err(DomainError::Validation(ValidationError::Format { .. }))
        ));

        let mut user = new_user();
        user.username = String::new();
        assert!(matches!(
            user.validate(),
            Err(DomainError::Validation(ValidationError::Required { .. }))
        ));

        let mut user = new_user();
        user.user_pfp = Some("x".repeat(PFP_MAX_LEN + 1));
        assert!(matches!(
            user.validate(),
            Err(DomainError::Validation(ValidationError::MaxLength { .. }))
        ));
    }

    #[test]
    fn test_legacy_payload_fields_are_ignored() {
        let json = r#"{
            "id": 7,
            "username": "ana",
            "user_email": "ana@example.com",
            "user_password": "secret",
            "user_pfp": "https://img.example.com/ana.png",
            "user_created": "2001-01-01T00:00:00",
            "user_updated": "2001-01-01T00:00:00"
        }"#;
        let update: UpdateUser = serde_json::from_str(json).unwrap();
        assert_eq!(update.username, "ana");
        assert_eq!(update.user_pfp.as_deref(), Some("https://img.example.com/ana.png"));
    }

    #[test]
    fn test_response_omits_password() {
        let row = UserRow {
            id: 1,
            username: "ana".to_string(),
            user_email: "ana@example.com".to_string(),
            user_password: "$argon2id$hash".to_string(),
            user_pfp: None,
            user_created: "2024-03-20T10:00:00.000000Z".to_string(),
            user_updated: "2024-03-20T10:00:00.000000Z".to_string(),
        };
        let response: UserResponse = row.into_entity().unwrap().into();
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("user_password").is_none());
        assert_eq!(value["user_email"], "ana@example.com");
    }
}
