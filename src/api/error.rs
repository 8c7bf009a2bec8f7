use crate::errors::{DomainError, ServiceError, ValidationError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: bool,
    pub status_code: u16,
    pub message: String,
}

/// Error returned by handlers; renders as `ErrorBody` with a matching status
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Unauthorized")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(DomainError::EntityNotFound(entity, _)) => {
                Self::not_found(format!("{} not found", entity))
            }
            ServiceError::Domain(DomainError::Validation(ValidationError::Unique { field }))
                if field == "user_email" =>
            {
                Self::bad_request("The email address is already in use.")
            }
            ServiceError::Domain(DomainError::Validation(validation)) => {
                Self::bad_request(validation.to_string())
            }
            other => {
                log::error!("Request failed: {}", other);
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: false,
            status_code: self.status.as_u16(),
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_map_to_status_codes() {
        let not_found: ApiError =
            ServiceError::Domain(DomainError::EntityNotFound("User".to_string(), 4)).into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.message, "User not found");

        let duplicate: ApiError = ServiceError::Domain(DomainError::Validation(
            ValidationError::unique("user_email"),
        ))
        .into();
        assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);

        let invalid: ApiError = ServiceError::Domain(DomainError::Validation(
            ValidationError::required("username"),
        ))
        .into();
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert!(invalid.message.contains("username"));

        let internal: ApiError =
            ServiceError::Domain(DomainError::Internal("disk on fire".to_string())).into();
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!internal.message.contains("disk"));
    }
}
