use crate::api::error::ApiError;
use crate::api::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Middleware rejecting requests whose `x-api-key` header does not match
/// the configured secret. A missing header is treated as a mismatch.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided == Some(state.config.api_key.as_str()) {
        return next.run(request).await;
    }

    log::warn!(
        "Rejected {} {}: missing or invalid {}",
        request.method(),
        request.uri().path(),
        API_KEY_HEADER
    );
    ApiError::unauthorized().into_response()
}
