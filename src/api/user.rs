//! Handlers for `/api/users`. Each one decodes the request, forwards it to
//! `UserService` and encodes the result; no logic lives here.

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domains::user::types::{NewUser, UpdateUser, UserDeleted, UserResponse, UserUpdated};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

type ApiResult<T> = Result<Json<T>, ApiError>;

fn user_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    let users = state.user_service.get_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<UserResponse> {
    let id = user_id(path)?;
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user.into()))
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<UserResponse> {
    let new_user = payload(body)?;
    let user = state.user_service.create_user(new_user).await?;
    Ok(Json(user.into()))
}

pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateUser>, JsonRejection>,
) -> ApiResult<UserUpdated> {
    let id = user_id(path)?;
    let update = payload(body)?;
    let user = state.user_service.update_user(id, update).await?;
    Ok(Json(UserUpdated::new(user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<UserDeleted> {
    let id = user_id(path)?;
    state.user_service.delete_user(id).await?;
    Ok(Json(UserDeleted::default()))
}
