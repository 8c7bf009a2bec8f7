#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use recipe_planner::api::{self, AppState};
use recipe_planner::auth::API_KEY_HEADER;
use recipe_planner::config::Config;
use recipe_planner::database;
use recipe_planner::db_migration::initialize_database;
use recipe_planner::domains::user::{NewUser, SqliteUserRepository, UserRepository, UserService};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "test-key";

/// Fresh in-memory database with the full schema
pub async fn setup_pool() -> SqlitePool {
    let pool = database::connect_in_memory().await.unwrap();
    initialize_database(&pool).await.unwrap();
    pool
}

pub fn test_config() -> Config {
    Config {
        api_key: TEST_API_KEY.to_string(),
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        max_connections: 1,
    }
}

pub fn user_service(pool: &SqlitePool) -> UserService {
    let repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    UserService::new(repo)
}

pub fn app(pool: &SqlitePool) -> Router {
    api::router(AppState::new(test_config(), pool.clone()))
}

pub fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        user_email: email.to_string(),
        user_password: "correct horse".to_string(),
        user_pfp: None,
    }
}

/// Insert a user row directly, bypassing hashing
pub async fn insert_user(pool: &SqlitePool, email: &str) -> i64 {
    sqlx::query("INSERT INTO users (username, user_email, user_password) VALUES ('cook', ?, 'x')")
        .bind(email)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

/// Send a request with the test API key and an optional JSON body
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(API_KEY_HEADER, TEST_API_KEY);

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the response is the JSON error envelope with the given status
pub async fn assert_error(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    let body = json_body(response).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["status_code"], status.as_u16());
    assert!(body["message"].is_string());
    body
}
