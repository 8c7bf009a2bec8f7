mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::*;
use serde_json::json;
use tower::ServiceExt;

fn ana() -> serde_json::Value {
    json!({
        "username": "ana",
        "user_email": "ana@example.com",
        "user_password": "secret",
        "user_pfp": "https://img.example.com/ana.png"
    })
}

#[tokio::test]
async fn test_requests_without_valid_key_are_forbidden() {
    let pool = setup_pool().await;
    let app = app(&pool);

    let missing = Request::builder()
        .uri("/api/users/")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(missing).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        json_body(response).await,
        json!({"status": false, "status_code": 403, "message": "Unauthorized"})
    );

    let wrong = Request::builder()
        .method("DELETE")
        .uri("/api/users/1")
        .header("x-api-key", "not-the-key")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(wrong).await.unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await;
}

#[tokio::test]
async fn test_root_redirects_to_user_listing() {
    let pool = setup_pool().await;
    let app = app(&pool);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/api/users/");
}

#[tokio::test]
async fn test_user_lifecycle() {
    let pool = setup_pool().await;
    let app = app(&pool);

    let response = send(&app, "POST", "/api/users/", Some(ana())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = json_body(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["username"], "ana");
    assert_eq!(created["user_created"], created["user_updated"]);
    assert!(created.get("user_password").is_none());

    let response = send(&app, "GET", &format!("/api/users/{}", id), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);

    let mut changed = ana();
    changed["username"] = json!("ana maria");
    changed["user_created"] = json!("1999-01-01T00:00:00");
    let response = send(&app, "PUT", &format!("/api/users/{}", id), Some(changed)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["message"], "User successfully updated");
    assert_eq!(updated["user_data"]["username"], "ana maria");
    assert_eq!(updated["user_data"]["user_created"], created["user_created"]);
    assert_ne!(updated["user_data"]["user_updated"], created["user_updated"]);

    let response = send(&app, "DELETE", &format!("/api/users/{}", id), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"message": "User deleted successfully"}));

    let response = send(&app, "GET", &format!("/api/users/{}", id), None).await;
    assert_error(response, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_list_with_and_without_trailing_slash() {
    let pool = setup_pool().await;
    let app = app(&pool);

    let response = send(&app, "GET", "/api/users", None).await;
    assert_eq!(json_body(response).await, json!([]));

    send(&app, "POST", "/api/users", Some(ana())).await;
    let mut bob = ana();
    bob["username"] = json!("bob");
    bob["user_email"] = json!("bob@example.com");
    send(&app, "POST", "/api/users/", Some(bob)).await;

    let response = send(&app, "GET", "/api/users/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let users = json_body(response).await;
    let names: Vec<&str> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["ana", "bob"]);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let pool = setup_pool().await;
    let app = app(&pool);

    send(&app, "POST", "/api/users/", Some(ana())).await;
    let response = send(&app, "POST", "/api/users/", Some(ana())).await;
    let body = assert_error(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["message"], "The email address is already in use.");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_bad_input_is_a_client_error() {
    let pool = setup_pool().await;
    let app = app(&pool);

    let request = Request::builder()
        .method("POST")
        .uri("/api/users/")
        .header("x-api-key", TEST_API_KEY)
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await;

    let response = send(&app, "POST", "/api/users/", Some(json!({"username": "ana"}))).await;
    assert_error(response, StatusCode::BAD_REQUEST).await;

    let mut bad_email = ana();
    bad_email["user_email"] = json!("nope");
    let response = send(&app, "POST", "/api/users/", Some(bad_email)).await;
    assert_error(response, StatusCode::BAD_REQUEST).await;

    let response = send(&app, "GET", "/api/users/abc", None).await;
    assert_error(response, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let pool = setup_pool().await;
    let app = app(&pool);

    let response = send(&app, "GET", "/api/users/99", None).await;
    assert_error(response, StatusCode::NOT_FOUND).await;

    let response = send(&app, "PUT", "/api/users/99", Some(ana())).await;
    assert_error(response, StatusCode::NOT_FOUND).await;

    let response = send(&app, "DELETE", "/api/users/99", None).await;
    assert_error(response, StatusCode::NOT_FOUND).await;
}
