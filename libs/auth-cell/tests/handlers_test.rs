use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use auth_cell::router::auth_routes;
use shared_utils::test_utils::{test_state, JwtTestUtils, TestConfig, TestUser};

async fn create_test_app() -> Router {
    auth_routes(test_state().await)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn new_user() -> Value {
    json!({
        "user_name": "reception",
        "email": "desk@clinic.test",
        "password": "Desk#2024"
    })
}

#[tokio::test]
async fn test_register_login_and_validate() {
    let app = create_test_app().await;

    let response = app.clone().oneshot(post_json("/register", new_user())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post_json("/login", json!({ "user_name": "reception", "password": "Desk#2024" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(body["expiration"].is_string());
    let token = body["token"].as_str().unwrap().to_string();

    let response = app.oneshot(post_with_token("/validate", &token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["user_id"], "reception");
    assert_eq!(body["email"], "desk@clinic.test");
}

#[tokio::test]
async fn test_bad_login_is_invalid_credentials() {
    let app = create_test_app().await;
    app.clone().oneshot(post_json("/register", new_user())).await.unwrap();

    let response = app
        .oneshot(post_json("/login", json!({ "user_name": "reception", "password": "Wrong#2024" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Invalid Credentials");
}

#[tokio::test]
async fn test_register_with_bad_email_is_bad_request() {
    let app = create_test_app().await;

    let mut user = new_user();
    user["email"] = json!("not-an-email");
    let response = app.oneshot(post_json("/register", user)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_with_weak_password_lists_reasons() {
    let app = create_test_app().await;

    let mut user = new_user();
    user["password"] = json!("desk");
    let response = app.oneshot(post_json("/register", user)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("at least 6 characters"));
    assert!(error.contains("uppercase"));
}

#[tokio::test]
async fn test_verify_reports_validity() {
    let app = create_test_app().await;
    let config = TestConfig::default();

    let good = JwtTestUtils::create_test_token(&TestUser::default(), &config, None);
    let response = app.clone().oneshot(post_with_token("/verify", &good)).await.unwrap();
    assert_eq!(json_body(response).await["valid"], true);

    let expired = JwtTestUtils::create_expired_token(&TestUser::default(), &config);
    let response = app.clone().oneshot(post_with_token("/verify", &expired)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["valid"], false);

    let response = app.oneshot(post_with_token("/validate", &expired)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
