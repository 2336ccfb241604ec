use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use patient_cell::router::patient_routes;
use shared_utils::test_utils::{test_state, JwtTestUtils, TestConfig, TestUser};

async fn create_test_app() -> Router {
    patient_routes(test_state().await)
}

fn authed(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, JwtTestUtils::bearer());

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn asha() -> Value {
    json!({
        "patient_name": "Asha Verma",
        "age": 30,
        "gender": "F",
        "contact_number": "9876543210"
    })
}

#[tokio::test]
async fn test_requests_without_token_are_rejected() {
    let app = create_test_app().await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = create_test_app().await;
    let token = JwtTestUtils::create_expired_token(&TestUser::default(), &TestConfig::default());

    let request = Request::builder()
        .uri("/")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_patient_returns_created_with_location() {
    let app = create_test_app().await;

    let response = app.oneshot(authed("POST", "/", Some(asha()))).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/api/patients/P1");
    assert_eq!(body_json(response).await["patient_id"], "P1");
}

#[tokio::test]
async fn test_add_patient_with_invalid_fields_is_bad_request() {
    let app = create_test_app().await;

    let mut patient = asha();
    patient["gender"] = json!("X");
    patient["contact_number"] = json!("abc");

    let response = app.oneshot(authed("POST", "/", Some(patient))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("Gender"));
    assert!(error.contains("Contact number"));
}

#[tokio::test]
async fn test_get_list_and_single_patient() {
    let app = create_test_app().await;

    app.clone().oneshot(authed("POST", "/", Some(asha()))).await.unwrap();

    let response = app.clone().oneshot(authed("GET", "/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let response = app.clone().oneshot(authed("GET", "/P1", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["patient_name"], "Asha Verma");

    let response = app.oneshot(authed("GET", "/P2", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_age_validates_range() {
    let app = create_test_app().await;
    app.clone().oneshot(authed("POST", "/", Some(asha()))).await.unwrap();

    let response = app.clone().oneshot(authed("PUT", "/P1/age/131", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.clone().oneshot(authed("PUT", "/P1/age/45", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(authed("PUT", "/P9/age/45", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_patient() {
    let app = create_test_app().await;
    app.clone().oneshot(authed("POST", "/", Some(asha()))).await.unwrap();

    let response = app.clone().oneshot(authed("DELETE", "/P1", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Removed Patient (ID:P1) successfully");

    let response = app.oneshot(authed("DELETE", "/P1", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
