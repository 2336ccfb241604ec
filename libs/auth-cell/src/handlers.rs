use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_database::AppState;
use shared_models::auth::{AuthenticationRequest, AuthenticationResponse, RegisterUserRequest, TokenResponse};
use shared_models::error::AppError;
use shared_utils::extractor::extract_bearer_token;
use shared_utils::jwt::validate_token;
use shared_utils::validation::{is_valid_email, FieldErrors};

use crate::models::{LoginOutcome, RegistrationOutcome};
use crate::services::AuthService;

fn validate_registration(request: &RegisterUserRequest) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    errors
        .check(!request.user_name.trim().is_empty(), "User Name is required")
        .check(is_valid_email(&request.email), "Email is not a valid email address")
        .check(!request.password.is_empty(), "Password is required");
    errors.into_result()
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    validate_registration(&request)?;

    let service = AuthService::new(&state.db, state.config.clone());

    match service.register_user(request).await {
        RegistrationOutcome::Registered(user_name) => Ok((
            StatusCode::CREATED,
            Json(json!({ "message": format!("User {} registered successfully", user_name) })),
        )),
        RegistrationOutcome::Rejected(reasons) => Err(AppError::BadRequest(reasons.join(" "))),
        RegistrationOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AuthenticationRequest>,
) -> Result<Json<AuthenticationResponse>, AppError> {
    let service = AuthService::new(&state.db, state.config.clone());

    match service.validate_login(&request).await {
        LoginOutcome::Authenticated(email) => {
            let response = service.create_token(&request.user_name, &email).map_err(|e| {
                error!("Could not issue token: {}", e);
                AppError::generic()
            })?;
            Ok(Json(response))
        }
        LoginOutcome::InvalidCredentials => Err(AppError::BadRequest("Invalid Credentials".to_string())),
        LoginOutcome::Error => Err(AppError::generic()),
    }
}

pub async fn validate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, AppError> {
    debug!("Validating token");

    let token = extract_bearer_token(&headers)?;

    match validate_token(&token, &state.config) {
        Ok(user) => {
            let response = TokenResponse {
                valid: true,
                user_id: user.id,
                email: user.email,
                role: user.role,
            };

            Ok(Json(response))
        },
        Err(err) => {
            Err(AppError::Auth(err))
        }
    }
}

pub async fn verify(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    debug!("Verifying token");

    let token = extract_bearer_token(&headers)?;

    Ok(Json(json!({ "valid": validate_token(&token, &state.config).is_ok() })))
}
