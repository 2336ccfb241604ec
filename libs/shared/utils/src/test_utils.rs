use std::sync::Arc;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use base64::{Engine as _, engine::general_purpose};
use serde_json::json;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::{AppState, Database};
use shared_models::auth::User;

pub struct TestConfig {
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub database_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
            jwt_issuer: "polyclinic-test".to_string(),
            jwt_audience: "polyclinic-test-clients".to_string(),
            database_url: "sqlite::memory:".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            database_url: self.database_url.clone(),
            database_max_connections: 1,
            jwt_secret: self.jwt_secret.clone(),
            jwt_issuer: self.jwt_issuer.clone(),
            jwt_audience: self.jwt_audience.clone(),
            jwt_expiration_minutes: 2,
            server_port: 0,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Fresh, migrated in-memory store wrapped in router state.
pub async fn test_state() -> Arc<AppState> {
    let db = Database::in_memory()
        .await
        .expect("in-memory database should open");
    Arc::new(AppState::new(TestConfig::default().to_app_config(), db))
}

pub struct TestUser {
    pub user_name: String,
    pub email: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            user_name: "reception".to_string(),
            email: "desk@clinic.test".to_string(),
        }
    }
}

impl TestUser {
    pub fn new(user_name: &str, email: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
            email: email.to_string(),
        }
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.user_name.clone(),
            name: Some(self.user_name.clone()),
            email: Some(self.email.clone()),
            role: None,
            created_at: Some(Utc::now()),
        }
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    /// Token accepted by `TestConfig::default()`, valid for `exp_minutes` (default 10).
    pub fn create_test_token(user: &TestUser, config: &TestConfig, exp_minutes: Option<i64>) -> String {
        Self::sign(user, &config.jwt_secret, &config.jwt_issuer, &config.jwt_audience, exp_minutes.unwrap_or(10))
    }

    pub fn create_expired_token(user: &TestUser, config: &TestConfig) -> String {
        Self::create_test_token(user, config, Some(-1))
    }

    pub fn create_invalid_signature_token(user: &TestUser, config: &TestConfig) -> String {
        Self::sign(user, "wrong-secret", &config.jwt_issuer, &config.jwt_audience, 10)
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }

    /// `Authorization` header value for a fresh default-user token.
    pub fn bearer() -> String {
        let token = Self::create_test_token(&TestUser::default(), &TestConfig::default(), None);
        format!("Bearer {}", token)
    }

    fn sign(user: &TestUser, secret: &str, issuer: &str, audience: &str, exp_minutes: i64) -> String {
        let now = Utc::now();
        let exp = now + Duration::minutes(exp_minutes);

        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        let payload = json!({
            "sub": user.user_name,
            "name": user.user_name,
            "email": user.email,
            "jti": Uuid::new_v4().to_string(),
            "iss": issuer,
            "aud": audience,
            "iat": now.timestamp(),
            "exp": exp.timestamp().max(0)
        });

        let header_encoded = general_purpose::URL_SAFE_NO_PAD.encode(header.to_string());
        let payload_encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());

        let signing_input = format!("{}.{}", header_encoded, payload_encoded);

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();
        let signature_encoded = general_purpose::URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", signing_input, signature_encoded)
    }
}
