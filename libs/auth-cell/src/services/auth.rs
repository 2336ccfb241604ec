use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::{Database, StoreError};
use shared_models::auth::{AuthenticationRequest, AuthenticationResponse, RegisterUserRequest};
use shared_utils::jwt::issue_token;

use crate::models::{AuthError, LoginOutcome, RegistrationOutcome, UserRecord};
use crate::repository;
use crate::services::password::PasswordService;

pub struct AuthService {
    db: Database,
    config: Arc<AppConfig>,
}

impl AuthService {
    pub fn new(db: &Database, config: Arc<AppConfig>) -> Self {
        Self {
            db: db.clone(),
            config,
        }
    }

    #[instrument(skip(self, request), fields(user_name = %request.user_name))]
    pub async fn register_user(&self, request: RegisterUserRequest) -> RegistrationOutcome {
        let violations = PasswordService::policy_violations(&request.password);
        if !violations.is_empty() {
            debug!("Password rejected by policy ({} issues)", violations.len());
            return RegistrationOutcome::Rejected(violations);
        }

        match self.create_account(request).await {
            Ok(outcome) => outcome,
            Err(AuthError::Store(StoreError::UniqueViolation(message))) => {
                warn!("Concurrent registration collided: {}", message);
                RegistrationOutcome::Rejected(vec!["User name or email is already registered.".to_string()])
            }
            Err(e) => {
                error!("Failed to register user: {}", e);
                RegistrationOutcome::Error
            }
        }
    }

    async fn create_account(&self, request: RegisterUserRequest) -> Result<RegistrationOutcome, AuthError> {
        // Hashing is CPU-bound: run it before taking the write lock, on the blocking pool.
        let password = request.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || PasswordService::hash_password(&password))
            .await
            .map_err(|e| AuthError::PasswordHash(e.to_string()))??;

        let mut tx = self.db.begin_write().await?;

        let mut taken = Vec::new();
        if repository::find_by_user_name(tx.conn(), &request.user_name).await?.is_some() {
            taken.push(format!("Username '{}' is already taken.", request.user_name));
        }
        if repository::email_taken(tx.conn(), &request.email).await? {
            taken.push(format!("Email '{}' is already taken.", request.email));
        }
        if !taken.is_empty() {
            return Ok(RegistrationOutcome::Rejected(taken));
        }

        let record = UserRecord {
            user_id: Uuid::new_v4().to_string(),
            user_name: request.user_name,
            email: request.email,
            password_hash,
            first_name: request.first_name,
            last_name: request.last_name,
            created_at: Utc::now(),
        };
        repository::insert(tx.conn(), &record).await?;
        tx.commit().await?;

        info!("Registered user {}", record.user_name);
        Ok(RegistrationOutcome::Registered(record.user_name))
    }

    /// Check a user name and password pair. Unknown users and wrong
    /// passwords are indistinguishable to the caller.
    #[instrument(skip(self, request), fields(user_name = %request.user_name))]
    pub async fn validate_login(&self, request: &AuthenticationRequest) -> LoginOutcome {
        let user = match self.load_user(&request.user_name).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!("No such user");
                return LoginOutcome::InvalidCredentials;
            }
            Err(e) => {
                error!("Failed to load user: {}", e);
                return LoginOutcome::Error;
            }
        };

        match PasswordService::verify_password(&request.password, &user.password_hash) {
            Ok(true) => LoginOutcome::Authenticated(user.email),
            Ok(false) => {
                debug!("Password mismatch");
                LoginOutcome::InvalidCredentials
            }
            Err(e) => {
                error!("Stored password hash for {} is unreadable: {}", user.user_name, e);
                LoginOutcome::Error
            }
        }
    }

    async fn load_user(&self, user_name: &str) -> Result<Option<UserRecord>, StoreError> {
        let mut conn = self.db.acquire().await?;
        repository::find_by_user_name(&mut conn, user_name).await
    }

    pub fn create_token(&self, user_name: &str, email: &str) -> Result<AuthenticationResponse, AuthError> {
        let (token, expiration) = issue_token(user_name, email, &self.config).map_err(AuthError::Token)?;
        Ok(AuthenticationResponse { token, expiration })
    }
}
