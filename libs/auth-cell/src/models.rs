use chrono::{DateTime, Utc};
use thiserror::Error;

use shared_database::StoreError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum RegistrationOutcome {
    Registered(String),
    /// Request refused; each entry is a message for the client.
    Rejected(Vec<String>),
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum LoginOutcome {
    /// Carries the account's email for the token.
    Authenticated(String),
    InvalidCredentials,
    Error,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(String),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(error: argon2::password_hash::Error) -> Self {
        AuthError::PasswordHash(error.to_string())
    }
}
