use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Check constraint violated: {0}")]
    CheckViolation(String),

    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        let kind = match &error {
            sqlx::Error::Database(db_error) => Some((db_error.kind(), db_error.message().to_string())),
            _ => None,
        };

        match kind {
            Some((ErrorKind::UniqueViolation, message)) => StoreError::UniqueViolation(message),
            Some((ErrorKind::ForeignKeyViolation, message)) => StoreError::ForeignKeyViolation(message),
            Some((ErrorKind::CheckViolation, message)) => StoreError::CheckViolation(message),
            _ => StoreError::Sqlx(error),
        }
    }
}
