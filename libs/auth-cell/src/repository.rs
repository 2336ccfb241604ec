use sqlx::SqliteConnection;

use shared_database::StoreError;

use crate::models::UserRecord;

pub async fn find_by_user_name(
    conn: &mut SqliteConnection,
    user_name: &str,
) -> Result<Option<UserRecord>, StoreError> {
    let row = sqlx::query_as::<_, UserRecord>(
        "SELECT user_id, user_name, email, password_hash, first_name, last_name, created_at FROM users WHERE user_name = ?",
    )
    .bind(user_name)
    .fetch_optional(conn)
    .await?;
    Ok(row)
}

/// Emails compare case-insensitively.
pub async fn email_taken(conn: &mut SqliteConnection, email: &str) -> Result<bool, StoreError> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(conn)
        .await?;
    Ok(found.is_some())
}

pub async fn insert(conn: &mut SqliteConnection, user: &UserRecord) -> Result<(), StoreError> {
    sqlx::query(
        "INSERT INTO users (user_id, user_name, email, password_hash, first_name, last_name, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.user_id)
    .bind(&user.user_name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(user.created_at)
    .execute(conn)
    .await?;
    Ok(())
}
