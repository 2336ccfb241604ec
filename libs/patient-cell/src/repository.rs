//! Row-level access to the `patients` table.

use sqlx::SqliteConnection;

use shared_database::StoreError;

use crate::models::PatientRecord;

const SELECT_PATIENT: &str =
    "SELECT patient_id, patient_name, age, gender, contact_number FROM patients";

pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<PatientRecord>, StoreError> {
    let sql = format!("{} ORDER BY CAST(SUBSTR(patient_id, 2) AS INTEGER)", SELECT_PATIENT);
    let rows = sqlx::query_as::<_, PatientRecord>(&sql).fetch_all(conn).await?;
    Ok(rows)
}

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    patient_id: &str,
) -> Result<Option<PatientRecord>, StoreError> {
    let sql = format!("{} WHERE patient_id = ?", SELECT_PATIENT);
    let row = sqlx::query_as::<_, PatientRecord>(&sql)
        .bind(patient_id)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}

pub async fn exists(conn: &mut SqliteConnection, patient_id: &str) -> Result<bool, StoreError> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM patients WHERE patient_id = ?")
        .bind(patient_id)
        .fetch_optional(conn)
        .await?;
    Ok(found.is_some())
}

pub async fn list_ids(conn: &mut SqliteConnection) -> Result<Vec<String>, StoreError> {
    let ids = sqlx::query_scalar("SELECT patient_id FROM patients")
        .fetch_all(conn)
        .await?;
    Ok(ids)
}

pub async fn insert(conn: &mut SqliteConnection, record: &PatientRecord) -> Result<(), StoreError> {
    sqlx::query(
        "INSERT INTO patients (patient_id, patient_name, age, gender, contact_number) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&record.patient_id)
    .bind(&record.patient_name)
    .bind(record.age)
    .bind(&record.gender)
    .bind(&record.contact_number)
    .execute(conn)
    .await?;
    Ok(())
}

/// Returns the number of rows changed.
pub async fn update_age(
    conn: &mut SqliteConnection,
    patient_id: &str,
    age: i64,
) -> Result<u64, StoreError> {
    let result = sqlx::query("UPDATE patients SET age = ? WHERE patient_id = ?")
        .bind(age)
        .bind(patient_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete(conn: &mut SqliteConnection, patient_id: &str) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM patients WHERE patient_id = ?")
        .bind(patient_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
