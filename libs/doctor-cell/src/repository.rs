use sqlx::SqliteConnection;

use shared_database::StoreError;

use crate::models::DoctorRecord;

const SELECT_DOCTOR: &str = "SELECT doctor_id, doctor_name, specialization, fees FROM doctors";

pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<DoctorRecord>, StoreError> {
    let sql = format!("{} ORDER BY CAST(SUBSTR(doctor_id, 2) AS INTEGER)", SELECT_DOCTOR);
    let rows = sqlx::query_as::<_, DoctorRecord>(&sql).fetch_all(conn).await?;
    Ok(rows)
}

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    doctor_id: &str,
) -> Result<Option<DoctorRecord>, StoreError> {
    let sql = format!("{} WHERE doctor_id = ?", SELECT_DOCTOR);
    let row = sqlx::query_as::<_, DoctorRecord>(&sql)
        .bind(doctor_id)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}

pub async fn exists(conn: &mut SqliteConnection, doctor_id: &str) -> Result<bool, StoreError> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM doctors WHERE doctor_id = ?")
        .bind(doctor_id)
        .fetch_optional(conn)
        .await?;
    Ok(found.is_some())
}

pub async fn list_ids(conn: &mut SqliteConnection) -> Result<Vec<String>, StoreError> {
    let ids = sqlx::query_scalar("SELECT doctor_id FROM doctors")
        .fetch_all(conn)
        .await?;
    Ok(ids)
}

pub async fn insert(conn: &mut SqliteConnection, record: &DoctorRecord) -> Result<(), StoreError> {
    sqlx::query("INSERT INTO doctors (doctor_id, doctor_name, specialization, fees) VALUES (?, ?, ?, ?)")
        .bind(&record.doctor_id)
        .bind(&record.doctor_name)
        .bind(&record.specialization)
        .bind(record.fees)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn update_fees(
    conn: &mut SqliteConnection,
    doctor_id: &str,
    fees: f64,
) -> Result<u64, StoreError> {
    let result = sqlx::query("UPDATE doctors SET fees = ? WHERE doctor_id = ?")
        .bind(fees)
        .bind(doctor_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete(conn: &mut SqliteConnection, doctor_id: &str) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM doctors WHERE doctor_id = ?")
        .bind(doctor_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
