use chrono::NaiveDate;
use sqlx::SqliteConnection;

use shared_database::StoreError;

use crate::models::{AppointmentDetailsRecord, AppointmentRecord, NewAppointmentRecord};

const SELECT_WITH_NAMES: &str = "SELECT a.appointment_no, a.patient_id, a.doctor_id, a.date_of_appointment, \
     p.patient_name, d.doctor_name \
     FROM appointments a \
     JOIN patients p ON p.patient_id = a.patient_id \
     JOIN doctors d ON d.doctor_id = a.doctor_id";

pub async fn list_all_with_names(
    conn: &mut SqliteConnection,
) -> Result<Vec<AppointmentDetailsRecord>, StoreError> {
    let sql = format!("{} ORDER BY a.appointment_no", SELECT_WITH_NAMES);
    let rows = sqlx::query_as::<_, AppointmentDetailsRecord>(&sql)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

pub async fn find_with_names(
    conn: &mut SqliteConnection,
    appointment_no: i64,
) -> Result<Option<AppointmentDetailsRecord>, StoreError> {
    let sql = format!("{} WHERE a.appointment_no = ?", SELECT_WITH_NAMES);
    let row = sqlx::query_as::<_, AppointmentDetailsRecord>(&sql)
        .bind(appointment_no)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}

/// Every appointment on `date`, the candidate set for a conflict check.
pub async fn find_on_date(
    conn: &mut SqliteConnection,
    date: NaiveDate,
) -> Result<Vec<AppointmentRecord>, StoreError> {
    let rows = sqlx::query_as::<_, AppointmentRecord>(
        "SELECT appointment_no, patient_id, doctor_id, date_of_appointment FROM appointments WHERE date_of_appointment = ?",
    )
    .bind(date)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

/// Returns the number assigned by the store.
pub async fn insert(
    conn: &mut SqliteConnection,
    record: &NewAppointmentRecord,
) -> Result<i64, StoreError> {
    let result = sqlx::query(
        "INSERT INTO appointments (patient_id, doctor_id, date_of_appointment) VALUES (?, ?, ?)",
    )
    .bind(&record.patient_id)
    .bind(&record.doctor_id)
    .bind(record.date_of_appointment)
    .execute(conn)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn delete(conn: &mut SqliteConnection, appointment_no: i64) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM appointments WHERE appointment_no = ?")
        .bind(appointment_no)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
