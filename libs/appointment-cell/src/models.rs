use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;
use shared_utils::validation::FieldErrors;

/// Row as stored in `appointments`.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AppointmentRecord {
    pub appointment_no: i64,
    pub patient_id: String,
    pub doctor_id: String,
    pub date_of_appointment: NaiveDate,
}

/// Appointment row joined with the names of both participants.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AppointmentDetailsRecord {
    pub appointment_no: i64,
    pub patient_id: String,
    pub doctor_id: String,
    pub date_of_appointment: NaiveDate,
    pub patient_name: String,
    pub doctor_name: String,
}

/// Insert form; the store assigns the appointment number.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointmentRecord {
    pub patient_id: String,
    pub doctor_id: String,
    pub date_of_appointment: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub appointment_no: Option<i64>,
    pub patient_id: String,
    pub doctor_id: String,
    pub date_of_appointment: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
}

impl Appointment {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors
            .check(!self.patient_id.trim().is_empty(), "patient_id is required")
            .check(!self.doctor_id.trim().is_empty(), "doctor_id is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum BookingOutcome {
    Created(i64),
    /// Doctor or patient already booked on that date.
    Conflict,
    /// Patient or doctor id does not exist.
    InvalidReference,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum CancelOutcome {
    Removed,
    NotFound,
    Error,
}
