use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_database::AppState;
use shared_models::{auth::User, error::AppError};
use shared_models::outcome::{FetchOutcome, ListOutcome};

use crate::models::{Appointment, BookingOutcome, CancelOutcome, NewAppointmentRecord};
use crate::services::AppointmentBookingService;

const APPOINTMENT_NOT_FOUND: &str = "Appointment not found. Make sure Appointment number is correct";

fn check_appointment_no(appointment_no: i64) -> Result<(), AppError> {
    if appointment_no < 1 {
        return Err(AppError::BadRequest(
            "Appointment number should be a positive number".to_string(),
        ));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn get_all_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentBookingService::new(&state.db);

    match service.get_all_appointments().await {
        ListOutcome::Listed(appointments) => Ok(Json(json!(appointments))),
        ListOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_no): Path<i64>,
) -> Result<Json<Value>, AppError> {
    check_appointment_no(appointment_no)?;

    let service = AppointmentBookingService::new(&state.db);

    match service.get_appointment(appointment_no).await {
        FetchOutcome::Found(appointment) => Ok(Json(json!(appointment))),
        FetchOutcome::NotFound => Err(AppError::NotFound(APPOINTMENT_NOT_FOUND.to_string())),
        FetchOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(request): Json<Appointment>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;
    debug!("User {} booking appointment for patient {}", user.id, request.patient_id);

    let service = AppointmentBookingService::new(&state.db);

    let stored = NewAppointmentRecord::from(&request);

    match service.book_appointment(request).await {
        BookingOutcome::Created(appointment_no) => {
            // Echo what was stored, not the raw request.
            let booked = Appointment {
                appointment_no: Some(appointment_no),
                patient_id: stored.patient_id,
                doctor_id: stored.doctor_id,
                date_of_appointment: stored.date_of_appointment,
                doctor_name: None,
                patient_name: None,
            };
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, format!("/api/appointments/{}", appointment_no))],
                Json(json!(booked)),
            ))
        }
        BookingOutcome::Conflict => Err(AppError::BadRequest(
            "Appointment already exists for given Patient ID or Doctor ID on the same date.".to_string(),
        )),
        BookingOutcome::InvalidReference => Err(AppError::BadRequest(
            "Invalid Patient ID/Doctor ID.".to_string(),
        )),
        BookingOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(appointment_no): Path<i64>,
) -> Result<Json<Value>, AppError> {
    check_appointment_no(appointment_no)?;
    debug!("User {} cancelling appointment {}", user.id, appointment_no);

    let service = AppointmentBookingService::new(&state.db);

    match service.cancel_appointment(appointment_no).await {
        CancelOutcome::Removed => Ok(Json(json!({ "message": "Appointment cancelled successfully." }))),
        CancelOutcome::NotFound => Err(AppError::NotFound(APPOINTMENT_NOT_FOUND.to_string())),
        CancelOutcome::Error => Err(AppError::generic()),
    }
}
