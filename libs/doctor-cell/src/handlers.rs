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
use shared_models::outcome::{CreateOutcome, FetchOutcome, ListOutcome, RemoveOutcome, UpdateOutcome};
use shared_utils::validation::is_valid_fee;

use crate::models::{fee_message, Doctor};
use crate::services::DoctorService;

const DOCTOR_NOT_FOUND: &str = "Doctor details not found. Make sure Doctor Id is correct";

#[axum::debug_handler]
pub async fn get_all_doctors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    match DoctorService::new(&state.db).get_all_doctors().await {
        ListOutcome::Listed(doctors) => Ok(Json(json!(doctors))),
        ListOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    match DoctorService::new(&state.db).get_doctor_by_id(&doctor_id).await {
        FetchOutcome::Found(doctor) => Ok(Json(json!(doctor))),
        FetchOutcome::NotFound => Err(AppError::NotFound(DOCTOR_NOT_FOUND.to_string())),
        FetchOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn add_doctor(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(request): Json<Doctor>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;
    debug!("User {} adding doctor {}", user.id, request.doctor_name);

    match DoctorService::new(&state.db).add_doctor(request).await {
        CreateOutcome::Created(doctor_id) => Ok((
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/doctors/{}", doctor_id))],
            Json(json!({ "doctor_id": doctor_id })),
        )),
        CreateOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn update_doctor_fees(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path((doctor_id, fees)): Path<(String, f64)>,
) -> Result<Json<Value>, AppError> {
    if !is_valid_fee(fees) {
        return Err(AppError::ValidationError(fee_message()));
    }
    debug!("User {} updating fees of doctor {}", user.id, doctor_id);

    match DoctorService::new(&state.db).update_doctor_fees(&doctor_id, fees).await {
        UpdateOutcome::Updated => Ok(Json(json!({ "message": "Doctor fees updated successfully" }))),
        UpdateOutcome::NotFound => Err(AppError::NotFound(DOCTOR_NOT_FOUND.to_string())),
        UpdateOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn remove_doctor(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    debug!("User {} removing doctor {}", user.id, doctor_id);

    match DoctorService::new(&state.db).remove_doctor(&doctor_id).await {
        RemoveOutcome::Removed => Ok(Json(json!({
            "message": format!("Removed Doctor (ID:{}) successfully", doctor_id)
        }))),
        RemoveOutcome::NotFound => Err(AppError::NotFound(DOCTOR_NOT_FOUND.to_string())),
        RemoveOutcome::InUse => Err(AppError::Conflict(format!(
            "Doctor {} still has appointments. Cancel them first.",
            doctor_id
        ))),
        RemoveOutcome::Error => Err(AppError::generic()),
    }
}
