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
use shared_models::auth::User;
use shared_models::error::AppError;
use shared_models::outcome::{CreateOutcome, FetchOutcome, ListOutcome, RemoveOutcome, UpdateOutcome};
use shared_utils::validation::is_valid_age;

use crate::models::Patient;
use crate::services::PatientService;

const PATIENT_NOT_FOUND: &str = "Patient details not found. Make sure Patient Id is correct";

#[axum::debug_handler]
pub async fn get_all_patients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state.db);

    match service.get_all_patients().await {
        ListOutcome::Listed(patients) => Ok(Json(json!(patients))),
        ListOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state.db);

    match service.get_patient_by_id(&patient_id).await {
        FetchOutcome::Found(patient) => Ok(Json(json!(patient))),
        FetchOutcome::NotFound => Err(AppError::NotFound(PATIENT_NOT_FOUND.to_string())),
        FetchOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn add_patient(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(request): Json<Patient>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;
    debug!("User {} adding patient {}", user.id, request.patient_name);

    let service = PatientService::new(&state.db);

    match service.add_patient(request).await {
        CreateOutcome::Created(patient_id) => Ok((
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/patients/{}", patient_id))],
            Json(json!({ "patient_id": patient_id })),
        )),
        CreateOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn update_patient_age(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path((patient_id, age)): Path<(String, i64)>,
) -> Result<Json<Value>, AppError> {
    if !is_valid_age(age) {
        return Err(AppError::ValidationError("Age should be between 1 and 130".to_string()));
    }
    debug!("User {} updating age of patient {}", user.id, patient_id);

    let service = PatientService::new(&state.db);

    match service.update_patient_age(&patient_id, age).await {
        UpdateOutcome::Updated => Ok(Json(json!({ "message": "Patient age updated successfully" }))),
        UpdateOutcome::NotFound => Err(AppError::NotFound(PATIENT_NOT_FOUND.to_string())),
        UpdateOutcome::Error => Err(AppError::generic()),
    }
}

#[axum::debug_handler]
pub async fn remove_patient(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    debug!("User {} removing patient {}", user.id, patient_id);

    let service = PatientService::new(&state.db);

    match service.remove_patient(&patient_id).await {
        RemoveOutcome::Removed => Ok(Json(json!({
            "message": format!("Removed Patient (ID:{}) successfully", patient_id)
        }))),
        RemoveOutcome::NotFound => Err(AppError::NotFound(PATIENT_NOT_FOUND.to_string())),
        RemoveOutcome::InUse => Err(AppError::Conflict(format!(
            "Patient {} still has appointments. Cancel them first.",
            patient_id
        ))),
        RemoveOutcome::Error => Err(AppError::generic()),
    }
}
