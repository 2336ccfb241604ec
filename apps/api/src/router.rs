use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::router::appointment_routes;
use auth_cell::router::auth_routes;
use doctor_cell::router::doctor_routes;
use patient_cell::router::patient_routes;
use shared_database::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Polyclinic API is running!" }))
        .nest("/api/user", auth_routes(state.clone()))
        .nest("/api/patients", patient_routes(state.clone()))
        .nest("/api/doctors", doctor_routes(state.clone()))
        .nest("/api/appointments", appointment_routes(state))
}
