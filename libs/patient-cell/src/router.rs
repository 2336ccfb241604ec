use std::sync::Arc;
use axum::{middleware, routing::{get, put}, Router};

use shared_database::AppState;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

pub fn patient_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::get_all_patients).post(handlers::add_patient))
        .route("/{patient_id}", get(handlers::get_patient).delete(handlers::remove_patient))
        .route("/{patient_id}/age/{age}", put(handlers::update_patient_age))
        .layer(middleware::from_fn_with_state(state.config.clone(), auth_middleware))
        .with_state(state)
}
