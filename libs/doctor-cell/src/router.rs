use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
    middleware,
};

use shared_database::AppState;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::get_all_doctors).post(handlers::add_doctor))
        .route("/{doctor_id}", get(handlers::get_doctor).delete(handlers::remove_doctor))
        .route("/{doctor_id}/fees/{fees}", put(handlers::update_doctor_fees))
        .layer(middleware::from_fn_with_state(state.config.clone(), auth_middleware))
        .with_state(state)
}
