use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware,
};

use shared_database::AppState;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::get_all_appointments).post(handlers::book_appointment))
        .route(
            "/{appointment_no}",
            get(handlers::get_appointment).delete(handlers::cancel_appointment),
        )
        .layer(middleware::from_fn_with_state(state.config.clone(), auth_middleware))
        .with_state(state)
}
