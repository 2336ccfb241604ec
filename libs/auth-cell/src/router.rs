use std::sync::Arc;

use axum::{
    Router,
    routing::post,
};

use shared_database::AppState;

use crate::handlers;

/// Public account and token endpoints. Nothing here sits behind the auth middleware.
pub fn auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/validate", post(handlers::validate))
        .route("/verify", post(handlers::verify))
        .with_state(state)
}
