use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use voyago_core::health::{healthz, readyz};
use voyago_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{get_session, login, logout, register},
    settings::{get_settings, update_settings},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/auth/register", post(register))
        // Session
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(get_session))
        // Settings
        .route("/settings", get(get_settings))
        .route("/settings", put(update_settings))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
