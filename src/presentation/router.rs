// Router wiring for the directory front-end
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{directory_page, health_check, notify_supervisor};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(directory_page))
        .route("/notify", post(notify_supervisor))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
