// HTTP request handlers
use crate::domain::errors::NotifyError;
use crate::domain::notification::NotifyRequest;
use crate::infrastructure::html_response::{html_response, stream_from_receiver};
use crate::presentation::app_state::AppState;
use crate::presentation::view::AlertKind;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Directory page: spinner first, table once the list fetch resolves
pub async fn directory_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let rx = state.directory_service.stream_directory().await;
    let view = state.view.clone();
    let tail = view.page_tail();

    stream_from_receiver(rx, move |directory| view.render_chunk(&directory), tail)
}

/// Row action: validate the address, post the notification, show the alert
pub async fn notify_supervisor(
    State(state): State<Arc<AppState>>,
    Form(request): Form<NotifyRequest>,
) -> impl IntoResponse {
    let NotifyRequest {
        first_name,
        last_name,
        email,
    } = request;

    match state
        .notify_service
        .notify(first_name, last_name, email)
        .await
    {
        Ok(sent) => html_response(
            StatusCode::OK,
            state.view.alert_page(AlertKind::Success, &sent.sent_message()),
        ),
        Err(e) => {
            let status = match &e {
                NotifyError::InvalidEmail(_) => StatusCode::UNPROCESSABLE_ENTITY,
                NotifyError::Network(reason) => {
                    tracing::warn!("Error sending notification: {}", reason);
                    StatusCode::BAD_GATEWAY
                }
            };
            html_response(status, state.view.alert_page(AlertKind::Danger, e.alert_message()))
        }
    }
}
