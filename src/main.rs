// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::directory_service::DirectoryService;
use crate::application::notify_service::NotifyService;
use crate::domain::email::EmailShape;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_repository::HttpSupervisorRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;
use crate::presentation::view::DirectoryView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;
    let addr = config.server.socket_addr()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpSupervisorRepository::new(config.api.base_url.clone()));

    // Create services (application layer)
    let directory_service = DirectoryService::new(repository.clone());
    let notify_service = NotifyService::new(repository, EmailShape::new()?);

    // Create application state
    let state = Arc::new(AppState {
        directory_service,
        notify_service,
        view: DirectoryView::new(config.page.title, config.notify.mail_domain),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    tracing::info!(
        "Starting supervisor-directory on {} (api {})",
        addr,
        config.api.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
