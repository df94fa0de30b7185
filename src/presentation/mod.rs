// Presentation layer - HTTP routes and HTML rendering
pub mod app_state;
pub mod handlers;
pub mod router;
pub mod view;
