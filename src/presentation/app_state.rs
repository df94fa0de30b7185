// Application state for HTTP handlers
use crate::application::directory_service::DirectoryService;
use crate::application::notify_service::NotifyService;
use crate::presentation::view::DirectoryView;

#[derive(Clone)]
pub struct AppState {
    pub directory_service: DirectoryService,
    pub notify_service: NotifyService,
    pub view: DirectoryView,
}
