// Directory service - Loads the supervisor list once per page render
use crate::application::supervisor_repository::SupervisorRepository;
use crate::domain::directory::{duplicate_keys, DirectoryState};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct DirectoryService {
    repository: Arc<dyn SupervisorRepository>,
}

impl DirectoryService {
    pub fn new(repository: Arc<dyn SupervisorRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the directory and resolve the view state. Load failures are
    /// logged and resolve to an empty directory.
    pub async fn load_directory(&self) -> DirectoryState {
        let outcome = self.repository.list_supervisors().await;
        if let Err(e) = &outcome {
            tracing::error!("Error fetching supervisors: {}", e);
        }

        let state = DirectoryState::Loading.resolve(outcome);

        let duplicates = duplicate_keys(state.rows());
        if !duplicates.is_empty() {
            tracing::warn!(
                "Directory has duplicate identification numbers: {:?}",
                duplicates
            );
        }

        state
    }

    /// Progressive load: `Loading` is sent immediately, the resolved state
    /// follows once the fetch completes.
    pub async fn stream_directory(&self) -> mpsc::Receiver<DirectoryState> {
        let (tx, rx) = mpsc::channel(2);
        let start_time = Instant::now();

        let _ = tx.send(DirectoryState::Loading).await;

        let service = self.clone();
        tokio::spawn(async move {
            let state = service.load_directory().await;
            tracing::debug!(
                "Directory resolved with {} rows in {}ms",
                state.rows().len(),
                start_time.elapsed().as_millis()
            );
            let _ = tx.send(state).await;
        });

        rx
    }
}
