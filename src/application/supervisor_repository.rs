// Repository trait for the remote supervisor directory
use crate::domain::errors::{DirectoryError, NotifyError};
use crate::domain::notification::NotifyRequest;
use crate::domain::supervisor::Supervisor;
use async_trait::async_trait;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait SupervisorRepository: Send + Sync {
    /// List every supervisor, in the order the remote system returns them
    async fn list_supervisors(&self) -> Result<Vec<Supervisor>, DirectoryError>;

    /// Ask the remote system to email a supervisor. Any HTTP response counts
    /// as delivered; only transport failures are errors.
    async fn send_notification(&self, request: &NotifyRequest) -> Result<(), NotifyError>;
}
