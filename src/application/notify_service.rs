// Notify service - Validates the address and forwards the notification
use crate::application::supervisor_repository::SupervisorRepository;
use crate::domain::email::EmailShape;
use crate::domain::errors::NotifyError;
use crate::domain::notification::NotifyRequest;
use std::sync::Arc;

#[derive(Clone)]
pub struct NotifyService {
    repository: Arc<dyn SupervisorRepository>,
    email_shape: EmailShape,
}

impl NotifyService {
    pub fn new(repository: Arc<dyn SupervisorRepository>, email_shape: EmailShape) -> Self {
        Self {
            repository,
            email_shape,
        }
    }

    /// Send one notification. An address that fails the shape check never
    /// reaches the network. Repeated calls send repeated notifications.
    pub async fn notify(
        &self,
        first_name: String,
        last_name: String,
        email: String,
    ) -> Result<NotifyRequest, NotifyError> {
        let request = NotifyRequest::new(first_name, last_name, email);
        if !self.email_shape.is_valid(&request.email) {
            tracing::warn!("Rejected notification for invalid email {:?}", request.email);
            return Err(NotifyError::InvalidEmail(request.email));
        }

        self.repository.send_notification(&request).await?;

        tracing::info!(
            "Notification sent to {} {} <{}>",
            request.first_name,
            request.last_name,
            request.email
        );
        Ok(request)
    }
}
