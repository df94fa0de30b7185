// Notification request and the alert text shown for each outcome
use super::errors::NotifyError;
use serde::{Deserialize, Serialize};

/// Body of `POST /supervisors/notify`; also the shape of the row form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NotifyRequest {
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        Self {
            first_name,
            last_name,
            email,
        }
    }

    pub fn sent_message(&self) -> String {
        format!(
            "Notification sent\nFirst name: {}\nLast name: {}\nEmail: {}",
            self.first_name, self.last_name, self.email
        )
    }
}

impl NotifyError {
    /// Text of the blocking alert for this failure.
    pub fn alert_message(&self) -> &'static str {
        match self {
            NotifyError::InvalidEmail(_) => "Error sending notification, Invalid email!",
            NotifyError::Network(_) => "Error sending notification",
        }
    }
}
