// Error types for directory loading and notification

/// Failure to load the supervisor directory. Never surfaced to the user;
/// the view logs it and renders an empty table.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Failed to fetch supervisors (status {0})")]
    Status(u16),

    #[error("Failed to fetch supervisors: {0}")]
    Transport(String),

    #[error("Failed to parse supervisors: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Notification request failed: {0}")]
    Network(String),
}
