// Domain layer - Supervisor records, directory state and notification rules
pub mod directory;
pub mod email;
pub mod errors;
pub mod notification;
pub mod supervisor;
