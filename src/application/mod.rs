// Application layer - Use cases over the remote supervisor directory
pub mod directory_service;
pub mod notify_service;
pub mod supervisor_repository;
