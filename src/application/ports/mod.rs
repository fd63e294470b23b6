//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod file_store;

// Re-export common types
pub use config::ConfigStore;
pub use file_store::{FileStore, FileStoreError, RemoteFile, Revision};
