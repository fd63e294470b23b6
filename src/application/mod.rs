//! Application layer - Use cases and port interfaces
//!
//! Contains the core read-modify-write operations and trait definitions
//! for external system interactions.

pub mod ports;
pub mod sync;
pub mod upload;

// Re-export use cases
pub use sync::{SyncError, Synchronizer, CREATE_CONTENT_MESSAGE};
pub use upload::{local_file_name, UploadError, Uploader};
