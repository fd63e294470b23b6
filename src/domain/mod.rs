//! Domain layer - Core business logic
//!
//! Contains value objects, pure content transformations, and domain errors.
//! This layer has no dependencies on external systems.

pub mod asset;
pub mod config;
pub mod content;
pub mod error;

// Re-export common types
pub use asset::{SiteRepo, UploadedAsset};
pub use config::AppConfig;
pub use content::{Gallery, SiteContent, VideoList};
pub use error::*;
