//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the GitHub contents API and the local config file.

pub mod config;
pub mod store;

// Re-export adapters
pub use config::XdgConfigStore;
pub use store::GithubFileStore;
